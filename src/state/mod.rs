pub mod counter;
pub mod loader;
pub mod particles;
pub mod scroll;
pub mod typing;

pub use counter::{CounterAction, CounterState, MarketFigures};
pub use loader::{LoaderPhase, LoaderTimeline};
pub use particles::{ParticleConfig, ParticleSpec};
pub use typing::{TypeAction, Typewriter};
