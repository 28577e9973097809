use std::rc::Rc;

mod behaviors;
mod components;
mod config;
mod error;
mod state;
mod util;

use components::app::{App, AppProps};
use config::PageConfig;

fn main() {
    let config = PageConfig::load();
    util::set_debug(config.debug);
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
