// Market counter animation: idle -> animating -> done, stepped by an interval.
use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

/// The three market-size figures shown in the market section (billions).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketFigures {
    pub tam: f64,
    pub india: f64,
    pub serviceable: f64,
}

impl Default for MarketFigures {
    fn default() -> Self {
        Self::TARGETS
    }
}

impl MarketFigures {
    pub const TARGETS: MarketFigures = MarketFigures {
        tam: 50.0,
        india: 18.0,
        serviceable: 1.8,
    };

    pub const ZERO: MarketFigures = MarketFigures {
        tam: 0.0,
        india: 0.0,
        serviceable: 0.0,
    };

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            tam: f(self.tam),
            india: f(self.india),
            serviceable: f(self.serviceable),
        }
    }
}

/// Ease-out-quartic: fast start, slow finish.
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Scales `target` by `eased`, keeping one decimal place.
pub fn interpolate(target: f64, eased: f64) -> f64 {
    (target * eased * 10.0).round() / 10.0
}

/// Formats a figure the way the market cards show it: `47.3`, `50`.
pub fn format_figure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating { step: u32 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    /// The market section became visible.
    Start,
    /// One interval tick elapsed.
    Step,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    pub phase: CounterPhase,
    pub steps: u32,
    pub targets: MarketFigures,
    pub current: MarketFigures,
}

impl CounterState {
    pub fn new(targets: MarketFigures, steps: u32) -> Self {
        Self {
            phase: CounterPhase::Idle,
            steps: steps.max(1),
            targets,
            current: MarketFigures::ZERO,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CounterPhase::Animating { .. })
    }

    /// Only the first start request counts; later ones are ignored.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Animating { step: 0 };
        true
    }

    /// Advances one step. Returns true once the animation has finished.
    pub fn advance(&mut self) -> bool {
        let step = match self.phase {
            CounterPhase::Animating { step } => step + 1,
            CounterPhase::Idle => return false,
            CounterPhase::Done => return true,
        };
        if step >= self.steps {
            // snap to exact targets, no rounding residue
            self.current = self.targets;
            self.phase = CounterPhase::Done;
            return true;
        }
        let eased = ease_out_quart(step as f64 / self.steps as f64);
        self.current = self.targets.map(|t| interpolate(t, eased));
        self.phase = CounterPhase::Animating { step };
        false
    }
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CounterAction::Start => next.start(),
            CounterAction::Step => {
                let before = next.phase;
                next.advance();
                next.phase != before
            }
        };
        if changed { Rc::new(next) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_end(state: &mut CounterState) -> Vec<MarketFigures> {
        let mut frames = Vec::new();
        while !state.advance() {
            frames.push(state.current);
        }
        frames.push(state.current);
        frames
    }

    #[test]
    fn final_step_lands_exactly_on_targets() {
        let mut state = CounterState::new(MarketFigures::TARGETS, 60);
        assert!(state.start());
        let frames = run_to_end(&mut state);
        assert_eq!(frames.len(), 60);
        assert_eq!(state.current, MarketFigures::TARGETS);
        assert_eq!(state.phase, CounterPhase::Done);
        assert_eq!(state.current.serviceable.to_string(), "1.8");
    }

    #[test]
    fn halfway_step_uses_eased_rounded_values() {
        let mut state = CounterState::new(MarketFigures::TARGETS, 60);
        state.start();
        for _ in 0..30 {
            state.advance();
        }
        // eased(0.5) = 0.9375
        assert_eq!(state.current.tam, 46.9);
        assert_eq!(state.current.india, 16.9);
        assert_eq!(state.current.serviceable, 1.7);
    }

    #[test]
    fn values_never_decrease() {
        let mut state = CounterState::new(MarketFigures::TARGETS, 60);
        state.start();
        let frames = run_to_end(&mut state);
        for pair in frames.windows(2) {
            assert!(pair[1].tam >= pair[0].tam);
            assert!(pair[1].india >= pair[0].india);
            assert!(pair[1].serviceable >= pair[0].serviceable);
        }
    }

    #[test]
    fn animation_starts_at_most_once() {
        let mut state = CounterState::new(MarketFigures::TARGETS, 60);
        assert!(state.start());
        state.advance();
        assert!(!state.start());
        assert_eq!(state.phase, CounterPhase::Animating { step: 1 });
        run_to_end(&mut state);
        assert!(!state.start());
        assert_eq!(state.phase, CounterPhase::Done);
    }

    #[test]
    fn steps_before_start_do_nothing() {
        let mut state = CounterState::new(MarketFigures::TARGETS, 60);
        assert!(!state.advance());
        assert_eq!(state.current, MarketFigures::ZERO);
        assert_eq!(state.phase, CounterPhase::Idle);
    }

    #[test]
    fn reducer_ignores_repeated_start() {
        let state = Rc::new(CounterState::new(MarketFigures::TARGETS, 3));
        let started = state.reduce(CounterAction::Start);
        let again = started.clone().reduce(CounterAction::Start);
        assert!(Rc::ptr_eq(&started, &again));
        let done = again
            .reduce(CounterAction::Step)
            .reduce(CounterAction::Step)
            .reduce(CounterAction::Step);
        assert_eq!(done.phase, CounterPhase::Done);
        assert_eq!(done.current, MarketFigures::TARGETS);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn figures_format_without_trailing_zero() {
        assert_eq!(format_figure(50.0), "50");
        assert_eq!(format_figure(47.3), "47.3");
        assert_eq!(format_figure(1.8), "1.8");
        assert_eq!(format_figure(0.0), "0");
    }
}
