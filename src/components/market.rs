use super::sections::section_reveal_class;
use super::use_page_config;
use crate::behaviors::{Interval, VisibilityObserver};
use crate::state::counter::format_figure;
use crate::state::{CounterAction, CounterState};
use crate::util::{clog, cwarn};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
struct MarketCardProps {
    pub value: f64,
    pub label: &'static str,
    pub note: &'static str,
}

#[function_component(MarketCard)]
fn market_card(props: &MarketCardProps) -> Html {
    html! {
        <div class="market-card fade-in">
            <div class="market-number">{ format!("${}B", format_figure(props.value)) }</div>
            <div class="market-label">{ props.label }</div>
            <p class="market-note">{ props.note }</p>
        </div>
    }
}

/// Market-size section. The counters count up once, the first time half
/// of the section is on screen.
#[function_component(MarketSection)]
pub fn market_section() -> Html {
    let cfg = use_page_config();
    let section_ref = use_node_ref();
    let counters = {
        let c = cfg.counters;
        use_reducer(move || CounterState::new(c.targets, c.steps))
    };

    {
        let section_ref = section_ref.clone();
        let counters = counters.clone();
        let threshold = cfg.counters.threshold;
        use_effect_with((), move |_| {
            let observer = section_ref.cast::<Element>().and_then(|section| {
                let observer = VisibilityObserver::new(threshold, "0px", move |_, observer| {
                    counters.dispatch(CounterAction::Start);
                    observer.disconnect();
                })
                .map_err(|e| cwarn(&format!("market counters: {}", e)))
                .ok()?;
                observer.observe(&section);
                Some(observer)
            });
            move || drop(observer)
        });
    }

    // Ticks only while animating; reaching Done runs the cleanup, which
    // clears the interval.
    {
        let handle = counters.clone();
        let step_ms = cfg.counters.step_ms();
        use_effect_with(counters.is_animating(), move |&animating| {
            let interval = if animating {
                clog("market counters: animating");
                Interval::new(step_ms, move || handle.dispatch(CounterAction::Step))
                    .map_err(|e| cwarn(&format!("market counters: {}", e)))
                    .ok()
            } else {
                None
            };
            move || drop(interval)
        });
    }

    let figures = counters.current;
    html! {
        <section id="market" class={classes!("market-section", section_reveal_class("market"))} ref={section_ref}>
            <h2 class="section-title fade-in">{"Market Opportunity"}</h2>
            <div class="market-grid">
                <MarketCard value={figures.tam} label="Total Addressable Market" note="Global early-learning and assistive education spend." />
                <MarketCard value={figures.india} label="India" note="Early-learning market across India." />
                <MarketCard value={figures.serviceable} label="Serviceable Market" note="Tablet-first households and schools we can reach today." />
            </div>
        </section>
    }
}
