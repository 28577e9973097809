use super::sections::section_reveal_class;
use super::use_page_config;
use crate::behaviors::Timeout;
use crate::state::{TypeAction, Typewriter};
use crate::util::cwarn;
use yew::prelude::*;

pub const HERO_TITLE: &str = "Learning at the Tip of Every Finger";

#[derive(Properties, PartialEq, Clone)]
pub struct HeroTitleProps {
    pub text: AttrValue,
}

/// Heading typed out one character at a time with a trailing caret.
#[function_component(HeroTitle)]
pub fn hero_title(props: &HeroTitleProps) -> Html {
    let cfg = use_page_config();
    let typer = {
        let text = props.text.clone();
        use_reducer(move || Typewriter::new(&text))
    };

    {
        let handle = typer.clone();
        let delay = typer.next_delay(cfg.typing.start_delay_ms, cfg.typing.tick_ms);
        use_effect_with((typer.shown(), typer.is_done()), move |&(_, done)| {
            let timer = if done {
                None
            } else {
                Timeout::new(delay, move || handle.dispatch(TypeAction::Tick))
                    .map_err(|e| cwarn(&format!("typing: {}", e)))
                    .ok()
            };
            move || drop(timer)
        });
    }

    let caret = if typer.caret_visible() {
        "border-right:3px solid var(--accent-orange);"
    } else {
        "border-right:none;"
    };
    html! {
        <h1 class="hero-title" style={caret} aria-label={props.text.clone()}>{ typer.visible_text() }</h1>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class={classes!("hero-section", section_reveal_class("home"))}>
            <div class="hero-background"></div>
            <div class="hero-content">
                <HeroTitle text={HERO_TITLE} />
                <p class="hero-subtitle fade-in">
                    {"Tactile, guided lessons that turn any tablet into a patient tutor for early learners."}
                </p>
                <div class="hero-actions fade-in">
                    <a class="btn btn-primary" href="#problem">{"Why Touch Learn"}</a>
                    <a class="btn btn-outline" href="#market">{"See the Market"}</a>
                </div>
            </div>
        </section>
    }
}
