use super::{VisibilityObserver, query_all, set_style};
use crate::config::RevealConfig;
use crate::error::PageError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const ANIMATED_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right";
pub const VISIBLE_CLASS: &str = "visible";

/// Adds `visible` to animated elements the first time they scroll into view.
pub struct RevealOnScroll {
    _observer: VisibilityObserver,
}

impl RevealOnScroll {
    pub fn mount(document: &Document, cfg: &RevealConfig) -> Result<Option<Self>, PageError> {
        let targets: Vec<Element> = query_all(document, ANIMATED_SELECTOR)?;
        if targets.is_empty() {
            return Ok(None);
        }
        let observer = VisibilityObserver::new(cfg.threshold, &cfg.root_margin, |el, observer| {
            reveal(el);
            observer.unobserve(el);
        })?;
        for el in &targets {
            observer.observe(el);
        }
        Ok(Some(Self { _observer: observer }))
    }
}

/// Extra animation delay for the slide-in variants.
fn reveal_delay(slide_left: bool, slide_right: bool) -> Option<&'static str> {
    if slide_left {
        Some("0.2s")
    } else if slide_right {
        Some("0.4s")
    } else {
        None
    }
}

fn reveal(el: &Element) {
    let classes = el.class_list();
    let _ = classes.add_1(VISIBLE_CLASS);
    let delay = reveal_delay(classes.contains("slide-in-left"), classes.contains("slide-in-right"));
    if let (Some(delay), Some(el)) = (delay, el.dyn_ref::<HtmlElement>()) {
        set_style(el, "animation-delay", delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_ins_get_staggered_delays() {
        assert_eq!(reveal_delay(true, false), Some("0.2s"));
        assert_eq!(reveal_delay(false, true), Some("0.4s"));
        assert_eq!(reveal_delay(true, true), Some("0.2s"));
        assert_eq!(reveal_delay(false, false), None);
    }
}
