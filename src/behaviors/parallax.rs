use super::{EventListener, query_one, scroll_y, set_style, window};
use crate::error::PageError;
use crate::state::scroll::parallax_offset;
use web_sys::{Document, HtmlElement};

/// Moves `.hero-background` at half the scroll speed.
pub struct HeroParallax {
    _scroll: EventListener,
}

impl HeroParallax {
    pub fn mount(document: &Document) -> Result<Option<Self>, PageError> {
        let Some(background) = query_one::<HtmlElement>(document, ".hero-background") else {
            return Ok(None);
        };
        let window = window()?;
        let win = window.clone();
        let scroll = EventListener::new(&window, "scroll", move |_| {
            let offset = parallax_offset(scroll_y(&win));
            set_style(&background, "transform", &format!("translateY({}px)", offset));
        })?;
        Ok(Some(Self { _scroll: scroll }))
    }
}
