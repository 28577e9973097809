use super::{EventListener, query_all, set_style};
use crate::error::PageError;
use web_sys::{Document, HtmlElement};

pub const CARD_SELECTOR: &str = ".problem-card, .persona-card, .team-card, .market-card";
pub const HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Lift-and-scale on pointer enter, identity transform on leave.
pub struct CardHover {
    _listeners: Vec<EventListener>,
}

impl CardHover {
    pub fn mount(document: &Document) -> Result<Option<Self>, PageError> {
        let cards: Vec<HtmlElement> = query_all(document, CARD_SELECTOR)?;
        if cards.is_empty() {
            return Ok(None);
        }
        let mut listeners = Vec::with_capacity(cards.len() * 2);
        for card in cards {
            for (event, transform) in [("mouseenter", HOVER_TRANSFORM), ("mouseleave", REST_TRANSFORM)] {
                let el = card.clone();
                listeners.push(EventListener::new(&card, event, move |_| {
                    set_style(&el, "transform", transform)
                })?);
            }
        }
        Ok(Some(Self { _listeners: listeners }))
    }
}
