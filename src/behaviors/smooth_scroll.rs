use super::{EventListener, query_all, query_one, window};
use crate::error::PageError;
use crate::state::scroll::link_scroll_top;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

pub const IN_PAGE_LINKS: &str = r##"a[href^="#"]"##;

/// Replaces jump navigation on in-page links with a smooth scroll that
/// stops `header_offset` pixels above the target.
pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn mount(document: &Document, header_offset: f64) -> Result<Option<Self>, PageError> {
        let anchors: Vec<Element> = query_all(document, IN_PAGE_LINKS)?;
        if anchors.is_empty() {
            return Ok(None);
        }
        let window = window()?;
        let listeners = anchors
            .into_iter()
            .map(|anchor| {
                let document = document.clone();
                let window = window.clone();
                let link = anchor.clone();
                EventListener::new(&anchor, "click", move |e: Event| {
                    e.prevent_default();
                    let href = link.get_attribute("href");
                    let Some(top) = link_scroll_top(href.as_deref(), header_offset, |selector| {
                        query_one::<HtmlElement>(&document, selector).map(|t| t.offset_top() as f64)
                    }) else {
                        return;
                    };
                    let opts = ScrollToOptions::new();
                    opts.set_top(top);
                    opts.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&opts);
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Self { _listeners: listeners }))
    }
}
