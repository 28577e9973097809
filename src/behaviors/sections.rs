use super::{EventListener, query_all, scroll_y, window};
use crate::error::PageError;
use crate::state::scroll::{active_section, is_active_link};
use web_sys::{Document, Element, HtmlElement};

pub const ACTIVE_CLASS: &str = "active";

/// Marks the nav link of the section currently scrolled into.
pub struct SectionHighlighter {
    _scroll: EventListener,
}

impl SectionHighlighter {
    pub fn mount(document: &Document, lookahead: f64) -> Result<Option<Self>, PageError> {
        let sections: Vec<HtmlElement> = query_all(document, "section[id]")?;
        let links: Vec<Element> = query_all(document, ".navbar-nav .nav-link")?;
        if sections.is_empty() || links.is_empty() {
            return Ok(None);
        }
        let window = window()?;
        let update = {
            let window = window.clone();
            move || {
                let offsets: Vec<(String, f64)> = sections
                    .iter()
                    .map(|s| (s.id(), s.offset_top() as f64))
                    .collect();
                let current =
                    active_section(offsets.iter().map(|(id, top)| (id.as_str(), *top)), scroll_y(&window), lookahead);
                for link in &links {
                    let _ = link.class_list().remove_1(ACTIVE_CLASS);
                    if is_active_link(link.get_attribute("href").as_deref(), current) {
                        let _ = link.class_list().add_1(ACTIVE_CLASS);
                    }
                }
            }
        };
        update();
        let scroll = EventListener::new(&window, "scroll", move |_| update())?;
        Ok(Some(Self { _scroll: scroll }))
    }
}
