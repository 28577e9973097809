use super::{EventListener, query_one, scroll_y, set_style, window};
use crate::error::PageError;
use crate::state::scroll::{navbar_scrolled, navbar_style};
use web_sys::{Document, HtmlElement};

pub struct NavbarSwitch {
    _scroll: EventListener,
}

impl NavbarSwitch {
    pub fn mount(document: &Document, threshold: f64) -> Result<Option<Self>, PageError> {
        let Some(navbar) = query_one::<HtmlElement>(document, ".navbar") else {
            return Ok(None);
        };
        let window = window()?;
        let update = {
            let window = window.clone();
            move || {
                let scrolled = navbar_scrolled(scroll_y(&window), threshold);
                let (background, shadow) = navbar_style(scrolled);
                set_style(&navbar, "background", background);
                set_style(&navbar, "box-shadow", shadow);
                let _ = navbar.class_list().toggle_with_force("scrolled", scrolled);
            }
        };
        update();
        let scroll = EventListener::new(&window, "scroll", move |_| update())?;
        Ok(Some(Self { _scroll: scroll }))
    }
}
