use super::{EventListener, body, scroll_y, set_style, window};
use crate::error::PageError;
use crate::state::scroll::scroll_progress;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const BAR_STYLE: &str = "position:fixed; top:0; left:0; width:0%; height:3px; \
     background:linear-gradient(90deg, var(--accent-orange), var(--light-blue)); \
     z-index:9999; transition:width 0.1s ease;";

/// Fixed bar along the top edge whose width follows the scroll fraction.
pub struct ProgressBar {
    bar: HtmlElement,
    _scroll: EventListener,
}

impl ProgressBar {
    pub fn mount(document: &Document) -> Result<Self, PageError> {
        let bar: HtmlElement = document.create_element("div")?.unchecked_into();
        bar.set_class_name("scroll-progress");
        bar.style().set_css_text(BAR_STYLE);
        body(document)?.append_child(&bar)?;

        let window = window()?;
        let update = {
            let window = window.clone();
            let document = document.clone();
            let bar = bar.clone();
            move || {
                let document_height = document
                    .document_element()
                    .map(|root| root.scroll_height() as f64)
                    .unwrap_or(0.0);
                let viewport_height = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let pct = scroll_progress(scroll_y(&window), document_height, viewport_height);
                set_style(&bar, "width", &format!("{}%", pct));
            }
        };
        update();
        let scroll = EventListener::new(&window, "scroll", move |_| update())?;
        Ok(Self { bar, _scroll: scroll })
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        self.bar.remove();
    }
}
