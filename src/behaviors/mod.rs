//! DOM-bound page behaviors.
//!
//! Each behavior is an owned value created by a `mount` function. Mounting
//! returns `Ok(None)` when the elements the behavior targets are absent.
//! Dropping a mounted behavior detaches its listeners, clears its timers
//! and removes any node it inserted.

pub mod cards;
pub mod controller;
pub mod events;
pub mod loader;
pub mod navbar;
pub mod observer;
pub mod parallax;
pub mod particles;
pub mod progress;
pub mod reveal;
pub mod sections;
pub mod smooth_scroll;
pub mod styles;
pub mod timer;

pub use controller::PageController;
pub use events::EventListener;
pub use observer::VisibilityObserver;
pub use timer::{Interval, Timeout};

use crate::error::PageError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, PageError> {
    document.body().ok_or(PageError::MissingRoot("body"))
}

/// All elements matching `selector` that can be cast to `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Inline style write; a rejected property just leaves the old value.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
