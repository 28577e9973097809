pub mod app;
pub mod hero;
pub mod market;
pub mod navbar;
pub mod sections;

use crate::config::PageConfig;
use std::rc::Rc;
use yew::prelude::*;

/// Page config from the app context, defaults outside of it.
#[hook]
pub fn use_page_config() -> Rc<PageConfig> {
    use_context::<Rc<PageConfig>>().unwrap_or_default()
}
