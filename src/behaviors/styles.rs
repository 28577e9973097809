use super::body;
use crate::error::PageError;
use web_sys::{Document, Element};

const PAGE_RULES: &str = r#"
    @keyframes floatParticle {
        0% { transform: translateY(0px) rotate(0deg); opacity: 0; }
        10% { opacity: 1; }
        90% { opacity: 1; }
        100% { transform: translateY(-100vh) rotate(360deg); opacity: 0; }
    }
    .navbar-nav .nav-link.active {
        color: var(--accent-orange) !important;
    }
    .navbar-nav .nav-link.active::after {
        width: 100% !important;
    }
"#;

/// `<style>` node carrying the particle keyframes and active-link rules.
pub struct InjectedStyles {
    node: Element,
}

impl InjectedStyles {
    pub fn mount(document: &Document) -> Result<Self, PageError> {
        let node = document.create_element("style")?;
        node.set_text_content(Some(PAGE_RULES));
        match document.head() {
            Some(head) => head.append_child(&node)?,
            None => body(document)?.append_child(&node)?,
        };
        Ok(Self { node })
    }
}

impl Drop for InjectedStyles {
    fn drop(&mut self) {
        self.node.remove();
    }
}
