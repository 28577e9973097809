use super::{EventListener, Timeout, body, set_style, window};
use crate::error::PageError;
use crate::state::{LoaderPhase, LoaderTimeline};
use crate::util::{clog, cwarn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const OVERLAY_STYLE: &str = "position:fixed; top:0; left:0; width:100%; height:100%; \
     background:var(--dark-blue); display:flex; justify-content:center; align-items:center; \
     z-index:10000;";

const OVERLAY_CONTENT: &str = r#"
    <div style="text-align: center;">
        <div style="font-size: 3rem; color: var(--accent-orange); margin-bottom: 1rem;">
            <i class="fas fa-book-open"></i>
        </div>
        <div style="color: var(--text-white); font-size: 1.5rem; font-weight: 600;">Touch Learn</div>
        <div style="color: var(--text-light); margin-top: 0.5rem;">Loading...</div>
    </div>
"#;

/// Full-screen branding overlay, faded out and removed on a fixed timeline.
struct Overlay {
    element: HtmlElement,
    _timers: Vec<Timeout>,
}

impl Overlay {
    fn show(document: &Document, timeline: LoaderTimeline) -> Result<Self, PageError> {
        let element: HtmlElement = document.create_element("div")?.unchecked_into();
        element.set_class_name("page-loader");
        element.style().set_css_text(OVERLAY_STYLE);
        set_style(&element, "transition", &format!("opacity {}ms ease", timeline.fade_ms));
        element.set_inner_html(OVERLAY_CONTENT);
        apply(&element, timeline.phase_at(0));
        body(document)?.append_child(&element)?;
        clog("loader: shown");

        let timers = timeline
            .transitions()
            .into_iter()
            .map(|(at, phase)| {
                let element = element.clone();
                Timeout::new(at, move || apply(&element, phase))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            element,
            _timers: timers,
        })
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.element.remove();
    }
}

fn apply(element: &HtmlElement, phase: LoaderPhase) {
    match phase {
        LoaderPhase::Visible => set_style(element, "opacity", "1"),
        LoaderPhase::Fading => set_style(element, "opacity", "0"),
        LoaderPhase::Removed => {
            element.remove();
            clog("loader: removed");
        }
    }
}

/// Shows the overlay on the window `load` event, or right away when the
/// document has already finished loading.
pub struct PageLoader {
    overlay: Rc<RefCell<Option<Overlay>>>,
    _load: Option<EventListener>,
}

impl PageLoader {
    pub fn mount(document: &Document, timeline: LoaderTimeline) -> Result<Self, PageError> {
        let overlay = Rc::new(RefCell::new(None));
        if document.ready_state() == "complete" {
            *overlay.borrow_mut() = Some(Overlay::show(document, timeline)?);
            return Ok(Self { overlay, _load: None });
        }
        let load = {
            let overlay = overlay.clone();
            let document = document.clone();
            let window = window()?;
            EventListener::new(&window, "load", move |_| {
                if overlay.borrow().is_some() {
                    return;
                }
                match Overlay::show(&document, timeline) {
                    Ok(o) => *overlay.borrow_mut() = Some(o),
                    Err(e) => cwarn(&format!("loader: {}", e)),
                }
            })?
        };
        Ok(Self {
            overlay,
            _load: Some(load),
        })
    }
}

impl Drop for PageLoader {
    fn drop(&mut self) {
        self.overlay.borrow_mut().take();
    }
}
