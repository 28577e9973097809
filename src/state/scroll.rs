//! Scroll-derived values: navbar state, progress bar width, active section.
//!
//! Everything here is recomputed from scratch on each scroll event; nothing
//! keeps history between events.

/// Navbar is "scrolled" strictly above the threshold.
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Inline background and shadow for the navbar.
pub fn navbar_style(scrolled: bool) -> (&'static str, &'static str) {
    if scrolled {
        ("rgba(0, 0, 0, 0.98)", "0 4px 20px rgba(0, 0, 0, 0.5)")
    } else {
        ("rgba(0, 0, 0, 0.95)", "none")
    }
}

/// Progress bar width in percent, clamped to `[0, 100]`.
///
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll destination for an in-page link, leaving room for the fixed header.
pub fn anchor_scroll_top(target_top: f64, header_offset: f64) -> f64 {
    target_top - header_offset
}

/// Where a click on an in-page link should scroll to, if anywhere.
///
/// `find_top` resolves a selector to the target's top offset; it returns
/// `None` for a missing target or a selector the document rejects. A bare
/// `#` never resolves.
pub fn link_scroll_top<F>(href: Option<&str>, header_offset: f64, find_top: F) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    let selector = href.filter(|h| h.len() > 1 && h.starts_with('#'))?;
    find_top(selector).map(|top| anchor_scroll_top(top, header_offset))
}

/// Vertical translation of the hero background.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * 0.5
}

/// Id of the last section (in document order) whose top minus `lookahead`
/// is at or above the scroll position. No early exit: later sections
/// override earlier ones.
pub fn active_section<'a, I>(sections: I, scroll_y: f64, lookahead: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|&(_, top)| scroll_y >= top - lookahead)
        .last()
        .map(|(id, _)| id)
}

/// Whether a nav link with `href` should carry the active marker.
pub fn is_active_link(href: Option<&str>, current: Option<&str>) -> bool {
    match (href, current) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTIONS: [(&str, f64); 3] = [("intro", 0.0), ("features", 500.0), ("pricing", 1200.0)];

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!navbar_scrolled(0.0, 50.0));
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(50.5, 50.0));
        assert_eq!(navbar_style(false).1, "none");
    }

    #[test]
    fn later_satisfying_section_wins() {
        assert_eq!(active_section(SECTIONS, 650.0, 200.0), Some("features"));
        assert_eq!(active_section(SECTIONS, 1000.0, 200.0), Some("pricing"));
        assert_eq!(active_section(SECTIONS, 299.0, 200.0), Some("intro"));
    }

    #[test]
    fn no_section_before_first_top() {
        let sections = [("a", 400.0), ("b", 900.0)];
        assert_eq!(active_section(sections, 100.0, 200.0), None);
        assert_eq!(active_section(sections, 200.0, 200.0), Some("a"));
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(scroll_progress(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(2200.0, 3000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(1100.0, 3000.0, 800.0), 50.0);
    }

    #[test]
    fn progress_is_clamped_and_guarded() {
        assert_eq!(scroll_progress(2500.0, 3000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn nav_link_matching() {
        assert!(is_active_link(Some("#market"), Some("market")));
        assert!(!is_active_link(Some("#team"), Some("market")));
        assert!(!is_active_link(Some("#"), None));
        assert!(!is_active_link(None, Some("market")));
    }

    fn page_lookup(selector: &str) -> Option<f64> {
        match selector {
            "#market" => Some(1200.0),
            _ => None,
        }
    }

    #[test]
    fn link_to_existing_section_scrolls_below_header() {
        assert_eq!(link_scroll_top(Some("#market"), 80.0, page_lookup), Some(1120.0));
    }

    #[test]
    fn link_to_missing_target_does_not_scroll() {
        assert_eq!(link_scroll_top(Some("#nope"), 80.0, page_lookup), None);
        // rejected by querySelector, so the lookup reports nothing
        assert_eq!(link_scroll_top(Some("#1-bad["), 80.0, page_lookup), None);
        assert_eq!(link_scroll_top(None, 80.0, page_lookup), None);
    }

    #[test]
    fn bare_hash_never_looks_up_a_target() {
        let mut looked_up = false;
        let top = link_scroll_top(Some("#"), 80.0, |_| {
            looked_up = true;
            Some(0.0)
        });
        assert_eq!(top, None);
        assert!(!looked_up);
    }

    #[test]
    fn anchor_and_parallax_offsets() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
        assert_eq!(parallax_offset(300.0), 150.0);
    }
}
