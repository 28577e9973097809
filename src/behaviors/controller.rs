use super::cards::CardHover;
use super::loader::PageLoader;
use super::navbar::NavbarSwitch;
use super::parallax::HeroParallax;
use super::particles::FloatingParticles;
use super::progress::ProgressBar;
use super::reveal::RevealOnScroll;
use super::sections::SectionHighlighter;
use super::smooth_scroll::SmoothScroll;
use super::styles::InjectedStyles;
use super::document;
use crate::config::PageConfig;
use crate::error::PageError;
use crate::util::{clog, cwarn};

/// Owns every document-level behavior of the landing page.
///
/// Built once after the page markup renders; dropping it unmounts all of
/// them. The market counters and the hero typing effect are component
/// state and are not part of the controller.
pub struct PageController {
    styles: Option<InjectedStyles>,
    reveal: Option<RevealOnScroll>,
    smooth_scroll: Option<SmoothScroll>,
    navbar: Option<NavbarSwitch>,
    parallax: Option<HeroParallax>,
    progress: Option<ProgressBar>,
    sections: Option<SectionHighlighter>,
    particles: Option<FloatingParticles>,
    cards: Option<CardHover>,
    loader: Option<PageLoader>,
}

impl PageController {
    /// Only a missing window/document is fatal. A behavior that fails to
    /// mount is reported and left out.
    pub fn mount(cfg: &PageConfig) -> Result<Self, PageError> {
        let doc = document()?;
        let scroll = cfg.scroll;
        let page = Self {
            styles: attach("styles", InjectedStyles::mount(&doc).map(Some)),
            reveal: attach("reveal", RevealOnScroll::mount(&doc, &cfg.reveal)),
            smooth_scroll: attach("smooth-scroll", SmoothScroll::mount(&doc, scroll.header_offset)),
            navbar: attach("navbar", NavbarSwitch::mount(&doc, scroll.navbar_threshold)),
            parallax: attach("parallax", HeroParallax::mount(&doc)),
            progress: attach("progress", ProgressBar::mount(&doc).map(Some)),
            sections: attach("sections", SectionHighlighter::mount(&doc, scroll.section_lookahead)),
            particles: attach("particles", FloatingParticles::mount(&doc, &cfg.particles)),
            cards: attach("cards", CardHover::mount(&doc)),
            loader: attach("loader", PageLoader::mount(&doc, cfg.loader).map(Some)),
        };
        clog(&format!("page controller mounted: {}", page.summary()));
        Ok(page)
    }

    fn summary(&self) -> String {
        [
            ("styles", self.styles.is_some()),
            ("reveal", self.reveal.is_some()),
            ("smooth-scroll", self.smooth_scroll.is_some()),
            ("navbar", self.navbar.is_some()),
            ("parallax", self.parallax.is_some()),
            ("progress", self.progress.is_some()),
            ("sections", self.sections.is_some()),
            ("particles", self.particles.is_some()),
            ("cards", self.cards.is_some()),
            ("loader", self.loader.is_some()),
        ]
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn attach<T>(name: &str, result: Result<Option<T>, PageError>) -> Option<T> {
    result.unwrap_or_else(|e| {
        cwarn(&format!("{}: {}", name, e));
        None
    })
}
