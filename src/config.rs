//! Page configuration.
//!
//! Every constant the behaviors use lives here with its default. A page can
//! override any subset through an inline JSON script:
//!
//! ```html
//! <script id="page-config" type="application/json">{ "debug": true }</script>
//! ```

use crate::error::PageError;
use crate::state::{LoaderTimeline, MarketFigures, ParticleConfig};
use crate::util::cwarn;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height of the fixed header cleared by in-page links.
    pub header_offset: f64,
    pub navbar_threshold: f64,
    /// How far ahead of a section's top it already counts as current.
    pub section_lookahead: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            navbar_threshold: 50.0,
            section_lookahead: 200.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub steps: u32,
    pub threshold: f64,
    pub targets: MarketFigures,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 60,
            threshold: 0.5,
            targets: MarketFigures::TARGETS,
        }
    }
}

impl CounterConfig {
    pub fn step_ms(&self) -> u32 {
        self.duration_ms / self.steps.max(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub tick_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            tick_ms: 100,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub debug: bool,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub counters: CounterConfig,
    pub typing: TypingConfig,
    pub loader: LoaderTimeline,
    pub particles: ParticleConfig,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the inline config script; falls back to defaults when it is
    /// absent or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                cwarn(&format!("{}; using defaults", e));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = PageConfig::from_json(r#"{ "debug": true, "counters": { "steps": 30 } }"#).unwrap();
        assert!(cfg.debug);
        assert_eq!(cfg.counters.steps, 30);
        assert_eq!(cfg.counters.duration_ms, 2000);
        assert_eq!(cfg.counters.targets, MarketFigures::TARGETS);
        assert_eq!(cfg.scroll, ScrollConfig::default());
        assert_eq!(cfg.loader.removed_at(), 2000);
    }

    #[test]
    fn partial_targets_keep_remaining_figures() {
        let cfg = PageConfig::from_json(r#"{ "debug": true, "counters": { "targets": { "tam": 60 } } }"#).unwrap();
        assert!(cfg.debug);
        assert_eq!(cfg.counters.targets.tam, 60.0);
        assert_eq!(cfg.counters.targets.india, 18.0);
        assert_eq!(cfg.counters.targets.serviceable, 1.8);
        assert_eq!(cfg.counters.steps, 60);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PageConfig::from_json("{ debug: ").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn default_step_interval() {
        assert_eq!(CounterConfig::default().step_ms(), 33);
    }
}
