// Load overlay timeline: visible, then fading, then gone.
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    Fading,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderTimeline {
    /// How long the overlay stays fully opaque.
    pub hold_ms: u32,
    /// Length of the opacity transition before removal.
    pub fade_ms: u32,
}

impl Default for LoaderTimeline {
    fn default() -> Self {
        Self {
            hold_ms: 1500,
            fade_ms: 500,
        }
    }
}

impl LoaderTimeline {
    pub fn removed_at(&self) -> u32 {
        self.hold_ms.saturating_add(self.fade_ms)
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> LoaderPhase {
        if elapsed_ms < self.hold_ms {
            LoaderPhase::Visible
        } else if elapsed_ms < self.removed_at() {
            LoaderPhase::Fading
        } else {
            LoaderPhase::Removed
        }
    }

    /// Phase changes after load, as (delay from load, phase) pairs.
    pub fn transitions(&self) -> [(u32, LoaderPhase); 2] {
        [
            (self.hold_ms, LoaderPhase::Fading),
            (self.removed_at(), LoaderPhase::Removed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlay_gone_after_two_seconds() {
        let t = LoaderTimeline::default();
        assert_eq!(t.phase_at(0), LoaderPhase::Visible);
        assert_eq!(t.phase_at(1499), LoaderPhase::Visible);
        assert_eq!(t.phase_at(1500), LoaderPhase::Fading);
        assert_eq!(t.phase_at(1999), LoaderPhase::Fading);
        assert_eq!(t.phase_at(2000), LoaderPhase::Removed);
    }

    #[test]
    fn transitions_match_phases() {
        let t = LoaderTimeline::default();
        for (at, phase) in t.transitions() {
            assert_eq!(t.phase_at(at), phase);
        }
        assert_eq!(t.transitions()[1].0, 2000);
    }
}
