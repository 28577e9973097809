use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: u32,
    /// Shortest float animation, seconds.
    pub min_duration_s: f64,
    /// Random extra added on top of `min_duration_s`.
    pub duration_spread_s: f64,
    pub max_delay_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 20,
            min_duration_s: 5.0,
            duration_spread_s: 10.0,
            max_delay_s: 5.0,
        }
    }
}

/// One decorative particle in the hero section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    /// `random` yields values in `[0, 1)`.
    pub fn sample(cfg: &ParticleConfig, random: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_pct: random() * 100.0,
            top_pct: random() * 100.0,
            duration_s: cfg.min_duration_s + random() * cfg.duration_spread_s,
            delay_s: random() * cfg.max_delay_s,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position:absolute; width:4px; height:4px; background:rgba(255, 255, 255, 0.3); border-radius:50%; \
             left:{}%; top:{}%; animation:floatParticle {}s linear infinite; animation-delay:{}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn samples_stay_in_bounds() {
        let cfg = ParticleConfig::default();
        for r in [0.0, 0.25, 0.999_999] {
            let p = ParticleSpec::sample(&cfg, &mut || r);
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((5.0..15.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn draws_are_assigned_in_order() {
        let mut draws = [0.1, 0.2, 0.5, 0.4].into_iter();
        let p = ParticleSpec::sample(&ParticleConfig::default(), &mut || draws.next().unwrap_or(0.0));
        assert_eq!(p.left_pct, 10.0);
        assert_eq!(p.top_pct, 20.0);
        assert_eq!(p.duration_s, 10.0);
        assert_eq!(p.delay_s, 2.0);
        assert!(p.css_text().contains("animation:floatParticle 10s linear infinite"));
    }
}
