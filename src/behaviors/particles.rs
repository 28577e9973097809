use super::query_one;
use crate::error::PageError;
use crate::state::{ParticleConfig, ParticleSpec};
use web_sys::{Document, Element};

pub struct FloatingParticles {
    particles: Vec<Element>,
}

impl FloatingParticles {
    pub fn mount(document: &Document, cfg: &ParticleConfig) -> Result<Option<Self>, PageError> {
        let Some(hero) = query_one::<Element>(document, ".hero-section") else {
            return Ok(None);
        };
        let mut random = js_sys::Math::random;
        let mut particles = Vec::with_capacity(cfg.count as usize);
        for _ in 0..cfg.count {
            let spec = ParticleSpec::sample(cfg, &mut random);
            let particle = document.create_element("div")?;
            particle.set_class_name("floating-particle");
            particle.set_attribute("style", &spec.css_text())?;
            hero.append_child(&particle)?;
            particles.push(particle);
        }
        Ok(Some(Self { particles }))
    }
}

impl Drop for FloatingParticles {
    fn drop(&mut self) {
        for p in &self.particles {
            p.remove();
        }
    }
}
