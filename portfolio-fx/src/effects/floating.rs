//! Randomized idle "float" animation for cards.
//!
//! Each card gets its own keyframes (`float-<index>`) with a random lift and
//! tilt, played with a random duration and start delay. Generated once per
//! mount.

use crate::config::FloatingConfig;

pub const FLOAT_PREFIX: &str = "float-";

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingAnimation {
    pub index: usize,
    pub delay_s: f64,
    pub duration_s: f64,
    pub amplitude_px: f64,
    pub rotation_deg: f64,
}

impl FloatingAnimation {
    pub fn generate(index: usize, config: &FloatingConfig, rng: &mut fastrand::Rng) -> Self {
        Self {
            index,
            delay_s: config.delay_s.sample(rng),
            duration_s: config.duration_s.sample(rng),
            amplitude_px: config.amplitude_px.sample(rng),
            rotation_deg: config.rotation_deg.sample(rng),
        }
    }

    /// One animation per card, in card order.
    pub fn generate_all(count: usize, config: &FloatingConfig, rng: &mut fastrand::Rng) -> Vec<Self> {
        (0..count)
            .map(|i| Self::generate(i, config, rng))
            .collect()
    }

    pub fn name(&self) -> String {
        format!("{FLOAT_PREFIX}{}", self.index)
    }

    /// `@keyframes` rule for this card.
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {name} {{\n  0% {{ transform: translateY(0px) rotate(0deg); }}\n  100% {{ transform: translateY(-{amp:.3}px) rotate({rot:.3}deg); }}\n}}\n",
            name = self.name(),
            amp = self.amplitude_px,
            rot = self.rotation_deg,
        )
    }

    /// Entry for the CSS `animation` shorthand list.
    pub fn animation_entry(&self) -> String {
        format!(
            "{} {:.3}s ease-in-out {:.3}s infinite alternate",
            self.name(),
            self.duration_s,
            self.delay_s
        )
    }

    /// Append this animation to a card's existing `animation` value.
    pub fn append_to(&self, existing: &str) -> String {
        let existing = existing.trim();
        if existing.is_empty() || existing == "none" {
            self.animation_entry()
        } else {
            format!("{existing}, {}", self.animation_entry())
        }
    }
}
