//! Effect configuration.
//!
//! Every timing constant, geometric constant and element selector the
//! controller uses lives here. All fields default to the values the portfolio
//! page was designed around, so an empty JSON object (`{}`) is a valid config
//! and a partial one overrides only what it names.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{FxError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Most verbose level forwarded to the browser console.
    pub log_level: LevelFilter,
    pub intro: IntroConfig,
    pub tilt: TiltConfig,
    pub ripple: RippleConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub typing: TypingConfig,
    pub floating: FloatingConfig,
    pub notification: NotificationConfig,
    pub selectors: Selectors,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            intro: IntroConfig::default(),
            tilt: TiltConfig::default(),
            ripple: RippleConfig::default(),
            reveal: RevealConfig::default(),
            parallax: ParallaxConfig::default(),
            typing: TypingConfig::default(),
            floating: FloatingConfig::default(),
            notification: NotificationConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// The intro is displaced once `scroll_y >= viewport_height / viewport_divisor`.
    pub viewport_divisor: f64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            viewport_divisor: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Pixels of pointer offset from center per degree of rotation.
    pub divisor: f64,
    pub perspective_px: f64,
    pub lift_px: f64,
    pub scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: 20.0,
            perspective_px: 1000.0,
            lift_px: 8.0,
            scale: 1.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub lifetime_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { lifetime_ms: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of an item's area that must be visible.
    pub threshold: f64,
    /// Shrinks the observation root from the bottom edge.
    pub bottom_margin_px: f64,
    /// Extra delay per position within one observer batch.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            bottom_margin_px: 50.0,
            stagger_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub rate: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { rate: 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            interval_ms: 100,
        }
    }
}

/// Half-open `[min, max)` range sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
        self.min + rng.f64() * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && (value < self.max || self.min == self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    pub start_delay_ms: u32,
    pub delay_s: Span,
    pub duration_s: Span,
    pub amplitude_px: Span,
    pub rotation_deg: Span,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            delay_s: Span::new(0.0, 2.0),
            duration_s: Span::new(3.0, 5.0),
            amplitude_px: Span::new(5.0, 10.0),
            rotation_deg: Span::new(-1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub visible_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { visible_ms: 3000 }
    }
}

/// Where each effect finds its elements. `*_id` fields are element ids,
/// the rest are CSS selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub intro_id: String,
    pub main_id: String,
    pub cards: String,
    pub project_cards: String,
    pub buttons: String,
    pub header: String,
    pub title: String,
    pub anchors: String,
    pub contact_items: String,
    pub modal_id: String,
    pub open_button_id: String,
    pub close_button: String,
    pub cancel_button: String,
    pub form_id: String,
    pub notification_id: String,
    pub name_field_id: String,
    pub email_field_id: String,
    pub message_field_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            intro_id: "cosmic-intro".into(),
            main_id: "main-portfolio".into(),
            cards: ".card".into(),
            project_cards: ".project-card".into(),
            buttons: ".modern-btn".into(),
            header: "header".into(),
            title: "header h1".into(),
            anchors: "a[href^=\"#\"]".into(),
            contact_items: ".contact-item".into(),
            modal_id: "messageModal".into(),
            open_button_id: "sendMessageBtn".into(),
            close_button: ".close".into(),
            cancel_button: ".cancel-btn".into(),
            form_id: "messageForm".into(),
            notification_id: "successNotification".into(),
            name_field_id: "senderName".into(),
            email_field_id: "senderEmail".into(),
            message_field_id: "messageText".into(),
        }
    }
}

impl FxConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| FxError::io(path, e))?;
        Self::from_json(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would divide by zero, invert a range, or make an
    /// effect meaningless.
    pub fn validate(&self) -> Result<()> {
        positive("intro.viewport_divisor", self.intro.viewport_divisor)?;
        positive("tilt.divisor", self.tilt.divisor)?;
        positive("tilt.perspective_px", self.tilt.perspective_px)?;
        positive("tilt.scale", self.tilt.scale)?;
        non_negative("tilt.lift_px", self.tilt.lift_px)?;

        if self.ripple.lifetime_ms == 0 {
            return Err(FxError::invalid_config("ripple.lifetime_ms must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FxError::invalid_config(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        non_negative("reveal.bottom_margin_px", self.reveal.bottom_margin_px)?;
        if !self.parallax.rate.is_finite() {
            return Err(FxError::invalid_config("parallax.rate must be finite"));
        }
        if self.typing.interval_ms == 0 {
            return Err(FxError::invalid_config("typing.interval_ms must be > 0"));
        }

        let f = &self.floating;
        ordered("floating.delay_s", f.delay_s)?;
        ordered("floating.duration_s", f.duration_s)?;
        ordered("floating.amplitude_px", f.amplitude_px)?;
        ordered("floating.rotation_deg", f.rotation_deg)?;
        if f.delay_s.min < 0.0 {
            return Err(FxError::invalid_config("floating.delay_s must not be negative"));
        }
        if f.duration_s.min <= 0.0 {
            return Err(FxError::invalid_config("floating.duration_s must be > 0"));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FxError::invalid_config(format!("{name} must be > 0, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FxError::invalid_config(format!(
            "{name} must be finite and >= 0, got {value}"
        )))
    }
}

fn ordered(name: &str, span: Span) -> Result<()> {
    if span.min.is_finite() && span.max.is_finite() && span.min <= span.max {
        Ok(())
    } else {
        Err(FxError::invalid_config(format!(
            "{name} range is inverted or not finite ({}..{})",
            span.min, span.max
        )))
    }
}
