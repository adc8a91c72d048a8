//! Intro → main transition driven by the vertical scroll offset.

use crate::config::IntroConfig;

/// Transform applied to the intro element once it is scrolled away.
pub const INTRO_DISPLACED_TRANSFORM: &str = "translateY(-100vh)";

/// Class added to the main container when it becomes the active section.
pub const MAIN_ACTIVE_CLASS: &str = "active";

/// Tracks whether the intro has been scrolled away.
///
/// The trigger only ever moves forward: scrolling back above the threshold
/// leaves the intro displaced.
#[derive(Debug, Clone)]
pub struct ScrollIntro {
    divisor: f64,
    displaced: bool,
}

impl ScrollIntro {
    pub fn new(config: &IntroConfig) -> Self {
        Self {
            divisor: config.viewport_divisor,
            displaced: false,
        }
    }

    pub fn threshold(&self, viewport_height: f64) -> f64 {
        viewport_height / self.divisor
    }

    /// Feed one scroll tick. Returns `true` when the host should (re)apply
    /// the displaced intro and active main styles on this tick.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> bool {
        if scroll_y >= self.threshold(viewport_height) {
            self.displaced = true;
            true
        } else {
            false
        }
    }

    pub fn is_displaced(&self) -> bool {
        self.displaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro() -> ScrollIntro {
        ScrollIntro::new(&IntroConfig::default())
    }

    #[test]
    fn below_threshold_does_nothing() {
        let mut fx = intro();
        for y in [0.0, 10.0, 99.0, 149.9] {
            assert!(!fx.on_scroll(y, 900.0));
        }
        assert!(!fx.is_displaced());
    }

    #[test]
    fn at_threshold_displaces() {
        let mut fx = intro();
        assert_eq!(fx.threshold(900.0), 150.0);
        assert!(fx.on_scroll(150.0, 900.0));
        assert!(fx.is_displaced());
    }

    #[test]
    fn scrolling_back_up_never_restores() {
        let mut fx = intro();
        assert!(fx.on_scroll(400.0, 900.0));
        assert!(!fx.on_scroll(0.0, 900.0));
        assert!(fx.is_displaced());
    }

    #[test]
    fn every_tick_past_threshold_reapplies() {
        let mut fx = intro();
        assert!(fx.on_scroll(200.0, 600.0));
        assert!(fx.on_scroll(210.0, 600.0));
    }

    #[test]
    fn threshold_follows_viewport_resize() {
        let mut fx = intro();
        assert!(!fx.on_scroll(150.0, 1200.0));
        assert!(fx.on_scroll(150.0, 600.0));
    }
}
