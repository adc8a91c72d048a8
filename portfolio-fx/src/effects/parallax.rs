//! Header parallax, coalesced to one update per animation frame.

use super::css_num;
use crate::config::ParallaxConfig;

#[derive(Debug)]
pub struct ParallaxHeader {
    rate: f64,
    pending: bool,
}

impl ParallaxHeader {
    pub fn new(config: &ParallaxConfig) -> Self {
        Self {
            rate: config.rate,
            pending: false,
        }
    }

    /// Called on each scroll event. Returns `true` if the caller must
    /// schedule an animation frame; `false` if one is already pending.
    pub fn request_frame(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the animation frame. Clears the pending flag and returns
    /// the header displacement in pixels.
    pub fn on_frame(&mut self, scroll_y: f64) -> f64 {
        self.pending = false;
        self.offset(scroll_y)
    }

    /// Drop a pending frame without applying it (teardown).
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.rate
    }

    pub fn transform(offset_px: f64) -> String {
        format!("translateY({}px)", css_num(offset_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_half_scroll() {
        let p = ParallaxHeader::new(&ParallaxConfig::default());
        assert_eq!(p.offset(0.0), 0.0);
        assert_eq!(p.offset(300.0), 150.0);
        assert_eq!(p.offset(45.0), 22.5);
    }

    #[test]
    fn burst_of_scrolls_schedules_one_frame() {
        let mut p = ParallaxHeader::new(&ParallaxConfig::default());
        let scheduled = (0..50).filter(|_| p.request_frame()).count();
        assert_eq!(scheduled, 1);
        assert!(p.is_pending());

        assert_eq!(p.on_frame(120.0), 60.0);
        assert!(!p.is_pending());
        assert!(p.request_frame());
    }

    #[test]
    fn cancel_allows_rescheduling() {
        let mut p = ParallaxHeader::new(&ParallaxConfig::default());
        assert!(p.request_frame());
        p.cancel();
        assert!(p.request_frame());
    }

    #[test]
    fn transform_formats_pixels() {
        assert_eq!(ParallaxHeader::transform(60.0), "translateY(60px)");
        assert_eq!(ParallaxHeader::transform(22.5), "translateY(22.5px)");
    }
}
