//! 3D tilt of a card following the pointer.

use super::{css_num, Rect};
use crate::config::TiltConfig;

/// Rotation derived from one pointer position over a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

#[derive(Debug, Clone)]
pub struct CardTilt {
    config: TiltConfig,
}

impl CardTilt {
    pub fn new(config: &TiltConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Pointer below center tips the top edge away (positive X rotation);
    /// pointer right of center turns the card right (negative Y rotation).
    pub fn tilt(&self, rect: Rect, client_x: f64, client_y: f64) -> Tilt {
        let (x, y) = rect.local(client_x, client_y);
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        Tilt {
            rotate_x: (y - center_y) / self.config.divisor,
            rotate_y: (center_x - x) / self.config.divisor,
        }
    }

    /// Transform for a pointer moving over the card.
    pub fn hover_transform(&self, rect: Rect, client_x: f64, client_y: f64) -> String {
        let t = self.tilt(rect, client_x, client_y);
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px) scale({})",
            css_num(self.config.perspective_px),
            css_num(t.rotate_x),
            css_num(t.rotate_y),
            css_num(self.config.lift_px),
            css_num(self.config.scale),
        )
    }

    /// Transform once the pointer leaves.
    pub fn neutral_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX(0) rotateY(0) translateY(0) scale(1)",
            css_num(self.config.perspective_px)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardTilt {
        CardTilt::new(&TiltConfig::default())
    }

    #[test]
    fn center_is_flat() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let t = card().tilt(rect, 100.0, 50.0);
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
    }

    #[test]
    fn corners_tilt_by_distance_over_twenty() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        // bottom-right corner: 100px right and 50px below center
        let t = card().tilt(rect, 210.0, 120.0);
        assert_eq!(t.rotate_x, 2.5);
        assert_eq!(t.rotate_y, -5.0);
        // top-left corner
        let t = card().tilt(rect, 10.0, 20.0);
        assert_eq!(t.rotate_x, -2.5);
        assert_eq!(t.rotate_y, 5.0);
    }

    #[test]
    fn hover_transform_lifts_and_scales() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let css = card().hover_transform(rect, 200.0, 100.0);
        assert_eq!(
            css,
            "perspective(1000px) rotateX(2.5deg) rotateY(-5deg) translateY(-8px) scale(1.02)"
        );
    }

    #[test]
    fn neutral_transform_resets() {
        assert_eq!(
            card().neutral_transform(),
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)"
        );
    }
}
