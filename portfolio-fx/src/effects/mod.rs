//! Host-independent logic for each page effect.
//!
//! Each submodule owns the state of exactly one effect and turns browser
//! inputs (scroll offsets, pointer positions, observer batches, clicks) into
//! the style values the host should apply. Nothing here touches the DOM, so
//! every behavior is testable on the native target.
//!
//! - `intro` — one-directional intro/main transition on scroll
//! - `tilt` — 3D card tilt under the pointer
//! - `ripple` — click ripples and their lifetimes
//! - `reveal` — one-shot staggered entrance of listed items
//! - `parallax` — frame-coalesced header displacement
//! - `typing` — character-by-character title reveal
//! - `anchor` — same-page fragment resolution
//! - `floating` — randomized per-card float keyframes
//! - `contact` — contact item hover nudge
//! - `modal` — "send message" dialog state machine

pub mod anchor;
pub mod contact;
pub mod floating;
pub mod intro;
pub mod modal;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod tilt;
pub mod typing;

/// Bounding box in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Offset of a client-space point relative to this box's top-left corner.
    pub fn local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Format a CSS length/angle number without a trailing `.0` for whole values.
pub(crate) fn css_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_offsets_subtract_origin() {
        let rect = Rect::new(100.0, 50.0, 200.0, 80.0);
        assert_eq!(rect.local(150.0, 60.0), (50.0, 10.0));
    }

    #[test]
    fn css_num_drops_whole_fraction() {
        assert_eq!(css_num(8.0), "8");
        assert_eq!(css_num(-0.0), "0");
        assert_eq!(css_num(1.02), "1.02");
        assert_eq!(css_num(-2.5), "-2.5");
    }
}
