//! Click ripples on buttons.
//!
//! A ripple is a square overlay centered on the click point, sized to the
//! larger side of the button. `RippleField` owns the live overlays so each
//! one is removed on its own timer, and all of them on teardown.

use super::{css_num, Rect};
use crate::config::RippleConfig;

/// Name of the keyframe animation the ripple overlay plays.
pub const RIPPLE_ANIMATION: &str = "ripple";

/// Geometry of one ripple overlay, relative to the button's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        let (x, y) = rect.local(client_x, client_y);
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    /// Inline style for the overlay element.
    pub fn css_text(&self, lifetime_ms: u32) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: {RIPPLE_ANIMATION} {secs}s ease-out; pointer-events: none;",
            size = css_num(self.size),
            left = css_num(self.left),
            top = css_num(self.top),
            secs = css_num(f64::from(lifetime_ms) / 1000.0),
        )
    }
}

pub type RippleId = u64;

/// A ripple just added to the field: remove it after `remove_in_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub id: RippleId,
    pub remove_in_ms: u32,
}

/// Live ripples across every button, each holding the overlay element `T`
/// the host attached. Whoever owns the field owns the overlays: a ripple
/// leaves the page through `retire` (its timer fired) or `drain` (teardown).
#[derive(Debug)]
pub struct RippleField<T> {
    lifetime_ms: u32,
    next_id: RippleId,
    live: Vec<(RippleId, T)>,
}

impl<T> RippleField<T> {
    pub fn new(config: &RippleConfig) -> Self {
        Self {
            lifetime_ms: config.lifetime_ms,
            next_id: 0,
            live: Vec::new(),
        }
    }

    pub fn lifetime_ms(&self) -> u32 {
        self.lifetime_ms
    }

    /// Track a new overlay. Every ripple is due for removal a full lifetime
    /// after it spawns, independent of any other ripple.
    pub fn spawn(&mut self, overlay: T) -> Spawned {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push((id, overlay));
        Spawned {
            id,
            remove_in_ms: self.lifetime_ms,
        }
    }

    /// Take back the overlay whose timer fired. `None` if it is already gone.
    pub fn retire(&mut self, id: RippleId) -> Option<T> {
        let pos = self.live.iter().position(|(live, _)| *live == id)?;
        Some(self.live.remove(pos).1)
    }

    /// Take every overlay still on the page.
    pub fn drain(&mut self) -> Vec<T> {
        self.live.drain(..).map(|(_, overlay)| overlay).collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_centers_on_click() {
        let rect = Rect::new(100.0, 200.0, 120.0, 40.0);
        let g = RippleGeometry::at(rect, 130.0, 220.0);
        assert_eq!(g.size, 120.0);
        assert_eq!(g.left, -30.0);
        assert_eq!(g.top, -40.0);
    }

    #[test]
    fn geometry_uses_larger_side() {
        let rect = Rect::new(0.0, 0.0, 30.0, 90.0);
        assert_eq!(RippleGeometry::at(rect, 15.0, 45.0).size, 90.0);
    }

    #[test]
    fn css_text_plays_keyframes_for_lifetime() {
        let g = RippleGeometry {
            size: 100.0,
            left: 5.0,
            top: -2.5,
        };
        let css = g.css_text(600);
        assert!(css.contains("width: 100px; height: 100px;"));
        assert!(css.contains("left: 5px; top: -2.5px;"));
        assert!(css.contains("animation: ripple 0.6s ease-out"));
        assert!(css.contains("pointer-events: none"));
    }

    #[test]
    fn every_ripple_is_due_after_one_lifetime() {
        let mut field = RippleField::new(&RippleConfig::default());
        let a = field.spawn("a");
        let b = field.spawn("b");
        assert_eq!(a.remove_in_ms, 600);
        assert_eq!(b.remove_in_ms, 600);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rapid_clicks_are_independent() {
        let mut field = RippleField::new(&RippleConfig::default());
        let a = field.spawn("a").id;
        let b = field.spawn("b").id;
        let c = field.spawn("c").id;
        assert_eq!(field.live_count(), 3);

        assert_eq!(field.retire(b), Some("b"));
        assert_eq!(field.live_count(), 2);
        assert_eq!(field.retire(a), Some("a"));
        assert_eq!(field.retire(c), Some("c"));
        assert_eq!(field.live_count(), 0);
    }

    #[test]
    fn retire_is_idempotent() {
        let mut field = RippleField::new(&RippleConfig::default());
        let id = field.spawn(()).id;
        assert_eq!(field.retire(id), Some(()));
        assert_eq!(field.retire(id), None);
    }

    #[test]
    fn drain_hands_back_every_live_overlay() {
        let mut field = RippleField::new(&RippleConfig::default());
        let first = field.spawn(1).id;
        field.spawn(2);
        field.spawn(3);
        field.retire(first);

        assert_eq!(field.drain(), vec![2, 3]);
        assert_eq!(field.live_count(), 0);
        assert!(field.drain().is_empty());
    }
}
