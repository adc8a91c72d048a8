//! One-shot, staggered entrance of listed items as they scroll into view.

use super::css_num;
use crate::config::RevealConfig;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px) scale(0.9)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0) scale(1)";
pub const REVEAL_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

/// One entry of an intersection observer callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchEntry {
    /// Index of the observed item in document order.
    pub item: usize,
    pub intersecting: bool,
}

/// An item to reveal after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub item: usize,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    /// Reveal timer scheduled but not yet fired.
    Scheduled,
    Shown,
}

#[derive(Debug)]
pub struct RevealTracker {
    stagger_ms: u32,
    threshold: f64,
    bottom_margin_px: f64,
    phases: Vec<Phase>,
}

impl RevealTracker {
    pub fn new(config: &RevealConfig, item_count: usize) -> Self {
        Self {
            stagger_ms: config.stagger_ms,
            threshold: config.threshold,
            bottom_margin_px: config.bottom_margin_px,
            phases: vec![Phase::Hidden; item_count],
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Observer root margin pulling the bottom edge up by the configured margin.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", css_num(self.bottom_margin_px))
    }

    /// Process one observer batch.
    ///
    /// An intersecting entry at position `i` within the batch is revealed
    /// after `i * stagger_ms`. Items are marked revealed as soon as they are
    /// scheduled, so later batches never schedule them again.
    pub fn on_batch(&mut self, entries: &[BatchEntry]) -> Vec<Reveal> {
        let mut out = Vec::new();
        for (position, entry) in entries.iter().enumerate() {
            if !entry.intersecting {
                continue;
            }
            let Some(phase) = self.phases.get_mut(entry.item) else {
                log::warn!("reveal: observer reported unknown item {}", entry.item);
                continue;
            };
            if *phase != Phase::Hidden {
                continue;
            }
            *phase = Phase::Scheduled;
            out.push(Reveal {
                item: entry.item,
                delay_ms: self.stagger_ms.saturating_mul(position as u32),
            });
        }
        out
    }

    /// Record that an item's reveal timer fired and its shown styles applied.
    pub fn mark_shown(&mut self, item: usize) {
        if let Some(phase) = self.phases.get_mut(item) {
            *phase = Phase::Shown;
        }
    }

    /// Scheduled or already shown; either way never hidden again.
    pub fn is_revealed(&self, item: usize) -> bool {
        self.phases
            .get(item)
            .is_some_and(|p| *p != Phase::Hidden)
    }

    pub fn is_shown(&self, item: usize) -> bool {
        self.phases.get(item) == Some(&Phase::Shown)
    }

    /// Every item has been scheduled, so nothing is left to observe.
    pub fn all_revealed(&self) -> bool {
        self.phases.iter().all(|p| *p != Phase::Hidden)
    }

    /// Teardown: mark every item that is not yet shown as shown and return
    /// them, so the host can show them now instead of leaving them hidden.
    /// Covers items still waiting for their timer and items never reached.
    pub fn finish(&mut self) -> Vec<usize> {
        self.phases
            .iter_mut()
            .enumerate()
            .filter(|(_, p)| **p != Phase::Shown)
            .map(|(i, p)| {
                *p = Phase::Shown;
                i
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(item: usize, intersecting: bool) -> BatchEntry {
        BatchEntry { item, intersecting }
    }

    #[test]
    fn root_margin_shrinks_bottom() {
        let t = RevealTracker::new(&RevealConfig::default(), 0);
        assert_eq!(t.root_margin(), "0px 0px -50px 0px");
        assert_eq!(t.threshold(), 0.2);
    }

    #[test]
    fn batch_is_staggered_by_position() {
        let mut t = RevealTracker::new(&RevealConfig::default(), 3);
        let out = t.on_batch(&[entry(0, true), entry(1, true), entry(2, true)]);
        assert_eq!(
            out,
            vec![
                Reveal { item: 0, delay_ms: 0 },
                Reveal { item: 1, delay_ms: 150 },
                Reveal { item: 2, delay_ms: 300 },
            ]
        );
    }

    #[test]
    fn non_intersecting_entries_are_skipped_but_hold_their_slot() {
        let mut t = RevealTracker::new(&RevealConfig::default(), 3);
        let out = t.on_batch(&[entry(0, false), entry(2, true)]);
        assert_eq!(out, vec![Reveal { item: 2, delay_ms: 150 }]);
        assert!(!t.is_revealed(0));
        assert!(t.is_revealed(2));
    }

    #[test]
    fn reveal_happens_once() {
        let mut t = RevealTracker::new(&RevealConfig::default(), 2);
        assert_eq!(t.on_batch(&[entry(1, true)]).len(), 1);
        // scrolled out and back in
        assert!(t.on_batch(&[entry(1, false)]).is_empty());
        assert!(t.on_batch(&[entry(1, true)]).is_empty());
        assert!(t.is_revealed(1));
        assert!(!t.all_revealed());
    }

    #[test]
    fn finish_shows_scheduled_and_unreached_items() {
        let mut t = RevealTracker::new(&RevealConfig::default(), 4);
        t.on_batch(&[entry(0, true), entry(1, true)]);
        t.mark_shown(0);
        assert!(t.is_shown(0));
        assert!(!t.is_shown(1));

        // item 1 was waiting on its stagger timer, 2 and 3 never scrolled in
        assert_eq!(t.finish(), vec![1, 2, 3]);
        assert!((0..4).all(|i| t.is_shown(i)));
        assert!(t.finish().is_empty());
    }

    #[test]
    fn unknown_items_are_ignored() {
        let mut t = RevealTracker::new(&RevealConfig::default(), 1);
        assert!(t.on_batch(&[entry(5, true)]).is_empty());
        assert!(!t.is_revealed(5));
    }
}
