//! What the controller managed to wire on a given page.
//!
//! Every feature is optional: a page without a modal simply has no modal
//! behavior. The report makes that visible in the console at mount.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ScrollIntro,
    CardTilt,
    ButtonRipple,
    Reveal,
    Parallax,
    Typing,
    AnchorScroll,
    ContactHover,
    Floating,
    ModalOpen,
    ModalClose,
    ModalCancel,
    ModalBackdrop,
    ModalSubmit,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::ScrollIntro => "scroll intro",
            Feature::CardTilt => "card tilt",
            Feature::ButtonRipple => "button ripple",
            Feature::Reveal => "project reveal",
            Feature::Parallax => "header parallax",
            Feature::Typing => "title typing",
            Feature::AnchorScroll => "anchor scroll",
            Feature::ContactHover => "contact hover",
            Feature::Floating => "card float",
            Feature::ModalOpen => "modal open",
            Feature::ModalClose => "modal close",
            Feature::ModalCancel => "modal cancel",
            Feature::ModalBackdrop => "modal backdrop",
            Feature::ModalSubmit => "modal submit",
        }
    }

    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Feature::ModalOpen
                | Feature::ModalClose
                | Feature::ModalCancel
                | Feature::ModalBackdrop
                | Feature::ModalSubmit
        )
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line per feature: wired (with how many targets) or skipped.
#[derive(Debug, Default, Clone)]
pub struct WiringReport {
    entries: Vec<(Feature, usize)>,
}

impl WiringReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a feature and how many elements it attached to. Zero means
    /// the feature was skipped.
    pub fn record(&mut self, feature: Feature, targets: usize) {
        self.entries.push((feature, targets));
    }

    pub fn record_optional<T>(&mut self, feature: Feature, element: Option<&T>) {
        self.record(feature, usize::from(element.is_some()));
    }

    pub fn targets(&self, feature: Feature) -> usize {
        self.entries
            .iter()
            .filter(|(f, _)| *f == feature)
            .map(|(_, n)| n)
            .sum()
    }

    pub fn is_wired(&self, feature: Feature) -> bool {
        self.targets(feature) > 0
    }

    pub fn skipped(&self) -> impl Iterator<Item = Feature> + '_ {
        self.entries
            .iter()
            .filter(|(_, n)| *n == 0)
            .map(|(f, _)| *f)
    }

    /// Modal element presence, one `name: found|missing` pair per control.
    pub fn modal_summary(&self) -> String {
        self.entries
            .iter()
            .filter(|(f, _)| f.is_modal())
            .map(|(f, n)| format!("{f}: {}", if *n > 0 { "found" } else { "missing" }))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WiringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wired = self.entries.iter().filter(|(_, n)| *n > 0).count();
        write!(f, "{wired}/{} features wired", self.entries.len())?;
        let skipped: Vec<&str> = self.skipped().map(|f| f.label()).collect();
        if !skipped.is_empty() {
            write!(f, " (skipped: {})", skipped.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_targets_and_skips() {
        let mut report = WiringReport::new();
        report.record(Feature::CardTilt, 4);
        report.record(Feature::ButtonRipple, 0);
        report.record_optional(Feature::Typing, Some(&()));
        report.record_optional::<()>(Feature::ModalOpen, None);

        assert_eq!(report.targets(Feature::CardTilt), 4);
        assert!(report.is_wired(Feature::Typing));
        assert!(!report.is_wired(Feature::ButtonRipple));
        assert_eq!(
            report.skipped().collect::<Vec<_>>(),
            vec![Feature::ButtonRipple, Feature::ModalOpen]
        );
        assert_eq!(
            report.to_string(),
            "2/4 features wired (skipped: button ripple, modal open)"
        );
    }

    #[test]
    fn modal_summary_lists_only_modal_controls() {
        let mut report = WiringReport::new();
        report.record(Feature::Parallax, 1);
        report.record(Feature::ModalOpen, 1);
        report.record(Feature::ModalCancel, 0);
        assert_eq!(report.modal_summary(), "modal open: found, modal cancel: missing");
    }

    #[test]
    fn fully_wired_report_has_no_skip_list() {
        let mut report = WiringReport::new();
        report.record(Feature::Reveal, 6);
        assert_eq!(report.to_string(), "1/1 features wired");
    }
}
