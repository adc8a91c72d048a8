//! CSS injected by the controller, also emitted by the `styles` CLI command
//! for pages that want it prebuilt.

use crate::config::FxConfig;
use crate::effects::floating::FloatingAnimation;
use crate::effects::ripple::RIPPLE_ANIMATION;

/// Keyframes for the button ripple. Injected once at mount.
pub fn ripple_keyframes_css() -> String {
    format!(
        r#"@keyframes {RIPPLE_ANIMATION} {{
  to {{
    transform: scale(2);
    opacity: 0;
  }}
}}
"#
    )
}

/// Keyframes for every card's float animation, in card order.
pub fn floating_keyframes_css(animations: &[FloatingAnimation]) -> String {
    animations.iter().map(|a| a.keyframes_css()).collect()
}

/// Full stylesheet for `card_count` cards. Float parameters are drawn from
/// `rng`, so a seeded generator gives a reproducible sheet.
pub fn build_stylesheet(config: &FxConfig, card_count: usize, rng: &mut fastrand::Rng) -> String {
    let animations = FloatingAnimation::generate_all(card_count, &config.floating, rng);

    let mut out = String::from("/* ── Ripple ──────────────────────────────────────── */\n");
    out.push_str(&ripple_keyframes_css());
    if !animations.is_empty() {
        out.push_str("\n/* ── Card float ────────────────────────────────── */\n");
        out.push_str(&floating_keyframes_css(&animations));
        out.push_str(&floating_rules_css(&config.selectors.cards, &animations));
    }
    out
}

/// `:nth-of-type` rules attaching each float animation to its card, for the
/// prebuilt sheet where no script appends to the inline `animation` list.
fn floating_rules_css(card_selector: &str, animations: &[FloatingAnimation]) -> String {
    animations
        .iter()
        .map(|a| {
            format!(
                "{card_selector}:nth-of-type({}) {{ animation: {}; }}\n",
                a.index + 1,
                a.animation_entry()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_keyframes_scale_and_fade() {
        let css = ripple_keyframes_css();
        assert!(css.starts_with("@keyframes ripple {"));
        assert!(css.contains("transform: scale(2);"));
        assert!(css.contains("opacity: 0;"));
    }

    #[test]
    fn stylesheet_without_cards_has_only_ripple() {
        let mut rng = fastrand::Rng::with_seed(0);
        let css = build_stylesheet(&FxConfig::default(), 0, &mut rng);
        assert!(css.contains("@keyframes ripple"));
        assert!(!css.contains("float-"));
    }

    #[test]
    fn stylesheet_has_one_block_per_card() {
        let mut rng = fastrand::Rng::with_seed(3);
        let css = build_stylesheet(&FxConfig::default(), 3, &mut rng);
        assert_eq!(css.matches("@keyframes float-").count(), 3);
        assert!(css.contains(".card:nth-of-type(1) { animation: float-0 "));
        assert!(css.contains(".card:nth-of-type(3) { animation: float-2 "));
    }

    #[test]
    fn seeded_stylesheet_is_reproducible() {
        let config = FxConfig::default();
        let a = build_stylesheet(&config, 4, &mut fastrand::Rng::with_seed(11));
        let b = build_stylesheet(&config, 4, &mut fastrand::Rng::with_seed(11));
        assert_eq!(a, b);
    }
}
