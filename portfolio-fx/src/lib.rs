pub mod config;
pub mod effects;
pub mod error;
pub mod report;
pub mod stylesheet;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

use config::FxConfig;
use error::Result;

/// Load a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FxConfig> {
    match path {
        Some(path) => FxConfig::load(path),
        None => Ok(FxConfig::default()),
    }
}

/// Build the injected stylesheet for `card_count` cards.
///
/// With a seed the float parameters are reproducible; without one they are
/// drawn from a randomly seeded generator, as in the browser.
pub fn render_stylesheet(config: &FxConfig, card_count: usize, seed: Option<u64>) -> String {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    stylesheet::build_stylesheet(config, card_count, &mut rng)
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn default_config_when_no_path() {
        let config = load_config(None).expect("defaults should load");
        assert_eq!(config, FxConfig::default());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/fx.json"))).unwrap_err();
        assert!(matches!(err, error::FxError::Io { .. }));
    }

    #[test]
    fn seeded_stylesheet_is_stable() {
        let config = FxConfig::default();
        let a = render_stylesheet(&config, 3, Some(9));
        let b = render_stylesheet(&config, 3, Some(9));
        assert_eq!(a, b);
        assert_eq!(a.matches("@keyframes float-").count(), 3);
    }

    #[test]
    fn unseeded_stylesheet_still_has_every_card() {
        let css = render_stylesheet(&FxConfig::default(), 2, None);
        assert!(css.contains("@keyframes ripple"));
        assert!(css.contains("float-1"));
    }
}
