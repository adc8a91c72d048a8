use std::path::{Path, PathBuf};

use portfolio_fx::config::FxConfig;
use portfolio_fx::error::FxError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn fixture_config_overrides_and_keeps_defaults() {
    let config = portfolio_fx::load_config(Some(&fixture("fx.json")))
        .unwrap_or_else(|e| panic!("fixture failed to load: {e}"));

    assert_eq!(config.log_level, log::LevelFilter::Debug);
    assert_eq!(config.typing.interval_ms, 80);
    assert_eq!(config.typing.start_delay_ms, 500);
    assert_eq!(config.floating.amplitude_px.min, 2.0);
    assert_eq!(config.floating.amplitude_px.max, 4.0);
    assert_eq!(config.floating.duration_s, FxConfig::default().floating.duration_s);
    assert_eq!(config.selectors.cards, ".tile");
    assert_eq!(config.selectors.modal_id, "contactDialog");
    assert_eq!(config.selectors.form_id, "messageForm");
}

#[test]
fn fixture_config_drives_stylesheet() {
    let config = portfolio_fx::load_config(Some(&fixture("fx.json"))).unwrap();
    let css = portfolio_fx::render_stylesheet(&config, 2, Some(1));
    assert!(css.contains(".tile:nth-of-type(2) { animation: float-1 "));
    assert!(!css.contains(".card:"));
}

#[test]
fn missing_fixture_is_an_io_error() {
    let err = portfolio_fx::load_config(Some(&fixture("absent.json"))).unwrap_err();
    assert!(matches!(err, FxError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
