use roma_analysis::synthetic::{SyntheticConfig, SyntheticError};
use roma_core::ports::{Application as _, DataSource as _};
use romadash::{AppConfig, Cli, impls::DashApp};
use rstest::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[rstest]
fn file_overrides_defaults() {
    let cli = Cli {
        config: Some(fixture("dashboard.toml")),
        ..Default::default()
    };
    let config = AppConfig::load(&cli).unwrap();

    assert_eq!(config.server.bind_address.to_string(), "127.0.0.1:3000");
    assert!(config.server.enable_cors);
    assert_eq!(config.data.seed, 7);
    assert_eq!(config.data.months, 24);
    // untouched keys keep their defaults
    assert_eq!(config.data.start_year, 2020);
    assert_eq!(config.data.start_month, 1);
}

#[rstest]
fn missing_file_is_an_error() {
    let cli = Cli {
        config: Some(fixture("missing.toml")),
        ..Default::default()
    };
    let err = AppConfig::load(&cli).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[rstest]
fn configured_app_generates_configured_table() {
    let cli = Cli {
        config: Some(fixture("dashboard.toml")),
        ..Default::default()
    };
    let AppConfig { data, .. } = AppConfig::load(&cli).unwrap();
    let app = DashApp::new(data);

    let dataset = app.source().load().unwrap();
    assert_eq!(dataset.len(), 24);
    assert_eq!(dataset.last_year(), Some(2021));
}

#[rstest]
fn empty_range_is_rejected_at_startup() {
    let cli = Cli {
        config: Some(fixture("empty-range.toml")),
        ..Default::default()
    };
    let AppConfig { data, .. } = AppConfig::load(&cli).unwrap();
    assert!(matches!(
        DashApp::try_new(data),
        Err(SyntheticError::EmptyRange)
    ));
}

#[rstest]
#[case(13)]
#[case(0)]
fn bad_start_month_is_rejected_at_startup(#[case] start_month: u8) {
    let result = DashApp::try_new(SyntheticConfig {
        start_month,
        ..Default::default()
    });
    assert!(matches!(result, Err(SyntheticError::StartMonth(m)) if m == start_month));
}
