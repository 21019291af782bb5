//! Behavioral tests for page configuration

use crate::config::{LogLevel, PortfolioConfig};
use crate::error::PortfolioError;

#[test]
fn given_no_overrides_when_parsed_then_stock_page_behavior_is_kept() {
    // Given
    let text = "{}";

    // When
    let config = PortfolioConfig::from_json(text).unwrap();

    // Then
    assert_eq!(config, PortfolioConfig::default());
    assert!(!config.particles.enabled, "particles are opt-in");
}

#[test]
fn given_custom_strings_when_parsed_then_typewriter_uses_them() {
    // Given
    let text = r#"{"typewriter": {"strings": ["Rustacean"], "loop": false}}"#;

    // When
    let config = PortfolioConfig::from_json(text).unwrap();

    // Then
    assert_eq!(config.typewriter.strings, vec!["Rustacean"]);
    assert!(!config.typewriter.loop_forever);
    assert_eq!(config.typewriter.type_speed_ms, 50);
}

#[test]
fn given_custom_chart_slices_when_parsed_then_dataset_is_replaced() {
    let text = r##"{"chart": {"slices": [{"name": "Rust", "value": 80, "color": "#b7410e"}]}}"##;

    let config = PortfolioConfig::from_json(text).unwrap();

    assert_eq!(config.chart.slices.len(), 1);
    assert_eq!(config.chart.slices.first().map(|s| s.name.as_str()), Some("Rust"));
    assert_eq!(config.chart.series_name, "Skills");
}

#[test]
fn given_debug_level_when_parsed_then_logging_is_verbose() {
    let config = PortfolioConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(log::Level::from(config.log_level), log::Level::Debug);
}

#[test]
fn given_wrong_field_type_when_parsed_then_config_error_is_returned() {
    let result = PortfolioConfig::from_json(r#"{"download": {"resume_path": 42}}"#);

    assert!(matches!(result, Err(PortfolioError::Config(_))));
}
