//! Unit tests for the strategy registry

use proptest::prelude::*;
use trendcast::models::ValidationError;
use trendcast::strategies::{StrategyError, StrategyRegistry, DEFAULT_HORIZON};

use crate::support::{period, strategy};

const STRATEGY_TOML: &str = r#"
default = "Swing"

[horizons.scalp]
description = "Very short term"
ma_periods = [3, 5]
rsi_period = 5
rsi_overbought = 80.0
rsi_oversold = 20.0

[horizons.swing]
ma_periods = [10, 20, 10]
rsi_period = 14

[horizons.swing.bollinger]
period = 20
"#;

#[test]
fn test_builtin_profile() {
    let registry = StrategyRegistry::builtin().unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.horizons().collect::<Vec<_>>(),
        vec!["daily", "weekly", "monthly"]
    );
    assert_eq!(registry.default_horizon(), DEFAULT_HORIZON);

    let daily = registry.resolve("daily").unwrap();
    assert_eq!(daily.ma_periods(), &[period(5), period(10)]);
    assert_eq!(daily.rsi_period(), period(6));
    assert_eq!(daily.thresholds().overbought, 75.0);
    assert_eq!(daily.thresholds().oversold, 25.0);

    let monthly = registry.resolve("monthly").unwrap();
    assert_eq!(monthly.ma_periods(), &[period(20), period(60)]);
    assert_eq!(monthly.rsi_period(), period(14));
    assert_eq!(monthly.bollinger().unwrap().period, period(20));
}

#[test]
fn test_resolve_is_case_insensitive() {
    let registry = StrategyRegistry::builtin().unwrap();
    assert_eq!(registry.resolve(" WEEKLY ").unwrap().horizon(), "weekly");
}

#[test]
fn test_resolve_unknown_horizon_fails() {
    let registry = StrategyRegistry::builtin().unwrap();
    match registry.resolve("yearly") {
        Err(StrategyError::UnknownTimeHorizon { key, known }) => {
            assert_eq!(key, "yearly");
            assert_eq!(known, vec!["daily", "weekly", "monthly"]);
        }
        other => panic!("expected unknown horizon, got {other:?}"),
    }
}

#[test]
fn test_unknown_horizon_message_lists_known_keys() {
    let err = StrategyRegistry::builtin().unwrap().resolve("hourly").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown time horizon 'hourly', expected one of: daily, weekly, monthly"
    );
}

#[test]
fn test_resolve_or_default() {
    let registry = StrategyRegistry::builtin().unwrap();
    assert_eq!(registry.resolve_or_default(None).unwrap().horizon(), "daily");
    assert_eq!(
        registry.resolve_or_default(Some("monthly")).unwrap().horizon(),
        "monthly"
    );
    assert!(registry.resolve_or_default(Some("")).is_err());
}

#[test]
fn test_from_toml_str() {
    let registry = StrategyRegistry::from_toml_str(STRATEGY_TOML).unwrap();

    assert_eq!(registry.horizons().collect::<Vec<_>>(), vec!["scalp", "swing"]);
    assert_eq!(registry.default_horizon(), "swing");

    let scalp = registry.resolve("scalp").unwrap();
    assert_eq!(scalp.description(), "Very short term");
    assert_eq!(scalp.thresholds().overbought, 80.0);
    assert!(scalp.bollinger().is_none());

    let swing = registry.default_strategy();
    assert_eq!(swing.ma_periods(), &[period(10), period(20)]);
    assert_eq!(swing.thresholds().overbought, 70.0);
    assert_eq!(swing.thresholds().oversold, 30.0);
    assert_eq!(swing.bollinger().unwrap().multiplier, 2.0);
}

#[test]
fn test_first_horizon_is_default_when_omitted() {
    let registry = StrategyRegistry::from_toml_str(
        r#"
[horizons.fast]
ma_periods = [5]
rsi_period = 6

[horizons.slow]
ma_periods = [50]
rsi_period = 14
"#,
    )
    .unwrap();
    assert_eq!(registry.default_horizon(), "fast");
}

#[test]
fn test_undeclared_default_fails() {
    let err = StrategyRegistry::from_toml_str(
        r#"
default = "monthly"

[horizons.daily]
ma_periods = [5]
rsi_period = 6
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StrategyError::UndeclaredDefault(ref key) if key == "monthly"));
}

#[test]
fn test_duplicate_keys_after_normalization_fail() {
    let err = StrategyRegistry::from_toml_str(
        r#"
[horizons.Daily]
ma_periods = [5]
rsi_period = 6

[horizons.daily]
ma_periods = [10]
rsi_period = 6
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StrategyError::DuplicateHorizon(ref key) if key == "daily"));
}

#[test]
fn test_empty_horizons_fail() {
    let err = StrategyRegistry::from_toml_str("[horizons]\n").unwrap_err();
    assert!(matches!(err, StrategyError::NoHorizons));
}

#[test]
fn test_invalid_bundle_fails() {
    let err = StrategyRegistry::from_toml_str(
        r#"
[horizons.daily]
ma_periods = [5]
rsi_period = 6
rsi_overbought = 20.0
rsi_oversold = 80.0
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        StrategyError::Validation(ValidationError::InvalidRsiThresholds { .. })
    ));
}

#[test]
fn test_zero_period_is_a_parse_error() {
    let err = StrategyRegistry::from_toml_str(
        r#"
[horizons.daily]
ma_periods = [0]
rsi_period = 6
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StrategyError::Parse(_)));
}

#[test]
fn test_unknown_field_is_a_parse_error() {
    let err = StrategyRegistry::from_toml_str(
        r#"
[horizons.daily]
ma_periods = [5]
rsi_period = 6
macd = true
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StrategyError::Parse(_)));
}

#[test]
fn test_load_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = StrategyRegistry::load_path(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, StrategyError::Io { .. }));
}

#[test]
fn test_from_configs() {
    let registry = StrategyRegistry::from_configs(
        vec![
            strategy("short", &[5], 6, 75.0, 25.0),
            strategy("long", &[60], 14, 70.0, 30.0),
        ],
        Some("LONG"),
    )
    .unwrap();
    assert_eq!(registry.default_strategy().horizon(), "long");

    let err = StrategyRegistry::from_configs(Vec::new(), None).unwrap_err();
    assert!(matches!(err, StrategyError::NoHorizons));
}

proptest! {
    #[test]
    fn prop_unknown_keys_never_fall_back(key in "[a-z]{1,12}") {
        let registry = StrategyRegistry::builtin().unwrap();
        let known = ["daily", "weekly", "monthly"].contains(&key.as_str());
        prop_assert_eq!(registry.resolve(&key).is_ok(), known);
    }
}
