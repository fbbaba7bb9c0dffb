//! Unit tests for environment configuration

use std::env;
use std::path::PathBuf;

use trendcast::config::{AppConfig, DATA_DIR_VAR, ENV_VAR, STRATEGIES_VAR};

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.strategies_path, None);
    assert_eq!(config.data_dir, PathBuf::from("data"));
}

#[test]
fn test_flags_override_environment() {
    let config = AppConfig::default()
        .with_strategies_path(Some(PathBuf::from("strategies.toml")))
        .with_data_dir(Some(PathBuf::from("/tmp/series")));

    assert_eq!(config.strategies_path, Some(PathBuf::from("strategies.toml")));
    assert_eq!(config.data_dir, PathBuf::from("/tmp/series"));
}

#[test]
fn test_absent_flags_keep_existing_values() {
    let config = AppConfig::default()
        .with_strategies_path(Some(PathBuf::from("a.toml")))
        .with_strategies_path(None)
        .with_data_dir(None);

    assert_eq!(config.strategies_path, Some(PathBuf::from("a.toml")));
    assert_eq!(config.data_dir, PathBuf::from("data"));
}

#[test]
fn test_from_env() {
    env::set_var(ENV_VAR, " Production ");
    env::set_var(STRATEGIES_VAR, "conf/strategies.toml");
    env::set_var(DATA_DIR_VAR, "  ");

    let config = AppConfig::from_env();
    assert_eq!(config.environment, "production");
    assert_eq!(config.strategies_path, Some(PathBuf::from("conf/strategies.toml")));
    // blank values fall back to the default
    assert_eq!(config.data_dir, PathBuf::from("data"));

    env::remove_var(ENV_VAR);
    env::remove_var(STRATEGIES_VAR);
    env::remove_var(DATA_DIR_VAR);
}
