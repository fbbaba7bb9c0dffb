//! Environment-driven application settings.
//!
//! Values come from the process environment (after `.env` is loaded by the
//! binary); command-line flags override them.

use std::env;
use std::path::PathBuf;

pub const ENV_VAR: &str = "TRENDCAST_ENV";
pub const STRATEGIES_VAR: &str = "TRENDCAST_STRATEGIES";
pub const DATA_DIR_VAR: &str = "TRENDCAST_DATA_DIR";

const DEFAULT_ENVIRONMENT: &str = "sandbox";
const DEFAULT_DATA_DIR: &str = "data";

/// Deployment environment name, lowercased. Defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var(ENV_VAR)
        .ok()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    /// TOML strategy file; `None` means the built-in profile.
    pub strategies_path: Option<PathBuf>,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: get_environment(),
            strategies_path: non_empty_var(STRATEGIES_VAR).map(PathBuf::from),
            data_dir: non_empty_var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    pub fn with_strategies_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.strategies_path = path;
        }
        self
    }

    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            strategies_path: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
