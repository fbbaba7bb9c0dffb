//! Horizon → strategy registry.
//!
//! The registry is built once (from the built-in profile or a TOML file) and
//! is read-only afterwards; share it behind an `Arc` across analyses.
//!
//! TOML shape:
//!
//! ```toml
//! default = "weekly"
//!
//! [horizons.weekly]
//! description = "Outlook for the next ~5 trading days"
//! ma_periods = [10, 20]
//! rsi_period = 14
//! rsi_overbought = 70.0
//! rsi_oversold = 30.0
//!
//! [horizons.weekly.bollinger]
//! period = 20
//! multiplier = 2.0
//! ```
//!
//! Keys are trimmed and lowercased; when `default` is omitted the first
//! declared horizon is the default.

use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::indicators::period;
use crate::models::strategy::{normalize_horizon, BollingerParams, RsiThresholds, StrategyConfig};
use crate::strategies::error::StrategyError;

pub const DEFAULT_HORIZON: &str = "daily";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyFile {
    #[serde(default)]
    pub default: Option<String>,
    pub horizons: IndexMap<String, HorizonCfg>,
}

/// One `[horizons.<key>]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HorizonCfg {
    #[serde(default)]
    pub description: String,
    pub ma_periods: Vec<NonZeroU32>,
    pub rsi_period: NonZeroU32,
    #[serde(default = "default_overbought")]
    pub rsi_overbought: f64,
    #[serde(default = "default_oversold")]
    pub rsi_oversold: f64,
    #[serde(default)]
    pub bollinger: Option<BollingerParams>,
}

fn default_overbought() -> f64 {
    RsiThresholds::default().overbought
}

fn default_oversold() -> f64 {
    RsiThresholds::default().oversold
}

#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: IndexMap<String, StrategyConfig>,
    default_horizon: String,
}

impl StrategyRegistry {
    /// Build from finished bundles. `default_horizon` of `None` picks the first.
    pub fn from_configs(
        configs: Vec<StrategyConfig>,
        default_horizon: Option<&str>,
    ) -> Result<Self, StrategyError> {
        let mut strategies = IndexMap::with_capacity(configs.len());
        for config in configs {
            let key = config.horizon().to_string();
            if strategies.contains_key(&key) {
                return Err(StrategyError::DuplicateHorizon(key));
            }
            strategies.insert(key, config);
        }

        let default_horizon = match default_horizon {
            Some(key) => normalize_horizon(key),
            None => strategies
                .keys()
                .next()
                .cloned()
                .ok_or(StrategyError::NoHorizons)?,
        };
        if !strategies.contains_key(&default_horizon) {
            return Err(StrategyError::UndeclaredDefault(default_horizon));
        }

        Ok(Self {
            strategies,
            default_horizon,
        })
    }

    /// The stock `daily | weekly | monthly` profile.
    pub fn builtin() -> Result<Self, StrategyError> {
        let bollinger = Some(BollingerParams {
            period: period(20),
            multiplier: 2.0,
        });
        let standard = RsiThresholds::default();

        let bundles = [
            (
                "daily",
                "Next-day outlook from MA(5,10) and a fast RSI(6).",
                vec![period(5), period(10)],
                period(6),
                RsiThresholds {
                    overbought: 75.0,
                    oversold: 25.0,
                },
            ),
            (
                "weekly",
                "Outlook for the next ~5 trading days from short-to-medium term indicators.",
                vec![period(10), period(20)],
                period(14),
                standard,
            ),
            (
                "monthly",
                "Outlook for the next ~20 trading days from medium-term indicators.",
                vec![period(20), period(60)],
                period(14),
                standard,
            ),
        ];

        let configs = bundles
            .into_iter()
            .map(|(key, description, ma, rsi, thresholds)| {
                StrategyConfig::new(key, description, ma, rsi, thresholds, bollinger)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_configs(configs, Some(DEFAULT_HORIZON))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, StrategyError> {
        let file: StrategyFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, StrategyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StrategyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            horizons = registry.len(),
            "Loaded strategy registry"
        );
        Ok(registry)
    }

    pub fn from_file(file: StrategyFile) -> Result<Self, StrategyError> {
        if file.horizons.is_empty() {
            return Err(StrategyError::NoHorizons);
        }
        let configs = file
            .horizons
            .into_iter()
            .map(|(key, cfg)| {
                StrategyConfig::new(
                    key,
                    cfg.description,
                    cfg.ma_periods,
                    cfg.rsi_period,
                    RsiThresholds {
                        overbought: cfg.rsi_overbought,
                        oversold: cfg.rsi_oversold,
                    },
                    cfg.bollinger,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_configs(configs, file.default.as_deref())
    }

    /// Look up a horizon. Unknown keys are an error, never a fallback.
    pub fn resolve(&self, key: &str) -> Result<&StrategyConfig, StrategyError> {
        self.strategies
            .get(&normalize_horizon(key))
            .ok_or_else(|| StrategyError::UnknownTimeHorizon {
                key: key.to_string(),
                known: self.horizons().map(str::to_string).collect(),
            })
    }

    /// Resolve `key`, or the default horizon when none is given.
    pub fn resolve_or_default(&self, key: Option<&str>) -> Result<&StrategyConfig, StrategyError> {
        match key {
            Some(key) => self.resolve(key),
            None => Ok(self.default_strategy()),
        }
    }

    pub fn default_horizon(&self) -> &str {
        &self.default_horizon
    }

    pub fn default_strategy(&self) -> &StrategyConfig {
        // checked at construction
        &self.strategies[self.default_horizon.as_str()]
    }

    /// Horizon keys in declaration order.
    pub fn horizons(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyConfig> {
        self.strategies.values()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
