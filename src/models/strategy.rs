//! Strategy bundles: the indicator parameters and thresholds bound to one
//! time horizon.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::models::error::ValidationError;
use crate::models::indicators::IndicatorKind;

/// RSI classification bounds. Readings at or above `overbought` are bearish,
/// at or below `oversold` bullish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiThresholds {
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for RsiThresholds {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub period: NonZeroU32,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

fn default_multiplier() -> f64 {
    2.0
}

/// Immutable parameter bundle for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyConfig {
    horizon: String,
    description: String,
    ma_periods: Vec<NonZeroU32>,
    rsi_period: NonZeroU32,
    thresholds: RsiThresholds,
    #[serde(skip_serializing_if = "Option::is_none")]
    bollinger: Option<BollingerParams>,
}

impl StrategyConfig {
    /// Build a bundle, normalizing the horizon key to lowercase and dropping
    /// repeated MA periods (first occurrence wins).
    pub fn new(
        horizon: impl Into<String>,
        description: impl Into<String>,
        ma_periods: impl IntoIterator<Item = NonZeroU32>,
        rsi_period: NonZeroU32,
        thresholds: RsiThresholds,
        bollinger: Option<BollingerParams>,
    ) -> Result<Self, ValidationError> {
        let horizon = normalize_horizon(&horizon.into());
        if horizon.is_empty() {
            return Err(ValidationError::EmptyHorizonKey);
        }

        let mut periods: Vec<NonZeroU32> = Vec::new();
        for period in ma_periods {
            if !periods.contains(&period) {
                periods.push(period);
            }
        }
        if periods.is_empty() {
            return Err(ValidationError::NoMovingAverages { horizon });
        }

        let RsiThresholds {
            overbought,
            oversold,
        } = thresholds;
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if !in_range(overbought) || !in_range(oversold) || oversold >= overbought {
            return Err(ValidationError::InvalidRsiThresholds {
                horizon,
                overbought,
                oversold,
            });
        }

        if let Some(bb) = bollinger {
            if !bb.multiplier.is_finite() || bb.multiplier < 0.0 {
                return Err(ValidationError::InvalidBollingerMultiplier {
                    horizon,
                    multiplier: bb.multiplier,
                });
            }
        }

        Ok(Self {
            horizon,
            description: description.into(),
            ma_periods: periods,
            rsi_period,
            thresholds,
            bollinger,
        })
    }

    pub fn horizon(&self) -> &str {
        &self.horizon
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// MA periods in declaration order.
    pub fn ma_periods(&self) -> &[NonZeroU32] {
        &self.ma_periods
    }

    pub fn rsi_period(&self) -> NonZeroU32 {
        self.rsi_period
    }

    pub fn thresholds(&self) -> RsiThresholds {
        self.thresholds
    }

    pub fn bollinger(&self) -> Option<BollingerParams> {
        self.bollinger
    }

    /// Every indicator the bundle asks for, in evaluation order: MAs as
    /// declared, then RSI, then Bollinger Bands when configured.
    pub fn indicator_kinds(&self) -> Vec<IndicatorKind> {
        let mut kinds: Vec<IndicatorKind> = self
            .ma_periods
            .iter()
            .map(|&period| IndicatorKind::MovingAverage { period })
            .collect();
        kinds.push(IndicatorKind::Rsi {
            period: self.rsi_period,
        });
        if let Some(bb) = self.bollinger {
            kinds.push(IndicatorKind::BollingerBands {
                period: bb.period,
                multiplier: bb.multiplier,
            });
        }
        kinds
    }

    /// Longest history any configured indicator needs.
    pub fn min_bars(&self) -> usize {
        self.indicator_kinds()
            .iter()
            .map(IndicatorKind::min_bars)
            .max()
            .unwrap_or(0)
    }
}

pub(crate) fn normalize_horizon(key: &str) -> String {
    key.trim().to_lowercase()
}
