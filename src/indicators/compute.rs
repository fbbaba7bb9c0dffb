//! Uniform dispatch over the closed indicator set.

use crate::indicators::momentum::{calculate_kdj, calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorKind, IndicatorResult};

/// Compute any indicator kind against a series.
pub fn compute(series: &PriceSeries, kind: IndicatorKind) -> IndicatorResult {
    match kind {
        IndicatorKind::MovingAverage { period } => calculate_sma(series, period),
        IndicatorKind::Rsi { period } => calculate_rsi(series, period),
        IndicatorKind::BollingerBands { period, multiplier } => {
            calculate_bollinger_bands(series, period, multiplier)
        }
        IndicatorKind::Macd { fast, slow, signal } => calculate_macd(series, fast, slow, signal),
        IndicatorKind::Kdj {
            period,
            k_smoothing,
            d_smoothing,
        } => calculate_kdj(series, period, k_smoothing, d_smoothing),
    }
}
