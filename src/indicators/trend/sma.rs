//! SMA (Simple Moving Average) indicator

use std::num::NonZeroU32;

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorKind, IndicatorResult};

/// Calculate the SMA of closes for every bar.
///
/// Position `i` is the mean of closes `[i - period + 1, i]`; earlier
/// positions are undefined. Never fails.
pub fn calculate_sma(series: &PriceSeries, period: NonZeroU32) -> IndicatorResult {
    let closes = series.closes();
    IndicatorResult::new(
        IndicatorKind::MovingAverage { period },
        math::rolling_mean(&closes, period.get() as usize),
    )
}

/// SMA at the most recent bar.
pub fn latest_sma(series: &PriceSeries, period: NonZeroU32) -> Result<f64, IndicatorError> {
    calculate_sma(series, period).latest()
}

/// Calculate several SMAs at once, preserving the order of `periods`.
pub fn calculate_smas(series: &PriceSeries, periods: &[NonZeroU32]) -> Vec<IndicatorResult> {
    periods
        .iter()
        .map(|&period| calculate_sma(series, period))
        .collect()
}
