//! Bollinger Bands indicator

use std::num::NonZeroU32;

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{BandEnvelope, IndicatorKind, IndicatorResult};

/// Calculate Bollinger Bands for every bar.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (multiplier * sample standard deviation)
/// Lower Band = Middle - (multiplier * sample standard deviation)
///
/// `values` of the result carry the middle band; the envelope carries upper
/// and lower.
pub fn calculate_bollinger_bands(
    series: &PriceSeries,
    period: NonZeroU32,
    multiplier: f64,
) -> IndicatorResult {
    let closes = series.closes();
    let window = period.get() as usize;
    let middle = math::rolling_mean(&closes, window);
    let spread = math::rolling_std(&closes, window);

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(&spread)
            .map(|(m, s)| Some((*m)? + sign * multiplier * (*s)?))
            .collect()
    };
    let envelope = BandEnvelope {
        upper: band(1.0),
        lower: band(-1.0),
    };

    IndicatorResult::new(IndicatorKind::BollingerBands { period, multiplier }, middle)
        .with_envelope(envelope)
}

/// `(upper, middle, lower)` at the most recent bar.
pub fn latest_bollinger_bands(
    series: &PriceSeries,
    period: NonZeroU32,
    multiplier: f64,
) -> Result<(f64, f64, f64), IndicatorError> {
    let result = calculate_bollinger_bands(series, period, multiplier);
    let middle = result.latest()?;
    let (upper, lower) = result
        .latest_bands()
        .ok_or_else(|| IndicatorError::InsufficientData {
            indicator: result.kind.to_string(),
            required: result.kind.min_bars(),
            available: result.len(),
        })?;
    Ok((upper, middle, lower))
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &PriceSeries) -> IndicatorResult {
    calculate_bollinger_bands(series, crate::indicators::period(20), 2.0)
}
