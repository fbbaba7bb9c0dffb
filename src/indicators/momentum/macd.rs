//! MACD (Moving Average Convergence Divergence) indicator

use std::num::NonZeroU32;

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::period;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorKind, IndicatorResult};

pub const SIGNAL_LINE: &str = "signal";
pub const HISTOGRAM_LINE: &str = "histogram";

/// Calculate MACD for every bar.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// `values` carry the MACD line; the signal line and histogram are attached
/// as [`SIGNAL_LINE`] and [`HISTOGRAM_LINE`]. The MACD line starts at index
/// `max(fast, slow) - 1` and the signal line `signal - 1` bars later.
pub fn calculate_macd(
    series: &PriceSeries,
    fast: NonZeroU32,
    slow: NonZeroU32,
    signal: NonZeroU32,
) -> IndicatorResult {
    let closes: Vec<Option<f64>> = series.closes().into_iter().map(Some).collect();
    let fast_ema = math::ema(&closes, fast.get() as usize);
    let slow_ema = math::ema(&closes, slow.get() as usize);

    let macd_line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal_line = math::ema(&macd_line, signal.get() as usize);
    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    IndicatorResult::new(IndicatorKind::Macd { fast, slow, signal }, macd_line)
        .with_line(SIGNAL_LINE, signal_line)
        .with_line(HISTOGRAM_LINE, histogram)
}

/// `(macd, signal, histogram)` at the most recent bar.
pub fn latest_macd(
    series: &PriceSeries,
    fast: NonZeroU32,
    slow: NonZeroU32,
    signal: NonZeroU32,
) -> Result<(f64, f64, f64), IndicatorError> {
    let result = calculate_macd(series, fast, slow, signal);
    let macd = result.latest()?;
    let lines = result
        .latest_line(SIGNAL_LINE)
        .zip(result.latest_line(HISTOGRAM_LINE));
    let (signal_value, histogram) = lines.ok_or_else(|| IndicatorError::InsufficientData {
        indicator: result.kind.to_string(),
        required: result.kind.min_bars() + signal.get() as usize - 1,
        available: result.len(),
    })?;
    Ok((macd, signal_value, histogram))
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(series: &PriceSeries) -> IndicatorResult {
    calculate_macd(series, period(12), period(26), period(9))
}
