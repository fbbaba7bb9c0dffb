//! RSI (Relative Strength Index) indicator with Wilder smoothing

use std::num::NonZeroU32;

use crate::indicators::error::IndicatorError;
use crate::indicators::DEFAULT_RSI_PERIOD;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorKind, IndicatorResult};

/// Calculate RSI for every bar.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are seeded with the simple mean of the first `period` changes and
/// then smoothed recursively: `avg = (prev * (period - 1) + current) / period`.
/// The first defined value sits at index `period`.
pub fn calculate_rsi(series: &PriceSeries, period: NonZeroU32) -> IndicatorResult {
    IndicatorResult::new(
        IndicatorKind::Rsi { period },
        wilder_rsi(&series.closes(), period.get() as usize),
    )
}

/// RSI at the most recent bar.
pub fn latest_rsi(series: &PriceSeries, period: NonZeroU32) -> Result<f64, IndicatorError> {
    calculate_rsi(series, period).latest()
}

/// RSI over raw closes; `period` must be at least 1.
///
/// Changes are scaled by the largest absolute move before averaging. RSI is
/// scale-free, and the scaled averages stay within [0, 1] however far apart
/// the closes are.
pub fn wilder_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let scale = changes.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    let scale = if scale > 0.0 { scale } else { 1.0 };

    let (gains, losses): (Vec<f64>, Vec<f64>) = changes
        .iter()
        .map(|change| {
            let change = change / scale;
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let n = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / n;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / n;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    // change j is the move into bar j + 1
    for j in period..gains.len() {
        avg_gain = (avg_gain * (n - 1.0) + gains[j]) / n;
        avg_loss = (avg_loss * (n - 1.0) + losses[j]) / n;
        out[j + 1] = Some(rsi_value(avg_gain, avg_loss));
    }

    out
}

/// `100 - 100 / (1 + gain / loss)`, written as `100 / (1 + loss / gain)` so a
/// vanishing gain tends to 0 instead of dividing two infinities.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // no losses: flat window reads neutral, any gain reads as full strength
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    if avg_gain == 0.0 {
        return 0.0;
    }
    (100.0 / (1.0 + avg_loss / avg_gain)).clamp(0.0, 100.0)
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(series: &PriceSeries) -> IndicatorResult {
    calculate_rsi(series, DEFAULT_RSI_PERIOD)
}
