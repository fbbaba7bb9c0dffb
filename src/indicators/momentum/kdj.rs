//! KDJ stochastic oscillator

use std::num::NonZeroU32;

use crate::indicators::period;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorKind, IndicatorResult};

pub const D_LINE: &str = "d";
pub const J_LINE: &str = "j";

/// K and D start from the neutral midpoint before the first bar.
const KD_SEED: f64 = 50.0;

/// Calculate KDJ for every bar.
///
/// RSV = (close - lowest low) / (highest high - lowest low) * 100 over `period` bars
/// K = K_prev * (k_smoothing - 1) / k_smoothing + RSV / k_smoothing
/// D = D_prev * (d_smoothing - 1) / d_smoothing + K / d_smoothing
/// J = 3K - 2D
///
/// A window with no range repeats the previous RSV, or 0 on the first window.
/// `values` carry K; D and J are attached as [`D_LINE`] and [`J_LINE`].
pub fn calculate_kdj(
    series: &PriceSeries,
    period: NonZeroU32,
    k_smoothing: NonZeroU32,
    d_smoothing: NonZeroU32,
) -> IndicatorResult {
    let bars = series.bars();
    let window = period.get() as usize;
    let mut k_line = vec![None; bars.len()];
    let mut d_line = vec![None; bars.len()];
    let mut j_line = vec![None; bars.len()];

    let m1 = f64::from(k_smoothing.get());
    let m2 = f64::from(d_smoothing.get());
    let mut k = KD_SEED;
    let mut d = KD_SEED;
    let mut previous_rsv: Option<f64> = None;

    for (offset, chunk) in bars.windows(window).enumerate() {
        let highest = chunk.iter().map(|b| b.high()).fold(f64::NEG_INFINITY, f64::max);
        let lowest = chunk.iter().map(|b| b.low()).fold(f64::INFINITY, f64::min);
        let close = chunk[window - 1].close();

        let rsv = if highest > lowest {
            (close - lowest) / (highest - lowest) * 100.0
        } else {
            previous_rsv.unwrap_or(0.0)
        };
        previous_rsv = Some(rsv);

        k = k * (m1 - 1.0) / m1 + rsv / m1;
        d = d * (m2 - 1.0) / m2 + k / m2;

        let index = offset + window - 1;
        k_line[index] = Some(k);
        d_line[index] = Some(d);
        j_line[index] = Some(3.0 * k - 2.0 * d);
    }

    IndicatorResult::new(
        IndicatorKind::Kdj {
            period,
            k_smoothing,
            d_smoothing,
        },
        k_line,
    )
    .with_line(D_LINE, d_line)
    .with_line(J_LINE, j_line)
}

/// Calculate KDJ with default parameters (9, 3, 3)
pub fn calculate_kdj_default(series: &PriceSeries) -> IndicatorResult {
    calculate_kdj(series, period(9), period(3), period(3))
}
