//! Windowed and exponential statistics over price sequences.
//!
//! Outputs are aligned with the input: position `i` covers the window ending
//! at `i`, and leading positions without a full window are `None`.

/// Arithmetic mean of each full window of `period` values.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, mean)
}

/// Sample standard deviation (n - 1 denominator) of each full window.
///
/// A single-value window has no spread and yields 0.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, sample_std)
}

/// Exponential moving average with `alpha = 2 / (span + 1)`.
///
/// The average is seeded with the first present value and updated as
/// `prev * (1 - alpha) + value * alpha`. A value is emitted once `span`
/// observations have been folded in. `None` inputs are passed through and
/// leave the running average untouched.
pub fn ema(values: &[Option<f64>], span: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if span == 0 {
        return out;
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut current: Option<f64> = None;
    let mut observed = 0usize;

    for (slot, value) in out.iter_mut().zip(values) {
        let Some(value) = *value else { continue };
        let next = match current {
            Some(prev) => prev * (1.0 - alpha) + value * alpha,
            None => value,
        };
        current = Some(next);
        observed += 1;
        if observed >= span {
            *slot = Some(next);
        }
    }
    out
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for (offset, window) in values.windows(period).enumerate() {
        out[offset + period - 1] = Some(f(window));
    }
    out
}
