//! Unit tests for windowed statistics

use trendcast::common::math::{ema, mean, rolling_mean, rolling_std, sample_std};

#[test]
fn test_rolling_mean_aligns_with_input() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let result = rolling_mean(&values, 2);

    assert_eq!(result, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
}

#[test]
fn test_rolling_mean_window_longer_than_input() {
    let result = rolling_mean(&[1.0, 2.0], 3);
    assert_eq!(result, vec![None, None]);
}

#[test]
fn test_rolling_mean_empty_input() {
    assert!(rolling_mean(&[], 3).is_empty());
}

#[test]
fn test_sample_std_uses_n_minus_one() {
    // mean 5, squared deviations sum to 32 over 8 values
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let expected = (32.0_f64 / 7.0).sqrt();
    assert!((sample_std(&values) - expected).abs() < 1e-12);
}

#[test]
fn test_sample_std_single_value_is_zero() {
    assert_eq!(sample_std(&[42.0]), 0.0);
    assert_eq!(sample_std(&[]), 0.0);
}

#[test]
fn test_rolling_std_constant_window() {
    let result = rolling_std(&[3.0, 3.0, 3.0, 3.0], 3);
    assert_eq!(result, vec![None, None, Some(0.0), Some(0.0)]);
}

#[test]
fn test_mean_of_empty_is_zero() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[2.0, 4.0]), 3.0);
}

#[test]
fn test_ema_seeds_with_first_value() {
    // alpha = 0.5: 1, 1.5, 2.25
    let result = ema(&[Some(1.0), Some(2.0), Some(3.0)], 3);
    assert_eq!(result, vec![None, None, Some(2.25)]);
}

#[test]
fn test_ema_skips_leading_gaps() {
    // alpha = 2/3, seeded at the first present value
    let result = ema(&[None, Some(4.0), Some(8.0)], 2);
    assert!(result[..2].iter().all(Option::is_none));
    assert!((result[2].unwrap() - 20.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_ema_span_one_is_identity() {
    let values = [Some(3.0), Some(7.0), Some(5.0)];
    assert_eq!(ema(&values, 1), values.to_vec());
}
