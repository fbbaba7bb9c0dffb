//! Stateless indicator computations over a [`PriceSeries`](crate::models::PriceSeries).
//!
//! Every `calculate_*` function returns a full-length, bar-aligned
//! [`IndicatorResult`](crate::models::IndicatorResult) and never fails; the
//! `latest_*` variants fail with [`IndicatorError::InsufficientData`] when the
//! most recent bar has no value.

use std::num::NonZeroU32;

pub mod compute;
pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use compute::compute;
pub use error::IndicatorError;

pub const DEFAULT_RSI_PERIOD: NonZeroU32 = period(14);

/// Non-zero period from a literal. Panics at compile time when used in a
/// const context with 0.
pub const fn period(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(p) => p,
        None => panic!("indicator period must be non-zero"),
    }
}
