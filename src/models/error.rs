use chrono::NaiveDate;
use thiserror::Error;

/// Shape errors for bars, series and strategy bundles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("instrument code cannot be empty")]
    EmptyInstrumentCode,
    #[error("price series for '{code}' has no bars")]
    EmptySeries { code: String },

    #[error("field '{field}' on {date} must be a positive finite price, got {value}")]
    InvalidPrice {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },
    #[error("bar high must be >= low, open and close on {date}")]
    InvalidBarHigh { date: NaiveDate },
    #[error("bar low must be <= open, close and high on {date}")]
    InvalidBarLow { date: NaiveDate },

    #[error("bar dates must be strictly increasing: {previous} is followed by {next}")]
    UnorderedDates { previous: NaiveDate, next: NaiveDate },

    #[error("horizon key cannot be empty")]
    EmptyHorizonKey,
    #[error("horizon '{horizon}' declares no moving average periods")]
    NoMovingAverages { horizon: String },
    #[error("horizon '{horizon}' RSI thresholds must satisfy 0 <= oversold ({oversold}) < overbought ({overbought}) <= 100")]
    InvalidRsiThresholds {
        horizon: String,
        overbought: f64,
        oversold: f64,
    },
    #[error("horizon '{horizon}' Bollinger multiplier must be finite and non-negative, got {multiplier}")]
    InvalidBollingerMultiplier { horizon: String, multiplier: f64 },
}
