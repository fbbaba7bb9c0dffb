//! Daily price bars and the validated series handed to the engine.
//!
//! Both types are immutable once built. Deserialization goes through the raw
//! shapes below so that a series read from disk upholds the same invariants as
//! one built in code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::error::ValidationError;

/// One trading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBar")]
pub struct PriceBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

#[derive(Deserialize)]
struct RawBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: u64,
}

impl TryFrom<RawBar> for PriceBar {
    type Error = ValidationError;

    fn try_from(raw: RawBar) -> Result<Self, Self::Error> {
        PriceBar::new(raw.date, raw.open, raw.high, raw.low, raw.close, raw.volume)
    }
}

impl PriceBar {
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [("open", open), ("high", high), ("low", low), ("close", close)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidPrice { date, field, value });
            }
        }
        if high < open || high < close || high < low {
            return Err(ValidationError::InvalidBarHigh { date });
        }
        if low > open || low > close {
            return Err(ValidationError::InvalidBarLow { date });
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn close(&self) -> f64 {
        self.close
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }
}

/// Chronological bars for one instrument.
///
/// Never empty, dates strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct PriceSeries {
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    bars: Vec<PriceBar>,
}

#[derive(Deserialize)]
struct RawSeries {
    code: String,
    #[serde(default)]
    name: Option<String>,
    bars: Vec<PriceBar>,
}

impl TryFrom<RawSeries> for PriceSeries {
    type Error = ValidationError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        let series = PriceSeries::new(raw.code, raw.bars)?;
        Ok(match raw.name {
            Some(name) => series.with_name(name),
            None => series,
        })
    }
}

impl PriceSeries {
    pub fn new(code: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_string();
        if code.is_empty() {
            return Err(ValidationError::EmptyInstrumentCode);
        }
        if bars.is_empty() {
            return Err(ValidationError::EmptySeries { code });
        }
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ValidationError::UnorderedDates {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }

        Ok(Self {
            code,
            name: None,
            bars,
        })
    }

    /// Attach a display name. Blank names are ignored.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim();
        self.name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false for a constructed series; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn latest(&self) -> &PriceBar {
        // construction guarantees at least one bar
        &self.bars[self.bars.len() - 1]
    }

    pub fn first(&self) -> &PriceBar {
        &self.bars[0]
    }
}
