use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::indicators::error::IndicatorError;

/// The closed set of indicators the engine knows how to compute and read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndicatorKind {
    MovingAverage { period: NonZeroU32 },
    Rsi { period: NonZeroU32 },
    BollingerBands { period: NonZeroU32, multiplier: f64 },
    Macd {
        fast: NonZeroU32,
        slow: NonZeroU32,
        signal: NonZeroU32,
    },
    Kdj {
        period: NonZeroU32,
        k_smoothing: NonZeroU32,
        d_smoothing: NonZeroU32,
    },
}

impl IndicatorKind {
    /// Bars needed before the first defined value.
    pub fn min_bars(&self) -> usize {
        match self {
            IndicatorKind::MovingAverage { period } => period.get() as usize,
            // one extra bar for the first price change
            IndicatorKind::Rsi { period } => period.get() as usize + 1,
            IndicatorKind::BollingerBands { period, .. } => period.get() as usize,
            // the MACD line needs both averages; the signal line lags further
            IndicatorKind::Macd { fast, slow, .. } => fast.max(slow).get() as usize,
            IndicatorKind::Kdj { period, .. } => period.get() as usize,
        }
    }

    pub fn period(&self) -> NonZeroU32 {
        match self {
            IndicatorKind::MovingAverage { period }
            | IndicatorKind::Rsi { period }
            | IndicatorKind::BollingerBands { period, .. }
            | IndicatorKind::Kdj { period, .. } => *period,
            IndicatorKind::Macd { slow, .. } => *slow,
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::MovingAverage { period } => write!(f, "MA({period})"),
            IndicatorKind::Rsi { period } => write!(f, "RSI({period})"),
            IndicatorKind::BollingerBands { period, multiplier } => {
                write!(f, "BB({period},{multiplier:.1})")
            }
            IndicatorKind::Macd { fast, slow, signal } => write!(f, "MACD({fast},{slow},{signal})"),
            IndicatorKind::Kdj {
                period,
                k_smoothing,
                d_smoothing,
            } => write!(f, "KDJ({period},{k_smoothing},{d_smoothing})"),
        }
    }
}

/// Upper and lower bands for envelope-style indicators, aligned with `values`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandEnvelope {
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// A secondary named line of a multi-line indicator, e.g. the MACD signal line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorLine {
    pub name: &'static str,
    pub values: Vec<Option<f64>>,
}

/// Per-bar output of one indicator, aligned index-for-index with the series.
///
/// `None` marks bars without enough history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorResult {
    pub kind: IndicatorKind,
    pub values: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<BandEnvelope>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<IndicatorLine>,
}

impl IndicatorResult {
    pub fn new(kind: IndicatorKind, values: Vec<Option<f64>>) -> Self {
        Self {
            kind,
            values,
            envelope: None,
            lines: Vec::new(),
        }
    }

    pub fn with_envelope(mut self, envelope: BandEnvelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    pub fn with_line(mut self, name: &'static str, values: Vec<Option<f64>>) -> Self {
        self.lines.push(IndicatorLine { name, values });
        self
    }

    /// Secondary line by name, aligned with `values`.
    pub fn line(&self, name: &str) -> Option<&[Option<f64>]> {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.values.as_slice())
    }

    pub fn latest_line(&self, name: &str) -> Option<f64> {
        self.line(name)?.last().copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Value at the most recent bar.
    pub fn latest(&self) -> Result<f64, IndicatorError> {
        self.values
            .last()
            .copied()
            .flatten()
            .ok_or_else(|| IndicatorError::InsufficientData {
                indicator: self.kind.to_string(),
                required: self.kind.min_bars(),
                available: self.values.len(),
            })
    }

    /// Latest value as an option, for callers that treat absence as data.
    pub fn latest_defined(&self) -> Option<f64> {
        self.latest().ok()
    }

    /// `(upper, lower)` at the most recent bar.
    pub fn latest_bands(&self) -> Option<(f64, f64)> {
        let envelope = self.envelope.as_ref()?;
        let upper = envelope.upper.last().copied().flatten()?;
        let lower = envelope.lower.last().copied().flatten()?;
        Some((upper, lower))
    }

    pub fn bands_at(&self, index: usize) -> Option<(f64, f64)> {
        let envelope = self.envelope.as_ref()?;
        let upper = envelope.upper.get(index).copied().flatten()?;
        let lower = envelope.lower.get(index).copied().flatten()?;
        Some((upper, lower))
    }

    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }
}
