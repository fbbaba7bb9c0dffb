use std::fmt;

use serde::Serialize;

/// Directional reading of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// Which indicator family produced a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    MovingAverage,
    Rsi,
    BollingerBands,
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalSource::MovingAverage => "Moving Average",
            SignalSource::Rsi => "RSI",
            SignalSource::BollingerBands => "Bollinger Bands",
        };
        f.write_str(name)
    }
}

/// One indicator's reading. `direction` is `None` when the indicator had
/// insufficient data; such signals stay in the result but do not vote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub source: SignalSource,
    pub direction: Option<SignalDirection>,
    pub rationale: String,
}

impl Signal {
    pub fn new(source: SignalSource, direction: SignalDirection, rationale: impl Into<String>) -> Self {
        Self {
            source,
            direction: Some(direction),
            rationale: rationale.into(),
        }
    }

    pub fn insufficient(source: SignalSource, rationale: impl Into<String>) -> Self {
        Self {
            source,
            direction: None,
            rationale: rationale.into(),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.direction.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outlook {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advice {
    Buy,
    Sell,
    Hold,
    Watch,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which arbitration rule produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Consensus {
    Unanimous,
    Mixed,
    Empty,
}

/// Outcome of arbitrating a set of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub outlook: Outlook,
    pub advice: Advice,
    pub consensus: Consensus,
}
