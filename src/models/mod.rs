//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod bar;
pub mod error;
pub mod indicators;
pub mod signal;
pub mod strategy;

pub use analysis::{AnalysisResult, HistoryRow};
pub use bar::{PriceBar, PriceSeries};
pub use error::ValidationError;
pub use indicators::{BandEnvelope, IndicatorKind, IndicatorLine, IndicatorResult};
pub use signal::{Advice, Consensus, Outlook, Signal, SignalDirection, SignalSource, Verdict};
pub use strategy::{BollingerParams, RsiThresholds, StrategyConfig};
