//! Technical outlook engine for daily price series.
//!
//! A caller supplies a [`PriceSeries`](models::PriceSeries) and a time horizon;
//! the [`AnalysisEngine`](signals::AnalysisEngine) resolves the horizon's
//! strategy, computes its indicators, classifies each into a signal and
//! arbitrates them into an outlook and an advice.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
pub mod strategies;

pub use error::Error;
pub use models::{AnalysisResult, PriceBar, PriceSeries};
pub use signals::AnalysisEngine;
pub use strategies::StrategyRegistry;
