//! Strategy registry binding time horizons to indicator bundles.

pub mod error;
pub mod registry;

pub use error::StrategyError;
pub use registry::{HorizonCfg, StrategyFile, StrategyRegistry, DEFAULT_HORIZON};
