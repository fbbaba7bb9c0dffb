//! Market data collaborators that supply price series to the engine.

pub mod market_data;

pub use market_data::*;
