//! Signal derivation, arbitration and the analysis engine.

pub mod aggregation;
pub mod engine;
pub mod rules;

pub use aggregation::*;
pub use engine::*;
pub use rules::*;
