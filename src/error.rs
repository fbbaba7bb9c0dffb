use thiserror::Error;

use crate::services::market_data::MarketDataError;
use crate::strategies::error::StrategyError;

/// Top-level error for the command-line host, mapped to exit codes.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Strategy(_) => 2,
            Self::MarketData(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
