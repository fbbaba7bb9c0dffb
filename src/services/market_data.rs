//! Market data provider interface and the file/in-memory adapters.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::bar::PriceSeries;

#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Unknown instrument or unreachable/unusable source. Fatal to the request.
    #[error("data unavailable for '{code}': {reason}")]
    DataUnavailable { code: String, reason: String },
}

impl MarketDataError {
    pub fn unavailable(code: &str, reason: impl Into<String>) -> Self {
        MarketDataError::DataUnavailable {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

pub trait MarketDataProvider {
    /// Full daily history for an instrument.
    fn fetch_daily_series(&self, code: &str) -> Result<PriceSeries, MarketDataError>;

    /// Display name, best effort. `None` never blocks analysis.
    fn fetch_instrument_name(&self, code: &str) -> Option<String>;
}

/// Reads `<data_dir>/<CODE>.json` documents of the form
/// `{ "code": "...", "name": "...", "bars": [{ "date": "YYYY-MM-DD", "open": .., "high": .., "low": .., "close": .., "volume": .. }] }`.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    data_dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", code.trim()))
    }

    fn read(&self, code: &str) -> Result<PriceSeries, MarketDataError> {
        if code.trim().is_empty() {
            return Err(MarketDataError::unavailable(code, "empty instrument code"));
        }
        let path = self.path_for(code);
        let content = fs::read_to_string(&path).map_err(|e| {
            MarketDataError::unavailable(code, format!("cannot read {}: {}", path.display(), e))
        })?;
        let series: PriceSeries = serde_json::from_str(&content).map_err(|e| {
            MarketDataError::unavailable(code, format!("invalid series in {}: {}", path.display(), e))
        })?;
        if !series.code().eq_ignore_ascii_case(code.trim()) {
            return Err(MarketDataError::unavailable(
                code,
                format!("{} holds series for '{}'", path.display(), series.code()),
            ));
        }
        debug!(code, bars = series.len(), path = %path.display(), "Loaded daily series");
        Ok(series)
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn fetch_daily_series(&self, code: &str) -> Result<PriceSeries, MarketDataError> {
        self.read(code)
    }

    fn fetch_instrument_name(&self, code: &str) -> Option<String> {
        match self.read(code) {
            Ok(series) => series.name().map(str::to_string),
            Err(e) => {
                warn!(code, error = %e, "Instrument name lookup failed");
                None
            }
        }
    }
}

/// Series held in memory, keyed by instrument code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }

    pub fn insert(&mut self, series: PriceSeries) {
        self.series.insert(series.code().to_string(), series);
    }
}

impl MarketDataProvider for InMemoryProvider {
    fn fetch_daily_series(&self, code: &str) -> Result<PriceSeries, MarketDataError> {
        self.series
            .get(code.trim())
            .cloned()
            .ok_or_else(|| MarketDataError::unavailable(code, "unknown instrument"))
    }

    fn fetch_instrument_name(&self, code: &str) -> Option<String> {
        self.series
            .get(code.trim())
            .and_then(|s| s.name().map(str::to_string))
    }
}
