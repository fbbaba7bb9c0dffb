use chrono::NaiveDate;
use serde::Serialize;

use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorKind, IndicatorResult};
use crate::models::signal::{Advice, Outlook, Signal};
use crate::models::strategy::StrategyConfig;

/// Everything one `analyze` call produced. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub horizon: String,
    pub strategy: StrategyConfig,
    pub latest_date: NaiveDate,
    pub latest_close: f64,
    pub indicators: Vec<IndicatorResult>,
    pub signals: Vec<Signal>,
    pub outlook: Outlook,
    pub advice: Advice,
    pub explanation: String,
    #[serde(skip)]
    series: PriceSeries,
}

/// One bar of the recent-history table: OHLCV plus every indicator at that bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub values: Vec<(IndicatorKind, Option<f64>)>,
}

impl AnalysisResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        series: &PriceSeries,
        strategy: &StrategyConfig,
        indicators: Vec<IndicatorResult>,
        signals: Vec<Signal>,
        outlook: Outlook,
        advice: Advice,
        explanation: String,
    ) -> Self {
        let latest = series.latest();
        Self {
            code: series.code().to_string(),
            name: series.name().map(str::to_string),
            horizon: strategy.horizon().to_string(),
            strategy: strategy.clone(),
            latest_date: latest.date(),
            latest_close: latest.close(),
            indicators,
            signals,
            outlook,
            advice,
            explanation,
            series: series.clone(),
        }
    }

    /// Indicators that produced a value at the most recent bar.
    pub fn defined_indicators(&self) -> impl Iterator<Item = &IndicatorResult> {
        self.indicators.iter().filter(|i| i.latest_defined().is_some())
    }

    pub fn indicator(&self, kind: &IndicatorKind) -> Option<&IndicatorResult> {
        self.indicators.iter().find(|i| &i.kind == kind)
    }

    /// The last `periods` bars, oldest first.
    pub fn history(&self, periods: usize) -> Vec<HistoryRow> {
        let bars = self.series.bars();
        let start = bars.len().saturating_sub(periods);
        bars.iter()
            .enumerate()
            .skip(start)
            .map(|(index, bar)| HistoryRow {
                date: bar.date(),
                open: bar.open(),
                high: bar.high(),
                low: bar.low(),
                close: bar.close(),
                volume: bar.volume(),
                values: self
                    .indicators
                    .iter()
                    .map(|i| (i.kind, i.value_at(index)))
                    .collect(),
            })
            .collect()
    }
}
