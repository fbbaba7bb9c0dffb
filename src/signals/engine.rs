//! Analysis engine: strategy resolution, indicator computation, signal
//! derivation and arbitration for one price series.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::indicators::compute;
use crate::models::analysis::AnalysisResult;
use crate::models::bar::PriceSeries;
use crate::models::indicators::IndicatorResult;
use crate::models::strategy::StrategyConfig;
use crate::signals::aggregation::Aggregator;
use crate::signals::rules::derive_signals;
use crate::strategies::error::StrategyError;
use crate::strategies::registry::StrategyRegistry;

#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    registry: Arc<StrategyRegistry>,
}

impl AnalysisEngine {
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Analyze a series under the given horizon, or the registry default.
    ///
    /// Only an unknown horizon fails. Short series still produce a result;
    /// indicators without enough history show up as insufficient-data signals.
    pub fn analyze(
        &self,
        series: &PriceSeries,
        horizon: Option<&str>,
    ) -> Result<AnalysisResult, StrategyError> {
        let strategy = self.registry.resolve_or_default(horizon)?;
        Ok(Self::evaluate(series, strategy))
    }

    /// Analyze a series against an already resolved strategy.
    pub fn evaluate(series: &PriceSeries, strategy: &StrategyConfig) -> AnalysisResult {
        let indicators = Self::compute_indicators(series, strategy);

        let latest_close = series.latest().close();
        let signals = derive_signals(latest_close, &indicators, strategy.thresholds());
        let verdict = Aggregator::arbitrate(&signals);
        let explanation = Aggregator::explain(&verdict, &signals, series.len());

        info!(
            code = series.code(),
            horizon = strategy.horizon(),
            outlook = %verdict.outlook,
            advice = %verdict.advice,
            "Analysis complete"
        );

        AnalysisResult::new(
            series,
            strategy,
            indicators,
            signals,
            verdict.outlook,
            verdict.advice,
            explanation,
        )
    }

    /// Compute every indicator in the bundle, in declaration order.
    fn compute_indicators(series: &PriceSeries, strategy: &StrategyConfig) -> Vec<IndicatorResult> {
        if series.len() < strategy.min_bars() {
            warn!(
                code = series.code(),
                horizon = strategy.horizon(),
                bars = series.len(),
                required = strategy.min_bars(),
                "Series shorter than the strategy needs; continuing with partial indicators"
            );
        }

        strategy
            .indicator_kinds()
            .into_iter()
            .map(|kind| {
                let result = compute(series, kind);
                match result.latest() {
                    Ok(value) => debug!(indicator = %kind, value, "Indicator computed"),
                    Err(e) => debug!(indicator = %kind, error = %e, "Indicator not computable"),
                }
                result
            })
            .collect()
    }
}
