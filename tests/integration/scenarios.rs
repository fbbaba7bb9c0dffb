//! Integration tests for market scenarios

use std::sync::Arc;

use trendcast::models::{Advice, Outlook, PriceBar, PriceSeries, SignalDirection};
use trendcast::{AnalysisEngine, AnalysisResult, StrategyRegistry};

use crate::support::{day, rising_closes, series_from_closes, zigzag_closes};

fn analyze(series: &PriceSeries, horizon: &str) -> AnalysisResult {
    AnalysisEngine::new(Arc::new(StrategyRegistry::builtin().unwrap()))
        .analyze(series, Some(horizon))
        .unwrap()
}

fn directions(result: &AnalysisResult) -> Vec<Option<SignalDirection>> {
    result.signals.iter().map(|s| s.direction).collect()
}

fn create_uptrend_series(count: usize) -> PriceSeries {
    let bars = (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.5);
            PriceBar::new(day(i), base, base + 0.3, base - 0.2, base + 0.1, 1_000 + i as u64 * 10)
                .unwrap()
        })
        .collect();
    PriceSeries::new("UPTREND", bars).unwrap()
}

#[test]
fn test_overextended_rally_holds() {
    // every close higher: averages bullish, RSI pinned at 100
    let result = analyze(&create_uptrend_series(40), "weekly");

    assert_eq!(
        directions(&result),
        vec![
            Some(SignalDirection::Bullish),
            Some(SignalDirection::Bearish),
            Some(SignalDirection::Neutral)
        ]
    );
    assert_eq!(result.outlook, Outlook::Neutral);
    assert_eq!(result.advice, Advice::Hold);
}

#[test]
fn test_capitulation_holds() {
    let series = series_from_closes("DOWNTREND", &rising_closes(40, 150.0, -0.5));
    let result = analyze(&series, "weekly");

    assert_eq!(result.signals[0].direction, Some(SignalDirection::Bearish));
    assert_eq!(result.signals[1].direction, Some(SignalDirection::Bullish));
    assert_eq!(result.advice, Advice::Hold);
}

#[test]
fn test_sideways_market_holds() {
    let series = series_from_closes("SIDEWAYS", &[100.0; 40]);
    let result = analyze(&series, "weekly");

    assert!(result
        .signals
        .iter()
        .all(|s| s.direction == Some(SignalDirection::Neutral)));
    assert_eq!(result.outlook, Outlook::Neutral);
    assert_eq!(result.advice, Advice::Hold);
}

#[test]
fn test_sudden_drop_below_bands() {
    let mut closes = vec![100.0; 39];
    closes.push(90.0);
    let series = series_from_closes("DROP", &closes);
    let result = analyze(&series, "weekly");

    assert_eq!(
        directions(&result),
        vec![
            Some(SignalDirection::Bearish),
            Some(SignalDirection::Bullish),
            Some(SignalDirection::Bullish)
        ]
    );
    assert!(result.signals[0].rationale.starts_with("death alignment"));
    assert!(result.signals[2].rationale.contains("below lower band"));
    assert_eq!(result.advice, Advice::Hold);
}

#[test]
fn test_steady_uptrend_across_horizons() {
    let series = series_from_closes("600519", &zigzag_closes(80, 100.0, 3.0, 2.0));

    for horizon in ["daily", "weekly", "monthly"] {
        let result = analyze(&series, horizon);
        assert_eq!(result.signals[0].direction, Some(SignalDirection::Bullish), "{horizon}");
        assert_eq!(result.signals[1].direction, Some(SignalDirection::Neutral), "{horizon}");
        assert_eq!(result.advice, Advice::Hold, "{horizon}");
    }
}

#[test]
fn test_monthly_needs_longer_history_than_daily() {
    let series = series_from_closes("600519", &zigzag_closes(30, 100.0, 3.0, 2.0));

    let daily = analyze(&series, "daily");
    assert!(daily.signals.iter().all(|s| s.is_defined()));

    // MA(60) has no value yet, so the MA(20)/MA(60) bundle cannot vote
    let monthly = analyze(&series, "monthly");
    assert_eq!(monthly.signals[0].direction, None);
    assert!(monthly.signals[0].rationale.contains("MA(60) insufficient data"));
    assert_eq!(monthly.defined_indicators().count(), 3);
    assert_eq!(monthly.advice, Advice::Hold);
}
