//! Unit tests for price bars and series validation

use trendcast::models::{PriceBar, PriceSeries, ValidationError};

use crate::support::{day, series_from_closes};

fn bar(offset: usize, close: f64) -> PriceBar {
    PriceBar::new(day(offset), close, close + 1.0, close - 1.0, close, 500).unwrap()
}

#[test]
fn test_bar_accepts_consistent_ohlc() {
    let bar = PriceBar::new(day(0), 10.0, 12.0, 9.5, 11.0, 1_000).unwrap();
    assert_eq!(bar.date(), day(0));
    assert_eq!(bar.open(), 10.0);
    assert_eq!(bar.high(), 12.0);
    assert_eq!(bar.low(), 9.5);
    assert_eq!(bar.close(), 11.0);
    assert_eq!(bar.volume(), 1_000);
}

#[test]
fn test_bar_rejects_non_positive_price() {
    let err = PriceBar::new(day(0), 10.0, 12.0, 0.0, 11.0, 0).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidPrice { field: "low", .. }));
}

#[test]
fn test_bar_rejects_nan_price() {
    let err = PriceBar::new(day(0), f64::NAN, 12.0, 9.0, 11.0, 0).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidPrice { field: "open", .. }));
}

#[test]
fn test_bar_rejects_high_below_close() {
    let err = PriceBar::new(day(0), 10.0, 10.5, 9.0, 11.0, 0).unwrap_err();
    assert_eq!(err, ValidationError::InvalidBarHigh { date: day(0) });
}

#[test]
fn test_bar_rejects_low_above_open() {
    let err = PriceBar::new(day(0), 10.0, 12.0, 10.5, 11.0, 0).unwrap_err();
    assert_eq!(err, ValidationError::InvalidBarLow { date: day(0) });
}

#[test]
fn test_series_requires_bars() {
    let err = PriceSeries::new("600519", Vec::new()).unwrap_err();
    assert!(matches!(err, ValidationError::EmptySeries { .. }));
}

#[test]
fn test_series_requires_code() {
    let err = PriceSeries::new("   ", vec![bar(0, 10.0)]).unwrap_err();
    assert_eq!(err, ValidationError::EmptyInstrumentCode);
}

#[test]
fn test_series_rejects_duplicate_dates() {
    let err = PriceSeries::new("600519", vec![bar(0, 10.0), bar(0, 11.0)]).unwrap_err();
    assert!(matches!(err, ValidationError::UnorderedDates { .. }));
}

#[test]
fn test_series_rejects_descending_dates() {
    let err = PriceSeries::new("600519", vec![bar(1, 10.0), bar(0, 11.0)]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnorderedDates {
            previous: day(1),
            next: day(0)
        }
    );
}

#[test]
fn test_series_accessors() {
    let series = series_from_closes(" 600519 ", &[10.0, 11.0, 12.0]).with_name("Moutai");

    assert_eq!(series.code(), "600519");
    assert_eq!(series.name(), Some("Moutai"));
    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
    assert_eq!(series.first().date(), day(0));
    assert_eq!(series.latest().close(), 12.0);
}

#[test]
fn test_blank_name_is_ignored() {
    let series = series_from_closes("600519", &[10.0]).with_name("  ");
    assert_eq!(series.name(), None);
}

#[test]
fn test_series_deserializes_with_validation() {
    let json = r#"{
        "code": "000001",
        "name": "Ping An Bank",
        "bars": [
            { "date": "2024-01-02", "open": 10.0, "high": 10.5, "low": 9.8, "close": 10.2, "volume": 1200 },
            { "date": "2024-01-03", "open": 10.2, "high": 10.6, "low": 10.1, "close": 10.4 }
        ]
    }"#;

    let series: PriceSeries = serde_json::from_str(json).unwrap();
    assert_eq!(series.code(), "000001");
    assert_eq!(series.name(), Some("Ping An Bank"));
    assert_eq!(series.len(), 2);
    assert_eq!(series.latest().volume(), 0);
}

#[test]
fn test_series_deserialization_rejects_bad_bar() {
    let json = r#"{
        "code": "000001",
        "bars": [
            { "date": "2024-01-02", "open": 10.0, "high": 9.0, "low": 9.8, "close": 10.2 }
        ]
    }"#;

    assert!(serde_json::from_str::<PriceSeries>(json).is_err());
}

#[test]
fn test_series_deserialization_rejects_unordered_dates() {
    let json = r#"{
        "code": "000001",
        "bars": [
            { "date": "2024-01-03", "open": 10.0, "high": 10.0, "low": 10.0, "close": 10.0 },
            { "date": "2024-01-02", "open": 10.0, "high": 10.0, "low": 10.0, "close": 10.0 }
        ]
    }"#;

    assert!(serde_json::from_str::<PriceSeries>(json).is_err());
}
