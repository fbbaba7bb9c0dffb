//! Per-indicator classification: one `Signal` per indicator family.

use crate::models::indicators::{IndicatorKind, IndicatorResult};
use crate::models::signal::{Signal, SignalDirection, SignalSource};
use crate::models::strategy::RsiThresholds;

/// Read the moving-average bundle against the latest close.
///
/// A single configured average compares only the close. With two or more,
/// the shortest and longest are compared (golden/death alignment) and the
/// close is checked against the longest; every configured average must have
/// a latest value, otherwise the bundle reads as insufficient data.
pub fn moving_average_signal<'a>(
    latest_close: f64,
    averages: impl IntoIterator<Item = &'a IndicatorResult>,
) -> Signal {
    let mut defined: Vec<(u32, f64)> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for result in averages {
        match result.latest_defined() {
            Some(value) => defined.push((result.kind.period().get(), value)),
            None => missing.push(insufficient_note(result)),
        }
    }

    if !missing.is_empty() {
        return Signal::insufficient(
            SignalSource::MovingAverage,
            format!("Moving averages not computable: {}", missing.join(", ")),
        );
    }

    let shortest = defined.iter().min_by_key(|(p, _)| *p).copied();
    let longest = defined.iter().max_by_key(|(p, _)| *p).copied();
    let (Some((short_period, short_ma)), Some((long_period, long_ma))) = (shortest, longest) else {
        return Signal::insufficient(SignalSource::MovingAverage, "No moving average configured");
    };

    if short_period == long_period {
        let rationale = format!(
            "Close {:.2} {} MA({}) {:.2}",
            latest_close,
            relation(latest_close, long_ma),
            long_period,
            long_ma
        );
        return Signal::new(
            SignalSource::MovingAverage,
            compare(latest_close, long_ma),
            rationale,
        );
    }

    let close_side = compare(latest_close, long_ma);
    let alignment = compare(short_ma, long_ma);
    let (direction, label) = match (close_side, alignment) {
        (SignalDirection::Bullish, SignalDirection::Bullish) => {
            (SignalDirection::Bullish, "golden alignment")
        }
        (SignalDirection::Bearish, SignalDirection::Bearish) => {
            (SignalDirection::Bearish, "death alignment")
        }
        _ => (SignalDirection::Neutral, "no alignment"),
    };
    let rationale = format!(
        "{}: close {:.2} {} MA({}) {:.2}, MA({}) {:.2} {} MA({})",
        label,
        latest_close,
        relation(latest_close, long_ma),
        long_period,
        long_ma,
        short_period,
        short_ma,
        relation(short_ma, long_ma),
        long_period
    );
    Signal::new(SignalSource::MovingAverage, direction, rationale)
}

/// Overbought reads bearish, oversold bullish; both bounds inclusive.
pub fn rsi_signal(rsi: &IndicatorResult, thresholds: RsiThresholds) -> Signal {
    let Some(value) = rsi.latest_defined() else {
        return Signal::insufficient(SignalSource::Rsi, insufficient_note(rsi));
    };

    if value >= thresholds.overbought {
        Signal::new(
            SignalSource::Rsi,
            SignalDirection::Bearish,
            format!(
                "{} {:.2} overbought (>= {:.0})",
                rsi.kind, value, thresholds.overbought
            ),
        )
    } else if value <= thresholds.oversold {
        Signal::new(
            SignalSource::Rsi,
            SignalDirection::Bullish,
            format!(
                "{} {:.2} oversold (<= {:.0})",
                rsi.kind, value, thresholds.oversold
            ),
        )
    } else {
        Signal::new(
            SignalSource::Rsi,
            SignalDirection::Neutral,
            format!(
                "{} {:.2} between {:.0} and {:.0}",
                rsi.kind, value, thresholds.oversold, thresholds.overbought
            ),
        )
    }
}

/// A close outside the bands reads as a stretched move expected to revert.
pub fn bollinger_signal(latest_close: f64, bands: &IndicatorResult) -> Signal {
    let (Ok(middle), Some((upper, lower))) = (bands.latest(), bands.latest_bands()) else {
        return Signal::insufficient(SignalSource::BollingerBands, insufficient_note(bands));
    };

    let (direction, note) = if latest_close > upper {
        (SignalDirection::Bearish, "above upper band")
    } else if latest_close < lower {
        (SignalDirection::Bullish, "below lower band")
    } else {
        (SignalDirection::Neutral, "inside the bands")
    };
    Signal::new(
        SignalSource::BollingerBands,
        direction,
        format!(
            "Close {:.2} {} of {} [{:.2}, {:.2}, {:.2}]",
            latest_close, note, bands.kind, lower, middle, upper
        ),
    )
}

/// Classify every indicator, one signal per family in bundle order.
pub fn derive_signals(
    latest_close: f64,
    indicators: &[IndicatorResult],
    thresholds: RsiThresholds,
) -> Vec<Signal> {
    let averages: Vec<&IndicatorResult> = indicators
        .iter()
        .filter(|r| matches!(r.kind, IndicatorKind::MovingAverage { .. }))
        .collect();

    let mut signals = Vec::new();
    if !averages.is_empty() {
        signals.push(moving_average_signal(latest_close, averages));
    }
    for result in indicators {
        match result.kind {
            IndicatorKind::MovingAverage { .. } => {}
            IndicatorKind::Rsi { .. } => signals.push(rsi_signal(result, thresholds)),
            IndicatorKind::BollingerBands { .. } => {
                signals.push(bollinger_signal(latest_close, result))
            }
            // strategies never request these
            IndicatorKind::Macd { .. } | IndicatorKind::Kdj { .. } => {}
        }
    }
    signals
}

fn compare(value: f64, reference: f64) -> SignalDirection {
    if value > reference {
        SignalDirection::Bullish
    } else if value < reference {
        SignalDirection::Bearish
    } else {
        SignalDirection::Neutral
    }
}

fn relation(value: f64, reference: f64) -> &'static str {
    if value > reference {
        "above"
    } else if value < reference {
        "below"
    } else {
        "at"
    }
}

fn insufficient_note(result: &IndicatorResult) -> String {
    format!(
        "{} insufficient data (needs {} bars, have {})",
        result.kind,
        result.kind.min_bars(),
        result.len()
    )
}
