//! Arbitration of per-indicator signals into one outlook and advice.
//!
//! Fixed precedence, no weighting:
//! 1. every defined signal Bullish (or every one Bearish) → that outlook, Buy/Sell
//! 2. any disagreement, or only Neutral readings → Neutral, Hold
//! 3. no defined signal at all → Neutral, Watch

use crate::models::signal::{Advice, Consensus, Outlook, Signal, SignalDirection, Verdict};

pub struct Aggregator;

impl Aggregator {
    /// Arbitrate a set of signals. Pure; the same input always yields the same verdict.
    pub fn arbitrate(signals: &[Signal]) -> Verdict {
        let mut directions = signals.iter().filter_map(|s| s.direction);

        let Some(first) = directions.next() else {
            return Verdict {
                outlook: Outlook::Neutral,
                advice: Advice::Watch,
                consensus: Consensus::Empty,
            };
        };

        let unanimous = directions.all(|d| d == first);
        match (unanimous, first) {
            (true, SignalDirection::Bullish) => Verdict {
                outlook: Outlook::Bullish,
                advice: Advice::Buy,
                consensus: Consensus::Unanimous,
            },
            (true, SignalDirection::Bearish) => Verdict {
                outlook: Outlook::Bearish,
                advice: Advice::Sell,
                consensus: Consensus::Unanimous,
            },
            _ => Verdict {
                outlook: Outlook::Neutral,
                advice: Advice::Hold,
                consensus: Consensus::Mixed,
            },
        }
    }

    /// Human-readable account of which signals drove the verdict.
    pub fn explain(verdict: &Verdict, signals: &[Signal], bars: usize) -> String {
        let defined: Vec<&Signal> = signals.iter().filter(|s| s.is_defined()).collect();
        let missing: Vec<&Signal> = signals.iter().filter(|s| !s.is_defined()).collect();

        let mut explanation = match verdict.consensus {
            Consensus::Empty => format!(
                "Insufficient data: no indicator could be evaluated from {} bar{}.",
                bars,
                if bars == 1 { "" } else { "s" }
            ),
            Consensus::Unanimous => format!(
                "All {} evaluated signal{} {} {}: {}.",
                defined.len(),
                if defined.len() == 1 { "" } else { "s" },
                if defined.len() == 1 { "is" } else { "are" },
                verdict.outlook,
                Self::describe(&defined)
            ),
            Consensus::Mixed => {
                let groups: Vec<String> = [
                    SignalDirection::Bullish,
                    SignalDirection::Bearish,
                    SignalDirection::Neutral,
                ]
                .iter()
                .filter_map(|direction| {
                    let names: Vec<String> = defined
                        .iter()
                        .filter(|s| s.direction == Some(*direction))
                        .map(|s| s.source.to_string())
                        .collect();
                    (!names.is_empty()).then(|| format!("{}: {}", direction, names.join(", ")))
                })
                .collect();
                format!(
                    "Signals do not agree ({}): {}.",
                    groups.join("; "),
                    Self::describe(&defined)
                )
            }
        };

        if !missing.is_empty() {
            explanation.push_str(&format!(" Not evaluated: {}.", Self::describe(&missing)));
        }
        explanation.push_str(&format!(
            " Outlook {}, advice {}.",
            verdict.outlook, verdict.advice
        ));
        explanation
    }

    fn describe(signals: &[&Signal]) -> String {
        signals
            .iter()
            .map(|s| format!("{} ({})", s.source, s.rationale))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
