//! Rendering of analysis results for the command-line host.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::models::analysis::{AnalysisResult, HistoryRow};
use crate::models::indicators::IndicatorResult;
use crate::models::signal::Signal;
use crate::models::strategy::StrategyConfig;

pub const DEFAULT_HISTORY_PERIODS: usize = 20;

pub const DISCLAIMER: &str = "Disclaimer: this is a software-generated reading of technical indicators, \
not financial advice. Always do your own research before making investment decisions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

pub fn render(
    result: &AnalysisResult,
    format: ReportFormat,
    history: usize,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(result, history)),
        ReportFormat::Json => render_json(result),
        ReportFormat::Markdown => Ok(render_markdown(result, history, generated_at)),
    }
}

pub fn render_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn render_text(result: &AnalysisResult, history: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} | horizon: {} ===", title(result), result.horizon);
    if !result.strategy.description().is_empty() {
        let _ = writeln!(out, "Strategy:   {}", result.strategy.description());
    }
    let _ = writeln!(out, "Parameters: {}", parameters(&result.strategy));
    let _ = writeln!(
        out,
        "Latest bar: {} close {:.2}",
        result.latest_date, result.latest_close
    );

    let _ = writeln!(out, "\nIndicators (latest):");
    for indicator in &result.indicators {
        let _ = writeln!(out, "  {:<14} {}", indicator.kind.to_string(), latest_text(indicator));
    }

    let _ = writeln!(out, "\nSignals:");
    for signal in &result.signals {
        let _ = writeln!(
            out,
            "  {:<16} {:<8} {}",
            signal.source.to_string(),
            direction_text(signal),
            signal.rationale
        );
    }

    let _ = writeln!(out, "\nOutlook:     {}", result.outlook);
    let _ = writeln!(out, "Advice:      {}", result.advice);
    let _ = writeln!(out, "Explanation: {}", result.explanation);

    let rows = result.history(history);
    if history > 0 && !rows.is_empty() {
        let _ = writeln!(out, "\nRecent history (last {} bars):", rows.len());
        let mut header = format!("  {:<10} {:>10}", "date", "close");
        for indicator in &result.indicators {
            let _ = write!(header, " {:>12}", indicator.kind.to_string());
        }
        let _ = writeln!(out, "{header}");
        for row in &rows {
            let mut line = format!("  {:<10} {:>10.2}", row.date.to_string(), row.close);
            for (_, value) in &row.values {
                let _ = write!(line, " {:>12}", value_text(*value));
            }
            let _ = writeln!(out, "{line}");
        }
    }

    let _ = writeln!(out, "\n{DISCLAIMER}");
    out
}

/// Markdown log document for saving an analysis session.
pub fn render_markdown(result: &AnalysisResult, history: usize, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Analysis log: {}\n", title(result));
    let _ = writeln!(out, "**Generated:** {}  ", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "**Instrument:** {}  ", result.code);
    let _ = writeln!(out, "**Horizon:** {}  ", result.horizon);
    let _ = writeln!(out, "**Parameters:** {}  ", parameters(&result.strategy));
    let _ = writeln!(
        out,
        "**Latest bar:** {} close {:.2}\n",
        result.latest_date, result.latest_close
    );

    let _ = writeln!(out, "## Verdict\n");
    let _ = writeln!(out, "- **Outlook:** {}", result.outlook);
    let _ = writeln!(out, "- **Advice:** {}", result.advice);
    let _ = writeln!(out, "- **Explanation:** {}\n", result.explanation);

    let _ = writeln!(out, "## Signals\n");
    let _ = writeln!(out, "| Indicator | Reading | Rationale |");
    let _ = writeln!(out, "|---|---|---|");
    for signal in &result.signals {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            signal.source,
            direction_text(signal),
            signal.rationale.replace('|', "/")
        );
    }

    let _ = writeln!(out, "\n## Indicators\n");
    let _ = writeln!(out, "| Indicator | Latest |");
    let _ = writeln!(out, "|---|---|");
    for indicator in &result.indicators {
        let _ = writeln!(out, "| {} | {} |", indicator.kind, latest_text(indicator));
    }

    let rows = result.history(history);
    if history > 0 && !rows.is_empty() {
        let _ = writeln!(out, "\n## Recent history\n");
        let _ = writeln!(out, "{}", history_header(result));
        let _ = writeln!(out, "|{}", "---|".repeat(6 + result.indicators.len()));
        for row in &rows {
            let _ = writeln!(out, "{}", history_line(row));
        }
    }

    let _ = writeln!(out, "\n---\n\n_{DISCLAIMER}_");
    out
}

fn title(result: &AnalysisResult) -> String {
    match &result.name {
        Some(name) => format!("{} ({})", result.code, name),
        None => result.code.clone(),
    }
}

fn parameters(strategy: &StrategyConfig) -> String {
    let periods: Vec<String> = strategy.ma_periods().iter().map(|p| p.to_string()).collect();
    let thresholds = strategy.thresholds();
    let mut text = format!(
        "MA [{}] | RSI({}) overbought {:.0} / oversold {:.0}",
        periods.join(", "),
        strategy.rsi_period(),
        thresholds.overbought,
        thresholds.oversold
    );
    if let Some(bb) = strategy.bollinger() {
        let _ = write!(text, " | BB({}, {:.1})", bb.period, bb.multiplier);
    }
    text
}

fn latest_text(indicator: &IndicatorResult) -> String {
    match indicator.latest() {
        Ok(value) => match indicator.latest_bands() {
            Some((upper, lower)) => format!("{value:.2} [{lower:.2} .. {upper:.2}]"),
            None => format!("{value:.2}"),
        },
        Err(e) => format!("n/a ({e})"),
    }
}

fn direction_text(signal: &Signal) -> String {
    match signal.direction {
        Some(direction) => direction.to_string(),
        None => "n/a".to_string(),
    }
}

fn value_text(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn history_header(result: &AnalysisResult) -> String {
    let mut header = "| date | open | high | low | close | volume |".to_string();
    for indicator in &result.indicators {
        let _ = write!(header, " {} |", indicator.kind);
    }
    header
}

fn history_line(row: &HistoryRow) -> String {
    let mut line = format!(
        "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {} |",
        row.date, row.open, row.high, row.low, row.close, row.volume
    );
    for (_, value) in &row.values {
        let _ = write!(line, " {} |", value_text(*value));
    }
    line
}
