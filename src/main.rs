//! trendcast command-line host
//!
//! Loads a daily series for one instrument, analyzes it under a time horizon
//! and prints the outlook report.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use trendcast::config::AppConfig;
use trendcast::logging;
use trendcast::report::{self, ReportFormat, DEFAULT_HISTORY_PERIODS};
use trendcast::services::market_data::{JsonFileProvider, MarketDataProvider};
use trendcast::{AnalysisEngine, Error, StrategyRegistry};

#[derive(Debug, Parser)]
#[command(
    name = "trendcast",
    version,
    about = "Technical outlook (Bullish/Bearish/Neutral) and advice for a daily price series"
)]
struct Cli {
    /// Instrument code to analyze, e.g. 600519
    #[arg(long, short = 'c', required_unless_present = "list_horizons")]
    code: Option<String>,

    /// Time horizon key; defaults to the strategy file's default
    #[arg(long, short = 'H')]
    horizon: Option<String>,

    /// Directory holding <CODE>.json series files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// TOML strategy file replacing the built-in horizons
    #[arg(long)]
    strategies: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Number of recent bars to tabulate
    #[arg(long, default_value_t = DEFAULT_HISTORY_PERIODS)]
    history: usize,

    /// Also write a Markdown analysis log to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print the configured horizons and exit
    #[arg(long)]
    list_horizons: bool,
}

fn main() {
    dotenv().ok();
    logging::init_logging();

    if let Err(e) = run(Cli::parse()) {
        error!(error = %e, "Analysis failed");
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = AppConfig::from_env()
        .with_strategies_path(cli.strategies)
        .with_data_dir(cli.data_dir);
    info!(environment = %config.environment, "Starting trendcast");

    let registry = match &config.strategies_path {
        Some(path) => StrategyRegistry::load_path(path)?,
        None => StrategyRegistry::builtin()?,
    };

    if cli.list_horizons {
        for strategy in registry.iter() {
            let marker = if strategy.horizon() == registry.default_horizon() {
                " (default)"
            } else {
                ""
            };
            println!("{}{}: {}", strategy.horizon(), marker, strategy.description());
        }
        return Ok(());
    }

    // clap enforces --code unless --list-horizons
    let code = cli.code.unwrap_or_default();
    let engine = AnalysisEngine::new(Arc::new(registry));
    // fail fast on a bad horizon before touching the data source
    engine.registry().resolve_or_default(cli.horizon.as_deref())?;

    let provider = JsonFileProvider::new(&config.data_dir);
    let series = provider.fetch_daily_series(&code)?;
    info!(
        code = series.code(),
        bars = series.len(),
        from = %series.first().date(),
        to = %series.latest().date(),
        "Fetched daily series"
    );

    let result = engine.analyze(&series, cli.horizon.as_deref())?;
    let now = Utc::now();
    println!("{}", report::render(&result, cli.format, cli.history, now)?);

    if let Some(path) = cli.save {
        fs::write(&path, report::render_markdown(&result, cli.history, now))?;
        info!(path = %path.display(), "Saved analysis log");
    }

    Ok(())
}
