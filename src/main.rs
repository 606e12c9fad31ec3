//! Masaniello - Main Entry Point
//!
//! Command-line host for the Masaniello staking engine. Outcomes come either
//! from `--outcomes` or interactively from stdin.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use masaniello::config::{load_config, OutputFormat};
use masaniello::{Outcome, RawInput, Report, StakingEngine};

/// CLI arguments for the application
///
/// Run parameters resolve in this order, first match wins:
/// 1. `--capital` / `--payout` / `--trades` / `--wins`
/// 2. `MASANIELLO__STRATEGY__<FIELD>` environment variables
/// 3. the `[strategy]` table of the configuration file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "masaniello.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Starting capital
    #[arg(long)]
    capital: Option<String>,

    /// Profit on a winning trade, in percent of the stake
    #[arg(long)]
    payout: Option<String>,

    /// Total number of trades in the sequence
    #[arg(long)]
    trades: Option<String>,

    /// Number of wins to reach the target capital
    #[arg(long)]
    wins: Option<String>,

    /// Outcomes to apply in order, e.g. "WLWW"; omit for interactive mode
    #[arg(long)]
    outcomes: Option<String>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let app_config = load_config(Some(args.config.as_str()))?;

    // Initialize logging
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| app_config.settings.log_level.clone());
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Configuration file: {}", args.config);

    let output = if args.json {
        OutputFormat::Json
    } else {
        app_config.settings.output
    };

    let raw = app_config.strategy.merge_into(RawInput {
        capital: args.capital,
        payout_percent: args.payout,
        total_trades: args.trades,
        target_wins: args.wins,
    });
    let mut engine = raw.parse()?.configure()?;

    match args.outcomes {
        Some(sequence) => {
            for outcome in Outcome::parse_sequence(&sequence)? {
                if !engine.is_active() {
                    info!("Run finished, ignoring remaining outcomes");
                    break;
                }
                engine.apply_outcome(outcome);
            }
            print_report(&mut io::stdout(), &engine, output)?;
        }
        None => {
            let stdin = io::stdin();
            run_interactive(
                engine,
                output,
                stdin.lock(),
                &mut io::stdout(),
                &mut io::stderr(),
            )?
        }
    }

    Ok(())
}

fn print_report(out: &mut impl Write, engine: &StakingEngine, output: OutputFormat) -> Result<()> {
    let snapshot = engine.snapshot();
    match output {
        OutputFormat::Text => write!(out, "{}", Report(&snapshot))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?,
    }
    Ok(())
}

fn print_preview(out: &mut impl Write, engine: &StakingEngine) -> Result<()> {
    for outcome in [Outcome::Win, Outcome::Loss] {
        if let Some((record, status)) = engine.preview(outcome) {
            writeln!(
                out,
                "  if {:<4}: balance {:.2} ({})",
                outcome.to_string().to_lowercase(),
                record.balance_after,
                status
            )?;
        }
    }
    Ok(())
}

/// Read commands until `quit` or end of input
///
/// Reports go to `out`; the prompt and input errors go to `err`, so `out`
/// stays machine-readable in JSON mode.
fn run_interactive(
    mut engine: StakingEngine,
    output: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        print_report(out, &engine, output)?;
        if output == OutputFormat::Text {
            print_preview(out, &engine)?;
        }
        out.flush()?;

        write!(err, "[w]in / [l]oss / [r]estart / [q]uit > ")?;
        err.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => break,
            "r" | "restart" => engine = engine.restart(),
            "" => continue,
            other => match other.parse::<Outcome>() {
                Ok(outcome) => {
                    engine.apply_outcome(outcome);
                }
                Err(e) => writeln!(err, "{}", e)?,
            },
        }
        if output == OutputFormat::Text {
            writeln!(out)?;
        }
    }

    info!("Exiting");
    Ok(())
}
