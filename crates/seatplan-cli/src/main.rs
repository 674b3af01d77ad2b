//! SeatPlan boarding planner
//!
//! Reads a cabin configuration, computes the boarding order and prints
//! the boarding grid. Runs entirely in-process; the grid goes to stdout,
//! logs and the verbose boarding list go to stderr.
//!
//! Usage:
//!   cargo run -p seatplan-cli
//!   cargo run -p seatplan-cli -- --config cabin.json --queue 20
//!   cargo run -p seatplan-cli -- --verbose

use anyhow::{bail, Context, Result};
use seatplan_logic::config::BoardingConfig;
use seatplan_logic::plan_boarding;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: seatplan [--config <path>] [--queue <n>] [--verbose]

  --config <path>  cabin configuration JSON (default: built-in four-bay cabin)
  --queue <n>      passenger queue length, overrides the config
  --verbose        list every boarding assignment and log at debug level";

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    queue: Option<usize>,
    verbose: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--queue" => {
                let value = args.next().context("--queue needs a number")?;
                let queue = value
                    .parse()
                    .with_context(|| format!("invalid queue length {value:?}"))?;
                parsed.queue = Some(queue);
            }
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => parsed.help = true,
            other => bail!("unknown argument {other:?}\n\n{USAGE}"),
        }
    }
    Ok(parsed)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => BoardingConfig::load(path)
            .with_context(|| format!("loading cabin config {}", path.display()))?,
        None => BoardingConfig::default_cabin().context("loading built-in cabin config")?,
    };
    if let Some(queue) = args.queue {
        config.queue_length = queue;
    }
    log::debug!(
        "{} bays, queue of {}",
        config.layout().bay_count(),
        config.queue_length
    );

    let plan = plan_boarding(config.layout(), config.queue_length)
        .context("planning boarding order")?;

    if args.verbose {
        eprintln!("--- Boarding order ---");
        for b in &plan.boardings {
            eprintln!(
                "  {:>2}: {} -> cabin column {}",
                b.number,
                b.seat,
                config.layout().global_column(&b.seat)
            );
        }
    }

    print!("{}", plan.grid);
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    init_logging(args.verbose);
    run(args)
}
