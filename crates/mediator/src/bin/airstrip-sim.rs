//! Airstrip simulation CLI
//!
//! Runs one landing episode from a TOML configuration (or the built-in
//! defaults) and prints who landed where.

use anyhow::Context;
use patterns_core::{logging, Config, EpisodeMode};
use patterns_mediator::{run_episode, EpisodeReport, LandingOutcome};
use std::path::PathBuf;
use std::process;

struct Args {
    config: Option<PathBuf>,
    json: bool,
    mode: Option<EpisodeMode>,
}

fn print_usage() {
    println!("Airstrip simulation");
    println!();
    println!("USAGE:");
    println!("    airstrip-sim [CONFIG.toml] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --json          Print the report as JSON");
    println!("    --concurrent    All flights request at once (overrides config)");
    println!("    --sequential    Flights request one after another (overrides config)");
    println!("    -h, --help      Show this message");
}

fn parse_args() -> Result<Option<Args>, String> {
    let mut args = Args {
        config: None,
        json: false,
        mode: None,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "--concurrent" => args.mode = Some(EpisodeMode::Concurrent),
            "--sequential" => args.mode = Some(EpisodeMode::Sequential),
            "-h" | "--help" => return Ok(None),
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            path => {
                if args.config.is_some() {
                    return Err("Only one configuration file may be given".to_string());
                }
                args.config = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Some(args))
}

fn print_report(report: &EpisodeReport) {
    println!("Episode ({:?})", report.mode);
    for flight in &report.flights {
        match (&flight.outcome, &flight.runway) {
            (LandingOutcome::Landed { .. }, Some(runway)) => {
                println!("  {:<10} landed on {}", flight.callsign, runway);
            }
            (LandingOutcome::Landed { runway }, None) => {
                println!("  {:<10} landed on {}", flight.callsign, runway);
            }
            (LandingOutcome::Denied, _) => {
                println!("  {:<10} denied", flight.callsign);
            }
        }
    }
    println!("Landings per runway:");
    for (runway, count) in &report.landings {
        println!("  {:<10} {}", runway, count);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default_config(),
    };
    if let Some(mode) = args.mode {
        config.airstrip.mode = mode;
    }

    logging::init_with(&config.logging);

    let report = run_episode(&config.airstrip).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            println!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
