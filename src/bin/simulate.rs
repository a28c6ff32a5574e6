//! Ladder balance simulator CLI.
//!
//! Run Monte Carlo climbs to analyze ladder balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Default: 200 runs to stage 100
//!   cargo run --bin simulate -- -n 50 -t 200        # 50 runs to stage 200
//!   cargo run --bin simulate -- --tower -r hst      # HST party on the tower
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use anyhow::{bail, Context, Result};
use rankup::build_info::version_line;
use rankup::encounter::Ladder;
use rankup::member::Rarity;
use rankup::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when set and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some((config, write_json)) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };
    let config = config.normalized();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              RANKUP LADDER SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("{}", version_line());
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Ladder:         {}", config.ladder);
    println!("  Target:         {}", config.target_stage);
    println!(
        "  Party:          {} x {} (level {})",
        config.party_size, config.rarity, config.starting_level
    );
    println!("  Max Battles:    {}", config.max_battles_per_run);
    println!("  Auto Evolve:    {}", config.auto_evolve);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    if config.verbosity > 0 {
        println!("{}", report.to_text());
    }

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json()?)
            .with_context(|| format!("failed to write {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} expects a value", flag),
    }
}

/// Returns None when help was requested.
///
/// A preset flag anywhere on the line picks the base config (the last one wins);
/// every other flag then overrides it regardless of order.
fn parse_args(args: &[String]) -> Result<Option<(SimConfig, bool)>> {
    let mut config = args
        .iter()
        .skip(1)
        .filter_map(|arg| SimConfig::preset(arg))
        .last()
        .unwrap_or_default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                config.num_runs = next_value(args, &mut i, flag)?
                    .parse()
                    .context("--runs expects a number")?;
            }
            "-s" | "--seed" => {
                config.seed = Some(
                    next_value(args, &mut i, flag)?
                        .parse()
                        .context("--seed expects a number")?,
                );
            }
            "-t" | "--target" => {
                config.target_stage = next_value(args, &mut i, flag)?
                    .parse()
                    .context("--target expects a number")?;
            }
            "-r" | "--rarity" => {
                config.rarity = next_value(args, &mut i, flag)?.parse::<Rarity>()?;
            }
            "-p" | "--party" => {
                config.party_size = next_value(args, &mut i, flag)?
                    .parse()
                    .context("--party expects a number")?;
            }
            "-l" | "--level" => {
                config.starting_level = next_value(args, &mut i, flag)?
                    .parse()
                    .context("--level expects a number")?;
            }
            "--battles" => {
                config.max_battles_per_run = next_value(args, &mut i, flag)?
                    .parse()
                    .context("--battles expects a number")?;
            }
            "--tower" => {
                config.ladder = Ladder::Tower;
            }
            "--no-evolve" => {
                config.auto_evolve = false;
            }
            "--json" => {
                write_json = true;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" | "--full" | "--full-tower" => {}
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown option: {} (see --help)", other),
        }
        i += 1;
    }

    Ok(Some((config, write_json)))
}

fn print_help() {
    println!("Rankup Ladder Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 200)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --target <T>    Stage (or tower floor) to clear (default: 100)");
    println!("    -r, --rarity <R>    Party rarity: common, rare, super_rare, ultra_rare,");
    println!("                        legendary, stary, hst (default: super_rare)");
    println!("    -p, --party <P>     Party size 1-5 (default: 5)");
    println!("    -l, --level <L>     Starting level (default: 20)");
    println!("    --battles <B>       Battle budget per run (default: 2000)");
    println!("    --tower             Climb the tower instead of the main ladder");
    println!("    --no-evolve         Do not evolve members at level cap");
    println!("    --json              Save the report as JSON");
    println!("    -q, --quiet         Skip the text report");
    println!("    -v, --verbose       Log every run");
    println!("    --quick             Preset: 20 runs to stage 30");
    println!("    --full              Preset: HST party through all 400 stages");
    println!("    --full-tower        Preset: HST party through all 200 tower floors");
    println!("                        (other flags override a preset in any order)");
    println!("    -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG=debug for engine-level logs.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("simulate")
            .chain(line.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_log_filter_respects_rust_log() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_flags_before_preset_are_kept() {
        let (config, _) = parse_args(&args("-n 5 --quick")).unwrap().unwrap();
        assert_eq!(config.num_runs, 5);
        assert_eq!(config.target_stage, SimConfig::quick().target_stage);

        let (config, json) = parse_args(&args("--full-tower -n 3 --json")).unwrap().unwrap();
        assert_eq!(config.num_runs, 3);
        assert_eq!(config.ladder, Ladder::Tower);
        assert!(json);
    }

    #[test]
    fn test_help_and_unknown_flags() {
        assert!(parse_args(&args("-h")).unwrap().is_none());
        assert!(parse_args(&args("--bogus")).is_err());
        assert!(parse_args(&args("-n")).is_err());
    }
}
