//! Property-check runner with JSON and JUnit report output.
//!
//! Usage:
//!   cargo run -p transform_checks --bin check_runner -- \
//!       [--config checks.json] [--seed 42] [--iterations 1000] \
//!       [--filter quat] [--shuffle] [--output check-reports]
//!
//! Exits with status 1 when any check fails.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};
use transform_checks::prelude::*;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    iterations: Option<u32>,
    filter: Option<String>,
    shuffle: bool,
    output: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut out = Args::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--config", Some(v)) => {
                out.config = Some(PathBuf::from(v));
                i += 2;
            }
            ("--seed", Some(v)) => {
                out.seed = Some(v.parse().with_context(|| format!("invalid --seed {v}"))?);
                i += 2;
            }
            ("--iterations", Some(v)) => {
                out.iterations = Some(
                    v.parse()
                        .with_context(|| format!("invalid --iterations {v}"))?,
                );
                i += 2;
            }
            ("--filter", Some(v)) => {
                out.filter = Some(v.clone());
                i += 2;
            }
            ("--output", Some(v)) => {
                out.output = Some(v.clone());
                i += 2;
            }
            ("--shuffle", _) => {
                out.shuffle = true;
                i += 1;
            }
            (other, _) => {
                warn!(arg = other, "Ignoring unknown argument");
                i += 1;
            }
        }
    }
    Ok(out)
}

fn load_config(args: &Args) -> anyhow::Result<RunnerConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            RunnerConfig::from_json_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => RunnerConfig::default(),
    };

    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(iterations) = args.iterations {
        cfg.iterations = iterations;
    }
    if args.filter.is_some() {
        cfg.filter = args.filter.clone();
    }
    if args.shuffle {
        cfg.shuffle = true;
    }
    if let Some(output) = &args.output {
        cfg.output_dir = output.clone();
    }
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args()?;
    let cfg = load_config(&args)?;
    info!(seed = cfg.seed, output_dir = %cfg.output_dir, "Starting check runner");

    let output_dir = PathBuf::from(&cfg.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let checks = registry();
    let report = Runner::new(cfg)
        .run(&checks)
        .with_metadata("crate_version", env!("CARGO_PKG_VERSION"));
    let stats = report.overall_stats();

    println!();
    println!("Property check summary");
    println!("======================");
    for outcome in &report.results {
        println!("{} {}", outcome.status.icon(), outcome.name);
    }
    println!();
    println!("Total:     {}", stats.total);
    println!("Passed:    {}", stats.passed);
    println!("Failed:    {}", stats.failed);
    println!("Skipped:   {}", stats.skipped);
    println!("Pass Rate: {:.1}%", stats.pass_rate());
    println!("Seed:      {}", report.seed);

    for failure in report.failures() {
        println!(
            "\nFAILED {}: {}",
            failure.name,
            failure.error_message.as_deref().unwrap_or("")
        );
    }

    let json_path = output_dir.join("transform-checks.json");
    let junit_path = output_dir.join("transform-checks.xml");
    report.save_json(&json_path)?;
    report.save_junit(&junit_path)?;
    info!(json = %json_path.display(), junit = %junit_path.display(), "Reports saved");

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
