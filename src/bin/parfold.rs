//! Command-line entry point for the parfold verification harness.
//!
//! Builds a `HarnessConfig` from an optional JSON file plus flag overrides,
//! runs one verification session, and prints the rendered report. A detected
//! divergence is the harness doing its job and still exits 0; only
//! infrastructure failures (bad configuration, a panicking worker, I/O)
//! exit nonzero.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use parfold::harness;
use parfold::{ExecutorKind, HarnessConfig, ParfoldError};

const USAGE: &str = "\
parfold - partitioned parallel aggregation verifier

USAGE:
    parfold [OPTIONS]

OPTIONS:
    --config <PATH>       Load a HarnessConfig from a JSON file
    --length <N>          Override the sequence length
    --partitions <K>      Override the chunk count (must divide length)
    --executor <KIND>     Fan-out backend: scoped_threads | rayon_pool
    --runs <N>            Repetitions per path inside the timing window
    --seed <N>            Fix the RNG seed for a reproducible sequence
    --help                Print this message
";

fn parse_config() -> Result<HarnessConfig, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut length: Option<usize> = None;
    let mut partitions: Option<usize> = None;
    let mut executor: Option<ExecutorKind> = None;
    let mut runs: Option<usize> = None;
    let mut seed: Option<u64> = None;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut index = 0_usize;
    while index < args.len() {
        match args[index].as_str() {
            "--config" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--length" => {
                index += 1;
                length = Some(parse_value(&args, index, "--length")?);
            }
            "--partitions" => {
                index += 1;
                partitions = Some(parse_value(&args, index, "--partitions")?);
            }
            "--executor" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "missing value for --executor".to_owned())?;
                executor = Some(match value.as_str() {
                    "scoped_threads" => ExecutorKind::ScopedThreads,
                    "rayon_pool" => ExecutorKind::RayonPool,
                    other => return Err(format!("unknown executor kind '{}'", other)),
                });
            }
            "--runs" => {
                index += 1;
                runs = Some(parse_value(&args, index, "--runs")?);
            }
            "--seed" => {
                index += 1;
                seed = Some(parse_value(&args, index, "--seed")?);
            }
            "--help" | "-h" => {
                print!("{}", USAGE);
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
        index += 1;
    }

    let mut config = match config_path {
        Some(path) => HarnessConfig::from_json_path(&path)
            .map_err(|err| format!("failed to load {}: {}", path.display(), err))?,
        None => HarnessConfig::default(),
    };

    // Flags win over the file, the file wins over defaults.
    if let Some(length) = length {
        config.length = length;
    }
    if let Some(partitions) = partitions {
        config.partitions = partitions;
    }
    if let Some(executor) = executor {
        config.executor = executor;
    }
    if let Some(runs) = runs {
        config.runs = runs;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    flag: &str,
) -> Result<T, String> {
    let value = args
        .get(index)
        .ok_or_else(|| format!("missing value for {}", flag))?;
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value '{}' for {}", value, flag))
}

fn run() -> Result<(), ParfoldError> {
    let config = Arc::new(parse_config().map_err(ParfoldError::ConfigError)?);
    let report = harness::run_verification(&config)?;
    print!("{}", harness::render_report(&report));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("parfold: {}", err);
            ExitCode::FAILURE
        }
    }
}
