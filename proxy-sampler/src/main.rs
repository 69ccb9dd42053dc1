use anyhow::{Context, Result};
use clap::Parser;
use proxy_sampler::{Config, ConfigLoader, ConfigValidator, Pipeline, SamplerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "proxy-sampler")]
#[command(about = "Sample IPv4 proxies grouped by /24 subnet", version)]
struct Args {
    /// File with one IPv4 address per line (default: proxies.txt)
    #[arg(long, short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,

    /// Report file, overwritten on every run (default: results.txt)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Addresses to keep from each subnet when --total is 0 (default: 2)
    #[arg(long, short = 'p', value_name = "N")]
    per_subnet: Option<usize>,

    /// Addresses to keep across all subnets, 0 to sample per subnet (default: 100)
    #[arg(long, short = 't', value_name = "N")]
    total: Option<usize>,

    /// Seed for a reproducible selection
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Config file path
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    /// Command-line values take precedence over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.files.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.files.output = output.clone();
        }
        if let Some(per_subnet) = self.per_subnet {
            config.sampling.per_subnet = per_subnet;
        }
        if let Some(total) = self.total {
            config.sampling.total = total;
        }
        if self.seed.is_some() {
            config.sampling.seed = self.seed;
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let env_filter = if args.verbose {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(output) => {
            println!("Results written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit status for a failed run, looking through any added context
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<SamplerError>()
        .map_or(1, SamplerError::exit_code)
}

fn run(args: &Args) -> Result<PathBuf> {
    let mut config =
        ConfigLoader::load_or_default(args.config.clone()).context("loading configuration")?;
    args.apply(&mut config);
    ConfigValidator::validate(&config)?;

    let summary = Pipeline::run(&config)?;
    tracing::debug!(
        "{} of {} addresses kept in {} subnets",
        summary.selected,
        summary.loaded,
        summary.subnets
    );
    Ok(summary.output)
}
