// Feature tour: list and run the language feature samples

use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Builder;
use log::{info, warn, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

use language_feature_samples::catalog::{self, SampleInfo};
use language_feature_samples::{SampleResult, TourConfig};

#[derive(Parser)]
#[command(name = "feature-tour")]
#[command(about = "Run small language feature samples", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every sample
    List,
    /// Run samples by id (default: configured samples, or all)
    Run { ids: Vec<String> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = Builder::new();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    builder.filter_level(level);
    builder.init();

    let mut config = match TourConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::List => {
            for sample in catalog::SAMPLES {
                println!("{:<12} {} - {}", sample.id.bold(), sample.title, sample.summary);
            }
            ExitCode::SUCCESS
        }
        Command::Run { ids } => {
            if !ids.is_empty() {
                config.samples = ids;
            }
            match run_samples(&config) {
                Ok(0) => ExitCode::SUCCESS,
                Ok(failed) => {
                    warn!("{} sample(s) failed", failed);
                    ExitCode::FAILURE
                }
                Err(err) => {
                    eprintln!("{} {}", "error:".red().bold(), err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Runs the selected samples and returns how many failed.
fn run_samples(config: &TourConfig) -> SampleResult<usize> {
    let samples = catalog::selected(config)?;
    info!("running {} sample(s)", samples.len());

    let mut failed = 0;
    for sample in samples {
        if !run_one(sample, config) {
            failed += 1;
        }
    }

    println!();
    if failed == 0 {
        println!("{}", "✓ All samples passed".green());
    } else {
        println!("{}", format!("✗ {} sample(s) failed", failed).red());
    }
    Ok(failed)
}

fn run_one(sample: &SampleInfo, config: &TourConfig) -> bool {
    println!("\n=== {} ===", sample.title);
    match sample.run(config) {
        Ok(output) => {
            println!("{}", output);
            true
        }
        Err(err) => {
            println!("{} {}", "failed:".red(), err);
            false
        }
    }
}
