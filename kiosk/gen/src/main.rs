//! Kiosk sample generator
//!
//! Generates the Display service samples and checks or extracts snippets
//! from existing sample files.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use kiosk_definitions::{define_display_api, display_samples};
use kiosk_gen::check::{check_file, sample_files};
use kiosk_gen::errors::GeneratorError;
use kiosk_gen::output::generate_and_write;
use kiosk_gen::regions::extract;
use tracing::{info, warn};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Kiosk sample generator - renders and verifies Display service samples
#[derive(Parser, Debug)]
#[command(name = "kiosk-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate every sample file and the module index
    Generate {
        /// Output directory for generated samples
        #[arg(short, long, default_value = "kiosk/samples/src/generated")]
        output: PathBuf,

        /// Print generated files without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the snippet between a region's markers
    Extract {
        /// Sample file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Region to extract
        #[arg(short, long, default_value = "sample_core")]
        region: String,
    },

    /// Verify sample files against their descriptors
    Check {
        /// Sample files or directories of sample files
        #[arg(value_name = "PATHS", required = true)]
        paths: Vec<PathBuf>,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,kiosk_gen=info".to_string(),
            2 => "info,kiosk_gen=debug".to_string(),
            _ => "debug,kiosk_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> Result<(), GeneratorError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let api = define_display_api();
    let samples = display_samples();

    match cli.command {
        Commands::Generate { output, dry_run } => {
            info!(
                api = %api.name,
                samples = samples.len(),
                output = %output.display(),
                dry_run,
                "generating samples"
            );
            let files = generate_and_write(&api, &samples, &output, dry_run)?;
            if !dry_run {
                eprintln!(
                    "{} {} files to {}",
                    "Generated".green(),
                    files.len(),
                    output.display()
                );
            }
        }

        Commands::Extract { file, region } => {
            let source = fs::read_to_string(&file).map_err(|e| GeneratorError::ReadError {
                path: file.display().to_string(),
                source: e,
            })?;
            println!("{}", extract(&source, &region)?);
        }

        Commands::Check { paths } => {
            let mut checked = 0;
            let mut failed = 0;

            for path in &paths {
                for file in sample_files(path)? {
                    checked += 1;
                    match check_file(&file, &api, &samples) {
                        Ok(descriptor) => {
                            println!(
                                "{} {} ({})",
                                "ok".green(),
                                file.display(),
                                descriptor.sample_name
                            );
                        }
                        Err(e) => {
                            failed += 1;
                            warn!(file = %file.display(), error = %e, "sample check failed");
                            println!("{} {}: {}", "FAIL".red().bold(), file.display(), e);
                        }
                    }
                }
            }

            if failed > 0 {
                return Err(GeneratorError::CheckFailed { failed, checked });
            }
        }
    }

    Ok(())
}
