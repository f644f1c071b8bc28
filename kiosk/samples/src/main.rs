//! Kiosk sample runner
//!
//! Runs one generated Display sample against a live service and prints its
//! output to stdout.

use std::io;
use std::process;

use clap::Parser;
use kiosk_client::DisplayClient;
use kiosk_samples::{SAMPLES, run_sample};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Run a generated Kiosk Display sample
#[derive(Parser, Debug)]
#[command(name = "kiosk-sample")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sample to run, by module name or sample name
    #[arg(value_name = "NAME", required_unless_present = "list")]
    name: Option<String>,

    /// List available samples
    #[arg(long)]
    list: bool,

    /// Service base URL (overrides KIOSK_SERVER / KIOSK_PORT / KIOSK_USE_TLS)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr; stdout carries only sample output.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,kiosk_samples=info,kiosk_client=info".to_string(),
            2 => "info,kiosk_samples=debug,kiosk_client=debug".to_string(),
            _ => "debug,kiosk_samples=trace,kiosk_client=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        for (module, sample_name) in SAMPLES {
            println!("{:<24} {}", module, sample_name);
        }
        return;
    }

    let Some(name) = cli.name else {
        eprintln!("Error: a sample name is required (see --list)");
        process::exit(2);
    };

    let client = match &cli.base_url {
        Some(url) => DisplayClient::with_base_url(url),
        None => DisplayClient::from_env(),
    };
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    tracing::info!(sample = %name, base_url = client.base_url(), "Kiosk sample starting");

    let mut out = io::stdout().lock();
    if let Err(e) = run_sample(&name, &client, &mut out).await {
        eprintln!("Sample '{}' failed: {}", name, e);
        process::exit(1);
    }
}
