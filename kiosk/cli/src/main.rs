//! k - Kiosk Display command line tool

use std::io;
use std::process;

use clap::Parser;
use kiosk_cli::{Command, execute};
use kiosk_client::DisplayClient;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Manage kiosks and signs of a Kiosk Display service
#[derive(Parser, Debug)]
#[command(name = "k")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service base URL (overrides KIOSK_SERVER / KIOSK_PORT / KIOSK_USE_TLS)
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Logs go to stderr; stdout carries only command output.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,kiosk_cli=info,kiosk_client=info".to_string(),
            2 => "info,kiosk_cli=debug,kiosk_client=debug".to_string(),
            _ => "debug,kiosk_cli=trace,kiosk_client=trace".to_string(),
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

    info!(base_url = client.base_url(), "k starting");

    let mut out = io::stdout().lock();
    if let Err(e) = execute(&cli.command, &client, &mut out).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
