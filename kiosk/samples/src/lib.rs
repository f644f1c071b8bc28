//! Usage samples for the Kiosk Display service.
//!
//! Every module under [`generated`] is produced by `kiosk-gen` from one
//! sample descriptor and exposes a single entry point:
//!
//! ```text
//! pub async fn run(client: &DisplayClient, out: &mut dyn Write) -> Result<(), SampleError>
//! ```
//!
//! Samples show the happy path only. They write their results to `out`
//! and hand every failure to the caller through [`SampleError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use kiosk_client::DisplayClient;
//!
//! # async fn demo() -> Result<(), kiosk_samples::SampleError> {
//! let client = DisplayClient::from_env()?;
//! let mut out = Vec::new();
//! kiosk_samples::run_sample("get_kiosk_request", &client, &mut out).await?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use kiosk_client::{DisplayClient, KioskError};
use thiserror::Error;
use tracing::debug;

pub mod generated;

pub use generated::SAMPLES;

/// Errors surfaced by a sample run.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The RPC failed.
    #[error(transparent)]
    Client(#[from] KioskError),

    /// Writing the sample's output failed.
    #[error("Failed to write sample output: {0}")]
    Output(#[from] std::io::Error),

    /// No sample is registered under the requested name.
    #[error("Unknown sample '{0}'")]
    UnknownSample(String),
}

/// Runs a sample by module name (`list_signs_callable`) or sample name
/// (`ListSignsCallableCallableListSignsMethodSample`).
pub async fn run_sample(
    name: &str,
    client: &DisplayClient,
    out: &mut dyn Write,
) -> Result<(), SampleError> {
    debug!(sample = name, base_url = client.base_url(), "running sample");
    generated::run(name, client, out).await
}
