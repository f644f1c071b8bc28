//! The `k` command line tool for the Kiosk Display service.
//!
//! `k` manages kiosks and signs and decides which sign each kiosk shows:
//!
//! ```text
//! k create kiosk <NAME>
//! k list kiosks
//! k get kiosk <KIOSK_ID>
//! k delete kiosk <KIOSK_ID>
//! k create sign <NAME> [--text <TEXT>] [--image <FILE>]
//! k list signs
//! k get sign <SIGN_ID>
//! k get sign --for-kiosk <KIOSK_ID>
//! k delete sign <SIGN_ID>
//! k set sign <SIGN_ID> --kiosk <KIOSK_ID>
//! k set sign <SIGN_ID> --all
//! ```
//!
//! The server is configured through `KIOSK_SERVER` and `KIOSK_PORT`, see
//! [`kiosk_client::ClientConfig`].

pub mod commands;

use std::io;

use kiosk_client::KioskError;
use thiserror::Error;

pub use commands::{Command, execute};

/// Errors from running a `k` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The service call failed.
    #[error(transparent)]
    Client(#[from] KioskError),

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// The command's arguments do not select a target.
    #[error("{0}")]
    Usage(String),

    /// The sign image could not be read.
    #[error("failed to read image {path}: {source}")]
    ReadImage {
        path: String,
        #[source]
        source: io::Error,
    },
}
