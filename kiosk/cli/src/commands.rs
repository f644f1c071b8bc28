//! Command definitions and their execution against the Display service.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use clap::{ArgGroup, Subcommand};
use kiosk_client::prelude::*;
use tracing::{debug, info};

use crate::CliError;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a kiosk or a sign
    #[command(subcommand)]
    Create(CreateCommand),

    /// List kiosks or signs
    #[command(subcommand)]
    List(ListCommand),

    /// Get a kiosk, a sign, or the sign shown on a kiosk
    #[command(subcommand)]
    Get(GetCommand),

    /// Delete a kiosk or a sign
    #[command(subcommand)]
    Delete(DeleteCommand),

    /// Choose the sign kiosks display
    #[command(subcommand)]
    Set(SetCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CreateCommand {
    /// Enroll a new kiosk
    Kiosk {
        /// Name for the new kiosk
        name: String,
    },

    /// Enroll a new sign
    Sign {
        /// Name for the new sign
        name: String,

        /// Text to display on the sign
        #[arg(long)]
        text: Option<String>,

        /// Image (PNG file) to display on the sign
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ListCommand {
    /// List active kiosks
    Kiosks,
    /// List active signs
    Signs,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GetCommand {
    /// Get a kiosk
    Kiosk { kiosk_id: i32 },

    /// Get a sign, or the sign a kiosk should display
    #[command(group(ArgGroup::new("target").required(true).args(["sign_id", "for_kiosk"])))]
    Sign {
        sign_id: Option<i32>,

        /// Report the sign shown on this kiosk
        #[arg(long, value_name = "KIOSK_ID")]
        for_kiosk: Option<i32>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DeleteCommand {
    /// Delete a kiosk
    Kiosk { kiosk_id: i32 },
    /// Delete a sign
    Sign { sign_id: i32 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SetCommand {
    /// Display a sign on one kiosk or on all kiosks
    #[command(group(ArgGroup::new("kiosks").required(true).args(["kiosk", "all"])))]
    Sign {
        sign_id: i32,

        /// Kiosk to update
        #[arg(long, value_name = "KIOSK_ID")]
        kiosk: Option<i32>,

        /// Update every kiosk
        #[arg(long)]
        all: bool,
    },
}

/// Runs one command, writing its result to `out`.
///
/// ## Errors
///
/// Returns `CliError::Client` if the service call fails,
/// `CliError::ReadImage` if a sign image cannot be read, or
/// `CliError::Usage` for an argument combination the parser should have
/// rejected.
pub async fn execute(
    command: &Command,
    client: &DisplayClient,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    debug!(?command, "executing");

    match command {
        Command::Create(CreateCommand::Kiosk { name }) => {
            let kiosk = client
                .create_kiosk(Kiosk::builder().name(name.as_str()).build())
                .await?;
            writeln!(out, "{}", kiosk)?;
        }
        Command::Create(CreateCommand::Sign { name, text, image }) => {
            let mut sign = Sign::builder().name(name.as_str());
            if let Some(text) = text {
                sign = sign.text(text.as_str());
            }
            if let Some(path) = image {
                let bytes = fs::read(path).map_err(|e| CliError::ReadImage {
                    path: path.display().to_string(),
                    source: e,
                })?;
                info!(path = %path.display(), bytes = bytes.len(), "attaching sign image");
                sign = sign.image(BASE64.encode(bytes));
            }
            let sign = client.create_sign(sign.build()).await?;
            writeln!(out, "{}", sign)?;
        }
        Command::List(ListCommand::Kiosks) => {
            for kiosk in client.list_kiosks(Empty::default()).await?.kiosks {
                writeln!(out, "{}", kiosk)?;
            }
        }
        Command::List(ListCommand::Signs) => {
            for sign in client.list_signs(Empty::default()).await?.signs {
                writeln!(out, "{}", sign)?;
            }
        }
        Command::Get(GetCommand::Kiosk { kiosk_id }) => {
            let request = GetKioskRequest::builder().id(*kiosk_id).build();
            writeln!(out, "{}", client.get_kiosk(request).await?)?;
        }
        Command::Get(GetCommand::Sign {
            for_kiosk: Some(kiosk_id),
            ..
        }) => {
            let request = GetSignIdForKioskIdRequest::builder()
                .kiosk_id(*kiosk_id)
                .build();
            writeln!(out, "{}", client.get_sign_id_for_kiosk_id(request).await?)?;
        }
        Command::Get(GetCommand::Sign {
            sign_id: Some(sign_id),
            ..
        }) => {
            let request = GetSignRequest::builder().id(*sign_id).build();
            writeln!(out, "{}", client.get_sign(request).await?)?;
        }
        Command::Get(GetCommand::Sign { .. }) => {
            return Err(CliError::Usage(
                "get sign needs a sign id or --for-kiosk".to_string(),
            ));
        }
        Command::Delete(DeleteCommand::Kiosk { kiosk_id }) => {
            let request = DeleteKioskRequest::builder().id(*kiosk_id).build();
            client.delete_kiosk(request).await?;
            writeln!(out, "deleted")?;
        }
        Command::Delete(DeleteCommand::Sign { sign_id }) => {
            let request = DeleteSignRequest::builder().id(*sign_id).build();
            client.delete_sign(request).await?;
            writeln!(out, "deleted")?;
        }
        Command::Set(SetCommand::Sign { sign_id, kiosk, .. }) => {
            // no kiosk ids selects every kiosk
            let request = SetSignIdForKioskIdsRequest::builder()
                .sign_id(*sign_id)
                .kiosk_ids(*kiosk)
                .build();
            client.set_sign_id_for_kiosk_ids(request).await?;
            match kiosk {
                Some(kiosk_id) => {
                    writeln!(out, "Successfully set kiosk {} to sign {}", kiosk_id, sign_id)?
                }
                None => writeln!(out, "Successfully set all kiosks to sign {}", sign_id)?,
            }
        }
    }

    Ok(())
}
