//! Error types for the sample generator.

use kiosk_define::DescriptorError;
use thiserror::Error;

use crate::header::HeaderError;
use crate::regions::RegionError;

/// Errors that can occur while generating or checking samples.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse a sample file
    #[error("Failed to parse sample file: {0}")]
    ParseError(String),

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output directory does not exist
    #[error("Output directory does not exist: {0}")]
    OutputDirNotFound(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A descriptor is internally inconsistent (form/type mismatch,
    /// class-name mismatch, bad region tag).
    #[error(transparent)]
    InvalidDescriptor(#[from] DescriptorError),

    /// A descriptor names a client method the service does not have.
    #[error("Sample '{sample}' calls unknown method '{method}'")]
    UnknownMethod { sample: String, method: String },

    /// Two descriptors share a sample name or output module.
    #[error("Duplicate sample '{0}'")]
    DuplicateSample(String),

    /// The descriptor's request values do not fit the method's request message.
    #[error("Sample '{sample}' has unusable request values: {reason}")]
    RequestValues { sample: String, reason: String },

    /// A sample file's metadata header is malformed.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// A sample file's region markers are malformed.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// A sample file does not match the descriptor it was generated from.
    #[error("Sample file '{path}' does not match its descriptor: {detail}")]
    DescriptorMismatch { path: String, detail: String },

    /// One or more sample files failed `check`.
    #[error("{failed} of {checked} sample files failed checks")]
    CheckFailed { failed: usize, checked: usize },
}
