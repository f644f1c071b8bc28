//! Kiosk sample generator library.
//!
//! This crate generates the Display service usage samples from the
//! definitions in `kiosk-definitions`, and provides the tooling that reads
//! samples back: metadata header parsing and region marker extraction.
//!
//! ## Modules
//!
//! - [`codegen`] - Statement generation and sample file assembly
//! - [`output`] - Validation, formatting and atomic file writing
//! - [`validation`] - Descriptor checks run before generation
//! - [`header`] - Banner and metadata header rendering and parsing
//! - [`regions`] - `[START x]` / `[END x]` marker scanning and extraction
//! - [`check`] - Verification of sample files on disk
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use kiosk_definitions::{define_display_api, display_samples};
//! use kiosk_gen::output::generate_and_write;
//!
//! let api = define_display_api();
//! let samples = display_samples();
//!
//! // dry_run=true prints the files instead of writing them
//! let files = generate_and_write(&api, &samples, Path::new("kiosk/samples/src/generated"), true).unwrap();
//! assert_eq!(files.len(), samples.len() + 1);
//! ```

pub mod check;
pub mod codegen;
pub mod errors;
pub mod header;
pub mod output;
pub mod regions;
pub mod validation;
