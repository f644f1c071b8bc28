//! Output assembly and file writing for generated samples.
//!
//! ## Output Structure
//!
//! ```text
//! samples/src/generated/
//! ├── mod.rs                  # Module declarations and the sample registry
//! ├── get_kiosk_request.rs    # One file per sample descriptor
//! ├── get_kiosk_callable.rs
//! └── ...
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: Descriptors are validated before anything is rendered,
//!   and every file is parsed with `syn` before writing
//! - **Formatting**: Generated code is formatted with `prettyplease`
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::Path;

use kiosk_define::{SampleDescriptor, ServiceApi};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::{debug, info};

use crate::codegen::SampleFileBuilder;
use crate::errors::GeneratorError;
use crate::header::BANNER;
use crate::validation::validate_samples;

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub file_name: String,
    pub content: String,
}

/// Assembles `mod.rs` for the generated sample directory.
///
/// Besides the module declarations it emits a `SAMPLES` registry of
/// `(module, sample name)` pairs and a `run` function dispatching on
/// either name.
pub fn assemble_mod_rs(api: &ServiceApi, samples: &[SampleDescriptor]) -> TokenStream {
    let intro = format!(" Generated samples for the {} service.", api.name);
    let client = format_ident!("{}", api.client_name());

    let modules: Vec<String> = samples.iter().map(|s| s.module_name()).collect();
    let idents: Vec<_> = modules.iter().map(|m| format_ident!("{}", m)).collect();
    let names: Vec<&str> = samples.iter().map(|s| s.sample_name.as_str()).collect();

    quote! {
        #![doc = #intro]

        use std::io::Write;

        use kiosk_client::#client;

        use crate::SampleError;

        #(pub mod #idents;)*

        /// Module and sample name of every generated sample.
        pub const SAMPLES: &[(&str, &str)] = &[#((#modules, #names)),*];

        /// Runs the sample registered under `name` (module or sample name).
        pub async fn run(
            name: &str,
            client: &#client,
            out: &mut dyn Write,
        ) -> Result<(), SampleError> {
            match name {
                #(#modules | #names => #idents::run(client, out).await,)*
                other => Err(SampleError::UnknownSample(other.to_string())),
            }
        }
    }
}

/// Validates that the generated code is syntactically correct Rust.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the tokens do not form a file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease, prepending the banner.
pub fn format_code(file: &syn::File) -> String {
    format!("{}\n\n{}", BANNER, prettyplease::unparse(file))
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Renders every sample plus `mod.rs`, without touching the filesystem.
///
/// ## Errors
///
/// Returns an error if validation fails or any file is not valid Rust.
pub fn generate_samples(
    api: &ServiceApi,
    samples: &[SampleDescriptor],
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    validate_samples(api, samples)?;

    let mut files = Vec::with_capacity(samples.len() + 1);
    for sample in samples {
        let content = SampleFileBuilder::new(api, sample)?.build()?;
        files.push(GeneratedFile {
            file_name: format!("{}.rs", sample.module_name()),
            content,
        });
    }

    let mod_file = validate_code(&assemble_mod_rs(api, samples))?;
    files.push(GeneratedFile {
        file_name: "mod.rs".to_string(),
        content: format_code(&mod_file),
    });

    Ok(files)
}

/// Generates all samples and writes them to `output_dir`.
///
/// With `dry_run` the files are printed to stdout instead.
///
/// ## Errors
///
/// Returns an error if:
/// - `output_dir` does not exist (unless `dry_run`)
/// - Generation fails
/// - File writing fails
pub fn generate_and_write(
    api: &ServiceApi,
    samples: &[SampleDescriptor],
    output_dir: &Path,
    dry_run: bool,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    if !dry_run && !output_dir.is_dir() {
        return Err(GeneratorError::OutputDirNotFound(
            output_dir.display().to_string(),
        ));
    }

    let files = generate_samples(api, samples)?;

    if dry_run {
        for file in &files {
            println!("=== {} ===\n{}", file.file_name, file.content);
        }
    } else {
        for file in &files {
            let path = output_dir.join(&file.file_name);
            write_atomic(&path, &file.content)?;
            debug!(path = %path.display(), "wrote sample file");
        }
        info!(
            count = files.len(),
            dir = %output_dir.display(),
            "generated sample files"
        );
    }

    Ok(files)
}
