//! Verification of sample files on disk.
//!
//! A sample file passes when:
//!
//! - it parses as Rust
//! - its banner and metadata header parse, and match the descriptor of the
//!   same sample name
//! - its region markers are paired and the core region nests inside the
//!   outer one
//! - its core region makes exactly one call in the declared form

use std::fs;
use std::path::{Path, PathBuf};

use kiosk_define::{CallingForm, SampleDescriptor, ServiceApi};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::header::parse_header;
use crate::regions;

fn mismatch(path: &str, detail: impl Into<String>) -> GeneratorError {
    GeneratorError::DescriptorMismatch {
        path: path.to_string(),
        detail: detail.into(),
    }
}

/// Checks the source of one sample file.
///
/// `label` names the file in errors. Returns the descriptor recovered from
/// the header.
///
/// ## Errors
///
/// Returns the first failed check.
pub fn check_source(
    label: &str,
    source: &str,
    api: &ServiceApi,
    expected: &[SampleDescriptor],
) -> Result<SampleDescriptor, GeneratorError> {
    syn::parse_file(source)
        .map_err(|e| GeneratorError::ParseError(format!("{}: {}", label, e)))?;

    let descriptor = parse_header(source)?;
    regions::validate(source, &descriptor.region_tag)?;
    descriptor.check()?;

    if api.find_method(&descriptor.api_method_name).is_none() {
        return Err(GeneratorError::UnknownMethod {
            sample: descriptor.sample_name,
            method: descriptor.api_method_name,
        });
    }

    let Some(reference) = expected
        .iter()
        .find(|s| s.sample_name == descriptor.sample_name)
    else {
        return Err(mismatch(
            label,
            format!("no descriptor named '{}'", descriptor.sample_name),
        ));
    };
    if *reference != descriptor {
        return Err(mismatch(label, "metadata header differs from the descriptor"));
    }

    let core = regions::extract(source, &descriptor.core_region_tag())?;
    let calls = core.matches(&format!(".{}(", descriptor.api_method_name)).count();
    if calls != 1 {
        return Err(mismatch(
            label,
            format!(
                "expected one call to `{}`, found {}",
                descriptor.api_method_name, calls
            ),
        ));
    }

    let future_calls = core.matches(".future_call(").count();
    let awaits = core.matches(".await").count();
    let expected_future_calls = match descriptor.calling_form {
        CallingForm::Request => 0,
        CallingForm::Callable => 1,
    };
    if future_calls != expected_future_calls || awaits != 1 {
        return Err(mismatch(
            label,
            format!(
                "{} form needs {} future_call and one await, found {} and {}",
                descriptor.calling_form, expected_future_calls, future_calls, awaits
            ),
        ));
    }

    debug!(file = label, sample = %descriptor.sample_name, "sample file ok");
    Ok(descriptor)
}

/// Reads and checks one sample file.
pub fn check_file(
    path: &Path,
    api: &ServiceApi,
    expected: &[SampleDescriptor],
) -> Result<SampleDescriptor, GeneratorError> {
    let source = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    check_source(&path.display().to_string(), &source, api, expected)
}

/// Expands `path` into the sample files it names.
///
/// A directory yields its `.rs` files except `mod.rs`, sorted by name; a
/// file yields itself.
pub fn sample_files(path: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let read_error = |e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(read_error)? {
        let file = entry.map_err(read_error)?.path();
        let is_sample = file.extension().is_some_and(|ext| ext == "rs")
            && file.file_name().is_some_and(|name| name != "mod.rs");
        if is_sample {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}
