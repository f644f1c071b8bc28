//! Sample file assembly.
//!
//! A sample file has this layout:
//!
//! ```text
//! // This code was automatically generated by kiosk-gen. Do not edit manually.
//! // Sample name: "ListSignsRequestListSignsMethodSample"
//!
//! // [START sample]
//!
//! //      calling form: "Request"
//! //      ...
//!
//! use std::io::Write;
//!
//! use kiosk_client::prelude::*;
//!
//! use crate::SampleError;
//!
//! /// List Signs Method Sample
//! pub async fn run(client: &DisplayClient, out: &mut dyn Write) -> Result<(), SampleError> {
//!     // [START sample_core]
//!     ...
//!     // [END sample_core]
//!     Ok(())
//! }
//!
//! // [END sample]
//! ```

use kiosk_define::{ApiMethod, SampleDescriptor, ServiceApi};
use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use crate::codegen::invocation::{generate_consume, generate_invocation};
use crate::codegen::request::generate_request;
use crate::errors::GeneratorError;
use crate::header::{render_banner, render_header};
use crate::output::validate_code;
use crate::regions;

/// Crate the generated samples import the client from.
const CLIENT_CRATE: &str = "kiosk_client";

/// Placeholder left between dispatching a callable and resolving it.
pub const DO_SOMETHING: &str = "// Do something";

const BODY_INDENT: &str = "    ";

/// Formats a statement list with `prettyplease`.
///
/// The statements are wrapped in a throwaway function so they can be parsed
/// as a file; the returned lines keep the function body's indentation.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the statements do not parse.
pub fn format_statements(statements: &TokenStream) -> Result<Vec<String>, GeneratorError> {
    let wrapped = quote! {
        fn __sample() {
            #statements
        }
    };
    let file = validate_code(&wrapped)?;
    let formatted = prettyplease::unparse(&file);
    let lines: Vec<&str> = formatted.lines().collect();

    // `fn __sample() {}` when there are no statements
    if lines.len() < 3 {
        return Ok(Vec::new());
    }

    Ok(lines[1..lines.len() - 1]
        .iter()
        .map(|line| line.to_string())
        .collect())
}

/// Builds the source of one sample file.
///
/// ## Examples
///
/// ```
/// use kiosk_definitions::{define_display_api, display_samples};
/// use kiosk_gen::codegen::SampleFileBuilder;
///
/// let api = define_display_api();
/// let samples = display_samples();
///
/// let source = SampleFileBuilder::new(&api, &samples[0]).unwrap().build().unwrap();
/// assert!(source.contains("// [START sample_core]"));
/// ```
pub struct SampleFileBuilder<'a> {
    api: &'a ServiceApi,
    method: &'a ApiMethod,
    sample: &'a SampleDescriptor,
}

impl<'a> SampleFileBuilder<'a> {
    /// Creates a builder for `sample`, resolving the method it calls.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::UnknownMethod` if the service has no method
    /// named by the descriptor.
    pub fn new(api: &'a ServiceApi, sample: &'a SampleDescriptor) -> Result<Self, GeneratorError> {
        let method =
            api.find_method(&sample.api_method_name)
                .ok_or_else(|| GeneratorError::UnknownMethod {
                    sample: sample.sample_name.clone(),
                    method: sample.api_method_name.clone(),
                })?;

        Ok(Self {
            api,
            method,
            sample,
        })
    }

    /// The formatted statements inside the core region.
    pub fn core_lines(&self) -> Result<Vec<String>, GeneratorError> {
        let request = generate_request(self.method, self.sample)?;
        let invocation = generate_invocation(self.method, self.sample);
        let consume = generate_consume(self.method);
        let dispatch = invocation.dispatch;

        match invocation.resolve {
            None => format_statements(&quote! { #request #dispatch #consume }),
            Some(resolve) => {
                let mut lines = format_statements(&quote! { #request #dispatch })?;
                lines.push(String::new());
                lines.push(format!("{}{}", BODY_INDENT, DO_SOMETHING));
                lines.push(String::new());
                lines.extend(format_statements(&quote! { #resolve #consume })?);
                Ok(lines)
            }
        }
    }

    /// Assembles the complete file and checks that it parses and that its
    /// region markers are well formed.
    pub fn build(&self) -> Result<String, GeneratorError> {
        let tag = &self.sample.region_tag;
        let core_tag = self.sample.core_region_tag();

        let mut lines = render_banner(self.sample);
        lines.push(String::new());
        lines.push(format!("// [START {}]", tag));
        lines.push(String::new());
        lines.extend(render_header(self.sample));
        lines.push(String::new());
        lines.push("use std::io::Write;".to_string());
        lines.push(String::new());
        lines.push(format!("use {}::prelude::*;", CLIENT_CRATE));
        lines.push(String::new());
        lines.push("use crate::SampleError;".to_string());
        lines.push(String::new());
        lines.push(format!("/// {}", self.sample.description));
        lines.push(format!(
            "pub async fn run(client: &{}, out: &mut dyn Write) -> Result<(), SampleError> {{",
            self.api.client_name()
        ));
        lines.push(format!("{}// [START {}]", BODY_INDENT, core_tag));
        lines.extend(self.core_lines()?);
        lines.push(format!("{}// [END {}]", BODY_INDENT, core_tag));
        lines.push(format!("{}Ok(())", BODY_INDENT));
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!("// [END {}]", tag));

        let mut source = lines.join("\n");
        source.push('\n');

        syn::parse_file(&source).map_err(|e| {
            GeneratorError::CodeGenError(format!(
                "sample '{}' is not valid Rust: {}",
                self.sample.sample_name, e
            ))
        })?;
        regions::validate(&source, tag)?;

        debug!(
            sample = %self.sample.sample_name,
            lines = lines.len(),
            "rendered sample"
        );
        Ok(source)
    }
}
