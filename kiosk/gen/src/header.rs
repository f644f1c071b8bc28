//! Sample banner and metadata header.
//!
//! Each generated sample opens with a banner naming the sample, and carries
//! a right-aligned metadata block inside its outer region:
//!
//! ```text
//! //      calling form: "Callable"
//! //        region tag: "sample"
//! //         className: "GetKioskCallableCallableGetKioskMethodSample"
//! //          valueSet: "get_kiosk_method_sample" ("Get Kiosk Method Sample")
//! //       description: "Get Kiosk Method Sample"
//! //        [id=1024]
//! //      apiMethod "get_kiosk_callable" of type "CallableMethod"
//! ```
//!
//! [`parse_header`] reads both back into a [`SampleDescriptor`].

use std::str::FromStr;

use kiosk_define::{ApiMethodType, CallingForm, SampleDescriptor};
use thiserror::Error;

/// First banner line of every generated sample.
pub const BANNER: &str = "// This code was automatically generated by kiosk-gen. Do not edit manually.";

const SAMPLE_NAME_PREFIX: &str = "// Sample name: ";

/// Width the metadata keys are right-aligned to.
const KEY_WIDTH: usize = 18;

/// Errors found while parsing a sample's banner or metadata header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("sample name banner not found")]
    MissingSampleName,

    #[error("metadata field '{0}' not found")]
    MissingField(&'static str),

    #[error("malformed metadata on line {line}: {content}")]
    Malformed { line: usize, content: String },

    #[error("invalid value '{value}' for metadata field '{field}'")]
    InvalidValue { field: &'static str, value: String },
}

fn key_line(key: &str, value: &str) -> String {
    format!("//{:>width$}: {}", key, value, width = KEY_WIDTH)
}

/// Renders the two banner lines that open a sample file.
pub fn render_banner(sample: &SampleDescriptor) -> Vec<String> {
    vec![
        BANNER.to_string(),
        format!("{}\"{}\"", SAMPLE_NAME_PREFIX, sample.sample_name),
    ]
}

/// Renders the metadata header lines for a sample.
///
/// ## Examples
///
/// ```
/// use kiosk_define::{CallingForm, SampleDescriptor};
/// use kiosk_gen::header::render_header;
///
/// let sample = SampleDescriptor::for_method("list_signs", CallingForm::Request, "list_signs_method_sample", None);
/// let lines = render_header(&sample);
///
/// assert_eq!(lines[0], "//      calling form: \"Request\"");
/// assert_eq!(lines[5], "//        []");
/// assert_eq!(lines[6], "//      apiMethod \"list_signs\" of type \"RequestObjectMethod\"");
/// ```
pub fn render_header(sample: &SampleDescriptor) -> Vec<String> {
    let method_id = match sample.method_id {
        Some(id) => format!("[id={}]", id),
        None => "[]".to_string(),
    };

    vec![
        key_line("calling form", &format!("\"{}\"", sample.calling_form)),
        key_line("region tag", &format!("\"{}\"", sample.region_tag)),
        key_line("className", &format!("\"{}\"", sample.class_name)),
        key_line(
            "valueSet",
            &format!(
                "\"{}\" (\"{}\")",
                sample.value_set_id, sample.value_set_name
            ),
        ),
        key_line("description", &format!("\"{}\"", sample.description)),
        format!("//        {}", method_id),
        format!(
            "//      apiMethod \"{}\" of type \"{}\"",
            sample.api_method_name, sample.api_method_type
        ),
    ]
}

/// Strips one pair of surrounding double quotes.
fn unquote(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}

#[derive(Default)]
struct Fields {
    sample_name: Option<String>,
    calling_form: Option<CallingForm>,
    region_tag: Option<String>,
    class_name: Option<String>,
    value_set: Option<(String, String)>,
    description: Option<String>,
    method_id: Option<Option<i64>>,
    api_method: Option<(String, ApiMethodType)>,
}

/// Parses the banner and metadata header of a sample file.
///
/// ## Errors
///
/// Returns an error if the sample name or any metadata field is missing,
/// or if a field holds a value that cannot be parsed.
pub fn parse_header(source: &str) -> Result<SampleDescriptor, HeaderError> {
    let mut fields = Fields::default();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let malformed = || HeaderError::Malformed {
            line: line_no,
            content: line.to_string(),
        };

        if let Some(rest) = line.strip_prefix(SAMPLE_NAME_PREFIX) {
            if fields.sample_name.is_none() {
                fields.sample_name = Some(unquote(rest.trim()).ok_or_else(malformed)?.to_string());
            }
            continue;
        }

        let Some(comment) = line.strip_prefix("//") else {
            continue;
        };
        let comment = comment.trim_start();

        if let Some(value) = comment.strip_prefix("calling form: ") {
            let raw = unquote(value).ok_or_else(malformed)?;
            let form = CallingForm::from_str(raw).map_err(|_| HeaderError::InvalidValue {
                field: "calling form",
                value: raw.to_string(),
            })?;
            fields.calling_form.get_or_insert(form);
        } else if let Some(value) = comment.strip_prefix("region tag: ") {
            let tag = unquote(value).ok_or_else(malformed)?;
            fields.region_tag.get_or_insert_with(|| tag.to_string());
        } else if let Some(value) = comment.strip_prefix("className: ") {
            let name = unquote(value).ok_or_else(malformed)?;
            fields.class_name.get_or_insert_with(|| name.to_string());
        } else if let Some(value) = comment.strip_prefix("valueSet: ") {
            let (id, name) = value.split_once(' ').ok_or_else(malformed)?;
            let id = unquote(id).ok_or_else(malformed)?;
            let name = name
                .strip_prefix('(')
                .and_then(|n| n.strip_suffix(')'))
                .and_then(unquote)
                .ok_or_else(malformed)?;
            fields
                .value_set
                .get_or_insert_with(|| (id.to_string(), name.to_string()));
        } else if let Some(value) = comment.strip_prefix("description: ") {
            let description = unquote(value).ok_or_else(malformed)?;
            fields
                .description
                .get_or_insert_with(|| description.to_string());
        } else if let Some(value) = comment.strip_prefix("apiMethod ") {
            let (name, method_type) = value.split_once(" of type ").ok_or_else(malformed)?;
            let name = unquote(name).ok_or_else(malformed)?;
            let raw_type = unquote(method_type).ok_or_else(malformed)?;
            let method_type =
                ApiMethodType::from_str(raw_type).map_err(|_| HeaderError::InvalidValue {
                    field: "apiMethod",
                    value: raw_type.to_string(),
                })?;
            fields
                .api_method
                .get_or_insert_with(|| (name.to_string(), method_type));
        } else if comment == "[]" {
            fields.method_id.get_or_insert(None);
        } else if let Some(value) = comment.strip_prefix("[id=").and_then(|v| v.strip_suffix(']')) {
            let id = value.parse::<i64>().map_err(|_| HeaderError::InvalidValue {
                field: "id",
                value: value.to_string(),
            })?;
            fields.method_id.get_or_insert(Some(id));
        }
    }

    let (value_set_id, value_set_name) = fields
        .value_set
        .ok_or(HeaderError::MissingField("valueSet"))?;
    let (api_method_name, api_method_type) = fields
        .api_method
        .ok_or(HeaderError::MissingField("apiMethod"))?;

    Ok(SampleDescriptor {
        sample_name: fields.sample_name.ok_or(HeaderError::MissingSampleName)?,
        calling_form: fields
            .calling_form
            .ok_or(HeaderError::MissingField("calling form"))?,
        region_tag: fields
            .region_tag
            .ok_or(HeaderError::MissingField("region tag"))?,
        class_name: fields
            .class_name
            .ok_or(HeaderError::MissingField("className"))?,
        value_set_id,
        value_set_name,
        description: fields
            .description
            .ok_or(HeaderError::MissingField("description"))?,
        method_id: fields.method_id.ok_or(HeaderError::MissingField("id"))?,
        api_method_name,
        api_method_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callable_sample() -> SampleDescriptor {
        SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Callable,
            "get_kiosk_method_sample",
            Some(1024),
        )
    }

    fn render_all(sample: &SampleDescriptor) -> String {
        let mut lines = render_banner(sample);
        lines.push(String::new());
        lines.extend(render_header(sample));
        lines.join("\n")
    }

    #[test]
    fn header_keys_are_right_aligned() {
        let lines = render_header(&callable_sample());
        assert_eq!(
            lines,
            vec![
                "//      calling form: \"Callable\"",
                "//        region tag: \"sample\"",
                "//         className: \"GetKioskCallableCallableGetKioskMethodSample\"",
                "//          valueSet: \"get_kiosk_method_sample\" (\"Get Kiosk Method Sample\")",
                "//       description: \"Get Kiosk Method Sample\"",
                "//        [id=1024]",
                "//      apiMethod \"get_kiosk_callable\" of type \"CallableMethod\"",
            ]
        );
    }

    #[test]
    fn banner_names_the_sample() {
        let banner = render_banner(&callable_sample());
        assert_eq!(banner[0], BANNER);
        assert_eq!(
            banner[1],
            "// Sample name: \"GetKioskCallableCallableGetKioskMethodSample\""
        );
    }

    #[test]
    fn header_parses_back_to_descriptor() {
        let sample = callable_sample();
        assert_eq!(parse_header(&render_all(&sample)).unwrap(), sample);
    }

    #[test]
    fn empty_value_set_parses_back() {
        let sample = SampleDescriptor::for_method(
            "list_signs",
            CallingForm::Request,
            "list_signs_method_sample",
            None,
        );
        let parsed = parse_header(&render_all(&sample)).unwrap();
        assert_eq!(parsed.method_id, None);
        assert_eq!(parsed, sample);
    }

    #[test]
    fn missing_banner_is_reported() {
        let source = render_header(&callable_sample()).join("\n");
        assert_eq!(parse_header(&source), Err(HeaderError::MissingSampleName));
    }

    #[test]
    fn missing_field_is_reported() {
        let source = render_all(&callable_sample()).replace("className", "klassName");
        assert_eq!(
            parse_header(&source),
            Err(HeaderError::MissingField("className"))
        );
    }

    #[test]
    fn unknown_calling_form_is_rejected() {
        let source = render_all(&callable_sample()).replace("\"Callable\"", "\"Streaming\"");
        assert!(matches!(
            parse_header(&source),
            Err(HeaderError::InvalidValue {
                field: "calling form",
                ..
            })
        ));
    }

    #[test]
    fn unquoted_value_is_malformed() {
        let source = render_all(&callable_sample()).replace("\"sample\"", "sample");
        assert!(matches!(
            parse_header(&source),
            Err(HeaderError::Malformed { line: 5, .. })
        ));
    }
}
