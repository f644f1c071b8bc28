//! Sample descriptors.
//!
//! A [`SampleDescriptor`] is the metadata record behind one generated sample
//! file: which client method it calls, in which calling form, and the
//! identifiers documentation tooling uses to find it. Descriptors are
//! construct-once values; they are never mutated after validation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::naming::{to_pascal_case, to_title_case};

/// How a sample invokes its method.
///
/// ```
/// use std::str::FromStr;
/// use kiosk_define::CallingForm;
///
/// assert_eq!(CallingForm::from_str("Callable").unwrap(), CallingForm::Callable);
/// assert_eq!(CallingForm::Request.to_string(), "Request");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum CallingForm {
    /// Awaits the response directly at the call site.
    Request,
    /// Dispatches through a callable and resolves the returned future later.
    Callable,
}

impl CallingForm {
    /// The client surface matching this calling form.
    pub fn method_type(self) -> ApiMethodType {
        match self {
            Self::Request => ApiMethodType::RequestObjectMethod,
            Self::Callable => ApiMethodType::CallableMethod,
        }
    }
}

/// The kind of client method a sample calls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum ApiMethodType {
    /// `client.get_kiosk(request)` style method taking a request object.
    RequestObjectMethod,
    /// `client.get_kiosk_callable()` accessor returning a callable.
    CallableMethod,
}

/// Inconsistencies inside a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Calling form and method type disagree.
    #[error("sample '{sample}': calling form {form} cannot use a method of type {method_type}")]
    FormMismatch {
        sample: String,
        form: CallingForm,
        method_type: ApiMethodType,
    },

    /// Callable samples must call a `*_callable` accessor and request samples must not.
    #[error("sample '{sample}': method '{method}' does not match calling form {form}")]
    MethodNameMismatch {
        sample: String,
        method: String,
        form: CallingForm,
    },

    /// Class name does not follow `{Method}{Form}{ValueSet}`.
    #[error("sample '{sample}': class name '{actual}' should be '{expected}'")]
    ClassNameMismatch {
        sample: String,
        expected: String,
        actual: String,
    },

    /// Region tag is empty or not a lowercase identifier.
    #[error("sample '{sample}': invalid region tag '{tag}'")]
    InvalidRegionTag { sample: String, tag: String },

    /// Value set id is not a lowercase identifier.
    #[error("sample '{sample}': invalid value set id '{id}'")]
    InvalidValueSetId { sample: String, id: String },

    /// A required text field is empty.
    #[error("sample descriptor is missing '{field}'")]
    MissingField { field: &'static str },
}

/// The identity and generation parameters of one sample.
///
/// ## Examples
///
/// ```
/// use kiosk_define::{ApiMethodType, CallingForm, SampleDescriptor};
///
/// let sample = SampleDescriptor::for_method("get_kiosk", CallingForm::Callable, "get_kiosk_method_sample", Some(1024));
///
/// assert_eq!(sample.class_name, "GetKioskCallableCallableGetKioskMethodSample");
/// assert_eq!(sample.api_method_name, "get_kiosk_callable");
/// assert_eq!(sample.api_method_type, ApiMethodType::CallableMethod);
/// assert_eq!(sample.value_set_name, "Get Kiosk Method Sample");
/// assert_eq!(sample.module_name(), "get_kiosk_callable");
/// assert!(sample.check().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDescriptor {
    /// Unique sample name, also used in the generated-file banner.
    pub sample_name: String,
    /// Invocation style of the sample.
    pub calling_form: CallingForm,
    /// Base region tag; the core region is `{region_tag}_core`.
    pub region_tag: String,
    /// Class-style identifier of the sample.
    pub class_name: String,
    /// Value set identifier (snake_case).
    pub value_set_id: String,
    /// Value set display name.
    pub value_set_name: String,
    /// One-line description, used as the entry point's doc comment.
    pub description: String,
    /// Value bound to the request's `id` field, rendered `[id=N]`.
    pub method_id: Option<i64>,
    /// Client method the sample calls (`get_kiosk` or `get_kiosk_callable`).
    pub api_method_name: String,
    /// Kind of client method.
    pub api_method_type: ApiMethodType,
}

/// Default region tag used by generated samples.
pub const DEFAULT_REGION_TAG: &str = "sample";

impl SampleDescriptor {
    /// Builds a descriptor following the naming conventions.
    ///
    /// `method` is the base snake_case method name (`list_signs`); the
    /// callable accessor name is derived for [`CallingForm::Callable`].
    pub fn for_method(
        method: &str,
        calling_form: CallingForm,
        value_set_id: &str,
        method_id: Option<i64>,
    ) -> Self {
        let api_method_name = match calling_form {
            CallingForm::Request => method.to_string(),
            CallingForm::Callable => format!("{}_callable", method),
        };
        let class_name = expected_class_name(&api_method_name, calling_form, value_set_id);
        let value_set_name = to_title_case(value_set_id);

        Self {
            sample_name: class_name.clone(),
            calling_form,
            region_tag: DEFAULT_REGION_TAG.to_string(),
            class_name,
            value_set_id: value_set_id.to_string(),
            description: value_set_name.clone(),
            value_set_name,
            method_id,
            api_method_name,
            api_method_type: calling_form.method_type(),
        }
    }

    /// The region tag of the core snippet.
    pub fn core_region_tag(&self) -> String {
        format!("{}_core", self.region_tag)
    }

    /// The base method name without any `_callable` suffix.
    pub fn base_method_name(&self) -> &str {
        self.api_method_name
            .strip_suffix("_callable")
            .unwrap_or(&self.api_method_name)
    }

    /// Module (and file stem) of the generated sample, e.g. `list_signs_request`.
    pub fn module_name(&self) -> String {
        format!(
            "{}_{}",
            self.base_method_name(),
            self.calling_form.to_string().to_lowercase()
        )
    }

    /// Checks the descriptor's internal consistency.
    ///
    /// ## Errors
    ///
    /// Returns the first [`DescriptorError`] found.
    pub fn check(&self) -> Result<(), DescriptorError> {
        for (field, value) in [
            ("sample_name", &self.sample_name),
            ("class_name", &self.class_name),
            ("value_set_id", &self.value_set_id),
            ("api_method_name", &self.api_method_name),
        ] {
            if value.is_empty() {
                return Err(DescriptorError::MissingField { field });
            }
        }

        if !is_lowercase_ident(&self.region_tag) {
            return Err(DescriptorError::InvalidRegionTag {
                sample: self.sample_name.clone(),
                tag: self.region_tag.clone(),
            });
        }

        if !is_lowercase_ident(&self.value_set_id) {
            return Err(DescriptorError::InvalidValueSetId {
                sample: self.sample_name.clone(),
                id: self.value_set_id.clone(),
            });
        }

        if self.calling_form.method_type() != self.api_method_type {
            return Err(DescriptorError::FormMismatch {
                sample: self.sample_name.clone(),
                form: self.calling_form,
                method_type: self.api_method_type,
            });
        }

        let is_callable_name = self.api_method_name.ends_with("_callable");
        if is_callable_name != (self.calling_form == CallingForm::Callable) {
            return Err(DescriptorError::MethodNameMismatch {
                sample: self.sample_name.clone(),
                method: self.api_method_name.clone(),
                form: self.calling_form,
            });
        }

        let expected =
            expected_class_name(&self.api_method_name, self.calling_form, &self.value_set_id);
        if self.class_name != expected {
            return Err(DescriptorError::ClassNameMismatch {
                sample: self.sample_name.clone(),
                expected,
                actual: self.class_name.clone(),
            });
        }

        Ok(())
    }
}

fn is_lowercase_ident(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `{Pascal(api_method_name)}{calling_form}{Pascal(value_set_id)}`.
pub fn expected_class_name(api_method_name: &str, form: CallingForm, value_set_id: &str) -> String {
    format!(
        "{}{}{}",
        to_pascal_case(api_method_name),
        form,
        to_pascal_case(value_set_id)
    )
}
