//! Pre-generation validation of sample descriptors.
//!
//! Validation runs before anything is rendered so a bad descriptor fails
//! with a precise error instead of producing a broken file.
//!
//! ## Validation Checks
//!
//! - **Descriptor consistency**: calling form vs. method type, `_callable`
//!   method names, class name, region tag
//! - **Method resolution**: the descriptor's method exists on the service
//! - **Request values**: the value set fits the method's request message
//! - **Header safety**: free-text fields survive the metadata header
//! - **Uniqueness**: sample names and output modules are unique
//!
//! ## Examples
//!
//! ```
//! use kiosk_definitions::{define_display_api, display_samples};
//! use kiosk_gen::validation::validate_samples;
//!
//! assert!(validate_samples(&define_display_api(), &display_samples()).is_ok());
//! ```

use std::collections::HashSet;

use kiosk_define::{SampleDescriptor, ServiceApi};
use tracing::debug;

use crate::codegen::request_bindings;
use crate::errors::GeneratorError;

/// Validates one descriptor against the service.
///
/// ## Errors
///
/// Returns the first problem found, see the module docs for the checks.
pub fn validate_sample(api: &ServiceApi, sample: &SampleDescriptor) -> Result<(), GeneratorError> {
    sample.check()?;

    let method =
        api.find_method(&sample.api_method_name)
            .ok_or_else(|| GeneratorError::UnknownMethod {
                sample: sample.sample_name.clone(),
                method: sample.api_method_name.clone(),
            })?;

    request_bindings(method, sample)?;

    for (field, value) in [
        ("description", &sample.description),
        ("value_set_name", &sample.value_set_name),
    ] {
        if value.contains('"') || value.contains('\n') {
            return Err(GeneratorError::ConfigError(format!(
                "sample '{}': {} must not contain quotes or line breaks",
                sample.sample_name, field
            )));
        }
    }

    Ok(())
}

/// Validates a full sample set.
///
/// ## Errors
///
/// Returns `GeneratorError::DuplicateSample` if two descriptors share a
/// sample name or would be written to the same module, or the first
/// per-descriptor error from [`validate_sample`].
pub fn validate_samples(
    api: &ServiceApi,
    samples: &[SampleDescriptor],
) -> Result<(), GeneratorError> {
    let mut names = HashSet::new();
    let mut modules = HashSet::new();

    for sample in samples {
        validate_sample(api, sample)?;

        if !names.insert(sample.sample_name.as_str()) {
            return Err(GeneratorError::DuplicateSample(sample.sample_name.clone()));
        }
        if !modules.insert(sample.module_name()) {
            return Err(GeneratorError::DuplicateSample(sample.module_name()));
        }
    }

    debug!(count = samples.len(), api = %api.name, "validated samples");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_define::{ApiMethodType, CallingForm, DescriptorError};
    use kiosk_definitions::{define_display_api, display_samples};

    fn get_kiosk_sample() -> SampleDescriptor {
        SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Callable,
            "get_kiosk_method_sample",
            Some(1024),
        )
    }

    #[test]
    fn display_samples_are_valid() {
        assert!(validate_samples(&define_display_api(), &display_samples()).is_ok());
    }

    #[test]
    fn form_mismatch_is_rejected() {
        let mut sample = get_kiosk_sample();
        sample.api_method_type = ApiMethodType::RequestObjectMethod;

        let err = validate_sample(&define_display_api(), &sample).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidDescriptor(DescriptorError::FormMismatch { .. })
        ));
    }

    #[test]
    fn class_name_mismatch_is_rejected() {
        let mut sample = get_kiosk_sample();
        sample.class_name = "GetKioskSample".to_string();

        let err = validate_sample(&define_display_api(), &sample).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidDescriptor(DescriptorError::ClassNameMismatch { .. })
        ));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let sample = SampleDescriptor::for_method(
            "get_billboard",
            CallingForm::Request,
            "get_billboard_method_sample",
            None,
        );

        let err = validate_sample(&define_display_api(), &sample).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownMethod { .. }));
    }

    #[test]
    fn duplicate_sample_name_is_rejected() {
        let samples = vec![get_kiosk_sample(), get_kiosk_sample()];

        let err = validate_samples(&define_display_api(), &samples).unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateSample(name) if name == "GetKioskCallableCallableGetKioskMethodSample"));
    }

    #[test]
    fn duplicate_module_is_rejected() {
        let first = get_kiosk_sample();
        let mut second = SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Callable,
            "lobby_kiosk",
            Some(1),
        );
        second.sample_name = "Other".to_string();
        assert_eq!(first.module_name(), second.module_name());

        let err = validate_samples(&define_display_api(), &[first, second]).unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateSample(name) if name == "get_kiosk_callable"));
    }

    #[test]
    fn quoted_description_is_rejected() {
        let mut sample = get_kiosk_sample();
        sample.description = "The \"lobby\" kiosk".to_string();

        let err = validate_sample(&define_display_api(), &sample).unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }
}
