//! Request construction statements.
//!
//! A sample builds its request with public construction operations only:
//! `Empty::default()` for the empty message, and the message builder for
//! everything else. Values from the descriptor's value set are bound to
//! local variables first so the snippet reads like user code:
//!
//! ```text
//! let id = 1024;
//! let request = GetKioskRequest::builder().id(id).build();
//! ```

use kiosk_define::{ApiMethod, ApiRequest, FieldKind, SampleDescriptor};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use crate::errors::GeneratorError;

/// A request field bound to a literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBinding {
    /// Field (and local variable) name.
    pub field: String,
    pub value: i32,
}

fn values_error(sample: &SampleDescriptor, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::RequestValues {
        sample: sample.sample_name.clone(),
        reason: reason.into(),
    }
}

/// Resolves the descriptor's value set against the method's request message.
///
/// The descriptor's `method_id` binds the `id` field. Every path field must
/// end up with a value, since the request cannot be routed without it.
///
/// ## Errors
///
/// Returns `GeneratorError::RequestValues` if a value has no matching
/// field, does not fit the field, or a path field is left unbound.
pub fn request_bindings(
    method: &ApiMethod,
    sample: &SampleDescriptor,
) -> Result<Vec<RequestBinding>, GeneratorError> {
    let mut bindings = Vec::new();

    if let Some(id) = sample.method_id {
        let field = method.request.field("id").ok_or_else(|| {
            values_error(
                sample,
                format!("{} has no `id` field", method.request.type_name()),
            )
        })?;
        if field.kind != FieldKind::Int32 {
            return Err(values_error(sample, "`id` is not an integer field"));
        }
        let value = i32::try_from(id)
            .map_err(|_| values_error(sample, format!("id {} does not fit in i32", id)))?;
        bindings.push(RequestBinding {
            field: field.name.clone(),
            value,
        });
    }

    if let ApiRequest::Message { fields, .. } = &method.request {
        for field in fields.iter().filter(|f| f.in_path) {
            if !bindings.iter().any(|b| b.field == field.name) {
                return Err(values_error(
                    sample,
                    format!("path field `{}` has no value", field.name),
                ));
            }
        }
    }

    Ok(bindings)
}

/// Generates the statements that build `request`.
pub fn generate_request(
    method: &ApiMethod,
    sample: &SampleDescriptor,
) -> Result<TokenStream, GeneratorError> {
    let bindings = request_bindings(method, sample)?;

    let tokens = match &method.request {
        ApiRequest::Empty => quote! {
            let request = Empty::default();
        },
        ApiRequest::Message { schema, .. } => {
            let ty = format_ident!("{}", schema.type_name);
            let names: Vec<_> = bindings
                .iter()
                .map(|b| format_ident!("{}", b.field))
                .collect();
            let values = bindings.iter().map(|b| Literal::i32_unsuffixed(b.value));

            quote! {
                #(let #names = #values;)*
                let request = #ty::builder()#(.#names(#names))*.build();
            }
        }
    };

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_define::CallingForm;
    use kiosk_definitions::define_display_api;

    fn method(name: &str) -> ApiMethod {
        define_display_api()
            .find_method(name)
            .cloned()
            .expect("method exists")
    }

    #[test]
    fn id_is_bound_to_a_local() {
        let sample = SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Request,
            "get_kiosk_method_sample",
            Some(1024),
        );
        let tokens = generate_request(&method("get_kiosk"), &sample)
            .unwrap()
            .to_string()
            .replace(' ', "");

        assert!(tokens.contains("letid=1024;"));
        assert!(tokens.contains("GetKioskRequest::builder().id(id).build()"));
    }

    #[test]
    fn empty_request_uses_default() {
        let sample = SampleDescriptor::for_method(
            "list_signs",
            CallingForm::Request,
            "list_signs_method_sample",
            None,
        );
        let tokens = generate_request(&method("list_signs"), &sample)
            .unwrap()
            .to_string()
            .replace(' ', "");

        assert_eq!(tokens, "letrequest=Empty::default();");
    }

    #[test]
    fn id_without_field_is_rejected() {
        let sample = SampleDescriptor::for_method(
            "list_signs",
            CallingForm::Request,
            "list_signs_method_sample",
            Some(7),
        );
        let err = request_bindings(&method("list_signs"), &sample).unwrap_err();
        assert!(matches!(err, GeneratorError::RequestValues { .. }));
    }

    #[test]
    fn unbound_path_field_is_rejected() {
        let sample = SampleDescriptor::for_method(
            "get_sign",
            CallingForm::Request,
            "get_sign_method_sample",
            None,
        );
        let err = request_bindings(&method("get_sign"), &sample).unwrap_err();
        assert!(err.to_string().contains("path field `id`"));
    }

    #[test]
    fn oversized_id_is_rejected() {
        let sample = SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Request,
            "get_kiosk_method_sample",
            Some(i64::from(i32::MAX) + 1),
        );
        assert!(request_bindings(&method("get_kiosk"), &sample).is_err());
    }
}
