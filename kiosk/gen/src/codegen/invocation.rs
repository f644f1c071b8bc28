//! Call statements for both calling forms, and result consumption.
//!
//! | form | dispatch | resolve |
//! |------|----------|---------|
//! | Request | `let response = client.get_kiosk(request).await?;` | - |
//! | Callable | `let future = client.get_kiosk_callable().future_call(request);` | `let response = future.await?;` |
//!
//! Samples never handle errors themselves; `?` hands them to the caller.

use kiosk_define::naming::to_snake_case;
use kiosk_define::{ApiMethod, ApiResponse, CallingForm, SampleDescriptor};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// The call of a sample, split where the callable form leaves its gap.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Statements that start the call.
    pub dispatch: TokenStream,
    /// Statements that resolve a dispatched future (callable form only).
    pub resolve: Option<TokenStream>,
}

/// Generates the call statements for `sample`.
pub fn generate_invocation(method: &ApiMethod, sample: &SampleDescriptor) -> Invocation {
    let returns_value = !matches!(method.response, ApiResponse::Empty);

    match sample.calling_form {
        CallingForm::Request => {
            let name = format_ident!("{}", method.rust_name());
            let dispatch = if returns_value {
                quote! { let response = client.#name(request).await?; }
            } else {
                quote! { client.#name(request).await?; }
            };
            Invocation {
                dispatch,
                resolve: None,
            }
        }
        CallingForm::Callable => {
            let callable = format_ident!("{}", method.callable_name());
            let resolve = if returns_value {
                quote! { let response = future.await?; }
            } else {
                quote! { future.await?; }
            };
            Invocation {
                dispatch: quote! {
                    let future = client.#callable().future_call(request);
                },
                resolve: Some(resolve),
            }
        }
    }
}

/// Generates the statements that write the response to `out`.
///
/// A single message is written as one `Response: ...` line. A list response
/// writes one line per element in the order the server returned them.
pub fn generate_consume(method: &ApiMethod) -> TokenStream {
    match &method.response {
        ApiResponse::Message(_) => quote! {
            writeln!(out, "Response: {}", response)?;
        },
        ApiResponse::List { field, element, .. } => {
            let field = format_ident!("{}", field);
            let item = format_ident!("{}", to_snake_case(&element.type_name));
            let line = format!("{}: {{}}", element.type_name);
            quote! {
                for #item in response.#field {
                    writeln!(out, #line, #item)?;
                }
            }
        }
        ApiResponse::Empty => TokenStream::new(),
    }
}
