// This code was automatically generated by kiosk-gen. Do not edit manually.

//! Generated samples for the Display service.
use std::io::Write;
use kiosk_client::DisplayClient;
use crate::SampleError;
pub mod get_kiosk_request;
pub mod get_kiosk_callable;
pub mod list_signs_request;
pub mod list_signs_callable;
/// Module and sample name of every generated sample.
pub const SAMPLES: &[(&str, &str)] = &[
    ("get_kiosk_request", "GetKioskRequestGetKioskMethodSample"),
    ("get_kiosk_callable", "GetKioskCallableCallableGetKioskMethodSample"),
    ("list_signs_request", "ListSignsRequestListSignsMethodSample"),
    ("list_signs_callable", "ListSignsCallableCallableListSignsMethodSample"),
];
/// Runs the sample registered under `name` (module or sample name).
pub async fn run(
    name: &str,
    client: &DisplayClient,
    out: &mut dyn Write,
) -> Result<(), SampleError> {
    match name {
        "get_kiosk_request" | "GetKioskRequestGetKioskMethodSample" => {
            get_kiosk_request::run(client, out).await
        }
        "get_kiosk_callable" | "GetKioskCallableCallableGetKioskMethodSample" => {
            get_kiosk_callable::run(client, out).await
        }
        "list_signs_request" | "ListSignsRequestListSignsMethodSample" => {
            list_signs_request::run(client, out).await
        }
        "list_signs_callable" | "ListSignsCallableCallableListSignsMethodSample" => {
            list_signs_callable::run(client, out).await
        }
        other => Err(SampleError::UnknownSample(other.to_string())),
    }
}
