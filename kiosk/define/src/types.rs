//! Core types for service definitions.
//!
//! This module provides the fundamental types for describing an RPC service:
//!
//! - [`ServiceApi`] - The top-level service definition
//! - [`ApiMethod`] - Individual unary RPC definitions
//! - [`RestMethod`] - HTTP method enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::naming::to_snake_case;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// HTTP methods used by the JSON mapping of an RPC.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use kiosk_define::RestMethod;
///
/// let method = RestMethod::from_str("GET").unwrap();
/// assert_eq!(method, RestMethod::Get);
/// ```
///
/// Display as uppercase:
///
/// ```
/// use kiosk_define::RestMethod;
///
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a resource or perform an action
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
}

/// A complete service definition.
///
/// Captures everything the generator needs to emit samples for a service:
/// its name (used for the client type, e.g. `Display` -> `DisplayClient`)
/// and the unary methods it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceApi {
    /// Service name, e.g. "Display".
    pub name: String,
    /// Proto-style package the service belongs to, e.g. "kiosk.v1".
    pub package: String,
    /// Human-readable description of the service.
    pub description: String,
    /// Link to service documentation (optional).
    pub docs_url: Option<String>,
    /// All unary methods of the service.
    pub methods: Vec<ApiMethod>,
}

impl ServiceApi {
    /// Name of the generated client type for this service.
    ///
    /// ```
    /// use kiosk_define::ServiceApi;
    ///
    /// let api = ServiceApi {
    ///     name: "Display".to_string(),
    ///     package: "kiosk.v1".to_string(),
    ///     description: String::new(),
    ///     docs_url: None,
    ///     methods: vec![],
    /// };
    /// assert_eq!(api.client_name(), "DisplayClient");
    /// ```
    pub fn client_name(&self) -> String {
        format!("{}Client", self.name)
    }

    /// Finds a method by its snake_case Rust name (`get_kiosk`).
    ///
    /// The `_callable` accessor name of a method resolves to the same method.
    pub fn find_method(&self, rust_name: &str) -> Option<&ApiMethod> {
        let base = rust_name.strip_suffix("_callable").unwrap_or(rust_name);
        self.methods.iter().find(|m| m.rust_name() == base)
    }
}

/// A single unary RPC definition.
///
/// ## Path Parameters
///
/// Paths support template parameters using curly braces: `/v1/kiosks/{id}`.
/// Each parameter names a field of the request message.
///
/// ## Examples
///
/// ```
/// use kiosk_define::{ApiMethod, ApiRequest, ApiResponse, FieldKind, RequestField, RestMethod};
///
/// let method = ApiMethod {
///     id: "GetKiosk".to_string(),
///     method: RestMethod::Get,
///     path: "/v1/kiosks/{id}".to_string(),
///     description: "Get a kiosk".to_string(),
///     request: ApiRequest::message("GetKioskRequest", vec![RequestField::path("id", FieldKind::Int32)]),
///     response: ApiResponse::message("Kiosk"),
/// };
///
/// assert_eq!(method.rust_name(), "get_kiosk");
/// assert_eq!(method.callable_name(), "get_kiosk_callable");
/// assert_eq!(method.path_params(), vec!["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMethod {
    /// PascalCase RPC name (e.g., "GetKiosk").
    pub id: String,
    /// HTTP method of the JSON mapping.
    pub method: RestMethod,
    /// URL path template (may contain `{field}` placeholders).
    pub path: String,
    /// Human-readable description.
    pub description: String,
    /// Request message shape.
    pub request: ApiRequest,
    /// Response shape.
    pub response: ApiResponse,
}

impl ApiMethod {
    /// The snake_case method name on the generated client.
    pub fn rust_name(&self) -> String {
        to_snake_case(&self.id)
    }

    /// The name of the callable accessor on the generated client.
    pub fn callable_name(&self) -> String {
        format!("{}_callable", self.rust_name())
    }

    /// Extracts path parameter names in the order they appear.
    pub fn path_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut start = None;

        for (idx, c) in self.path.char_indices() {
            match c {
                '{' => start = Some(idx + 1),
                '}' => {
                    if let Some(begin) = start.take()
                        && idx > begin
                    {
                        params.push(&self.path[begin..idx]);
                    }
                }
                _ => {}
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{FieldKind, RequestField};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn set_sign_method() -> ApiMethod {
        ApiMethod {
            id: "SetSignIdForKioskIds".to_string(),
            method: RestMethod::Post,
            path: "/v1/signs/{sign_id}".to_string(),
            description: "Set a sign for display on one or more kiosks".to_string(),
            request: ApiRequest::message(
                "SetSignIdForKioskIdsRequest",
                vec![
                    RequestField::path("sign_id", FieldKind::Int32),
                    RequestField::body("kiosk_ids", FieldKind::Int32List),
                ],
            ),
            response: ApiResponse::Empty,
        }
    }

    #[test]
    fn rest_method_roundtrips_through_strings() {
        for method in RestMethod::iter() {
            let s = method.to_string();
            assert_eq!(RestMethod::from_str(&s).unwrap(), method);
        }
    }

    #[test]
    fn rest_method_serde_uses_uppercase() {
        let serialized = serde_json::to_string(&RestMethod::Delete).unwrap();
        assert_eq!(serialized, "\"DELETE\"");
    }

    #[test]
    fn method_names_follow_snake_case() {
        let method = set_sign_method();
        assert_eq!(method.rust_name(), "set_sign_id_for_kiosk_ids");
        assert_eq!(method.callable_name(), "set_sign_id_for_kiosk_ids_callable");
    }

    #[test]
    fn path_params_are_extracted_in_order() {
        let mut method = set_sign_method();
        assert_eq!(method.path_params(), vec!["sign_id"]);

        method.path = "/v1/kiosks/{kiosk_id}/signs/{sign_id}".to_string();
        assert_eq!(method.path_params(), vec!["kiosk_id", "sign_id"]);

        method.path = "/v1/signs/{}".to_string();
        assert!(method.path_params().is_empty());
    }

    #[test]
    fn find_method_resolves_callable_names() {
        let api = ServiceApi {
            name: "Display".to_string(),
            package: "kiosk.v1".to_string(),
            description: "Display".to_string(),
            docs_url: None,
            methods: vec![set_sign_method()],
        };

        assert!(api.find_method("set_sign_id_for_kiosk_ids").is_some());
        assert!(api.find_method("set_sign_id_for_kiosk_ids_callable").is_some());
        assert!(api.find_method("get_kiosk").is_none());
    }
}
