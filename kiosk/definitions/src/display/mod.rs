//! Kiosk Display service definition.
//!
//! The Display service manages kiosks and the signs shown on them. This
//! module defines its unary methods with their JSON/HTTP mapping, the
//! message types, and the set of samples generated for it.

mod samples;
mod types;

pub use samples::display_samples;
pub use types::{
    DeleteKioskRequest, DeleteKioskRequestBuilder, DeleteSignRequest, DeleteSignRequestBuilder,
    Empty, GetKioskRequest, GetKioskRequestBuilder, GetSignIdForKioskIdRequest,
    GetSignIdForKioskIdRequestBuilder, GetSignIdResponse, GetSignRequest, GetSignRequestBuilder,
    Kiosk, KioskBuilder, LatLng, ListKiosksResponse, ListSignsResponse, ScreenSize,
    SetSignIdForKioskIdsRequest, SetSignIdForKioskIdsRequestBuilder, Sign, SignBuilder,
};

use kiosk_define::{
    ApiMethod, ApiRequest, ApiResponse, FieldKind, RequestField, RestMethod, ServiceApi,
};

/// Creates the Display service definition.
///
/// ## Methods
///
/// - `CreateKiosk` - POST /v1/kiosks
/// - `ListKiosks` - GET /v1/kiosks
/// - `GetKiosk` - GET /v1/kiosks/{id}
/// - `DeleteKiosk` - DELETE /v1/kiosks/{id}
/// - `CreateSign` - POST /v1/signs
/// - `ListSigns` - GET /v1/signs
/// - `GetSign` - GET /v1/signs/{id}
/// - `DeleteSign` - DELETE /v1/signs/{id}
/// - `SetSignIdForKioskIds` - POST /v1/signs/{sign_id}
/// - `GetSignIdForKioskId` - GET /v1/kiosks/{kiosk_id}/sign
///
/// ## Examples
///
/// ```rust
/// use kiosk_definitions::display::define_display_api;
///
/// let api = define_display_api();
/// assert_eq!(api.name, "Display");
/// assert_eq!(api.methods.len(), 10);
/// ```
pub fn define_display_api() -> ServiceApi {
    ServiceApi {
        name: "Display".to_string(),
        package: "kiosk.v1".to_string(),
        description: "Manages kiosks and the signs they display".to_string(),
        docs_url: Some("https://github.com/googleapis/kiosk".to_string()),
        methods: vec![
            ApiMethod {
                id: "CreateKiosk".to_string(),
                method: RestMethod::Post,
                path: "/v1/kiosks".to_string(),
                description: "Create a kiosk. This enrolls the kiosk for sign display".to_string(),
                request: ApiRequest::message(
                    "Kiosk",
                    vec![RequestField::body("name", FieldKind::String)],
                ),
                response: ApiResponse::message("Kiosk"),
            },
            ApiMethod {
                id: "ListKiosks".to_string(),
                method: RestMethod::Get,
                path: "/v1/kiosks".to_string(),
                description: "List active kiosks".to_string(),
                request: ApiRequest::Empty,
                response: ApiResponse::list("ListKiosksResponse", "kiosks", "Kiosk"),
            },
            ApiMethod {
                id: "GetKiosk".to_string(),
                method: RestMethod::Get,
                path: "/v1/kiosks/{id}".to_string(),
                description: "Get a kiosk".to_string(),
                request: ApiRequest::message(
                    "GetKioskRequest",
                    vec![RequestField::path("id", FieldKind::Int32)],
                ),
                response: ApiResponse::message("Kiosk"),
            },
            ApiMethod {
                id: "DeleteKiosk".to_string(),
                method: RestMethod::Delete,
                path: "/v1/kiosks/{id}".to_string(),
                description: "Delete a kiosk".to_string(),
                request: ApiRequest::message(
                    "DeleteKioskRequest",
                    vec![RequestField::path("id", FieldKind::Int32)],
                ),
                response: ApiResponse::Empty,
            },
            ApiMethod {
                id: "CreateSign".to_string(),
                method: RestMethod::Post,
                path: "/v1/signs".to_string(),
                description: "Create a sign. This enrolls the sign for sign display".to_string(),
                request: ApiRequest::message(
                    "Sign",
                    vec![
                        RequestField::body("name", FieldKind::String),
                        RequestField::body("text", FieldKind::String),
                    ],
                ),
                response: ApiResponse::message("Sign"),
            },
            ApiMethod {
                id: "ListSigns".to_string(),
                method: RestMethod::Get,
                path: "/v1/signs".to_string(),
                description: "List active signs".to_string(),
                request: ApiRequest::Empty,
                response: ApiResponse::list("ListSignsResponse", "signs", "Sign"),
            },
            ApiMethod {
                id: "GetSign".to_string(),
                method: RestMethod::Get,
                path: "/v1/signs/{id}".to_string(),
                description: "Get a sign".to_string(),
                request: ApiRequest::message(
                    "GetSignRequest",
                    vec![RequestField::path("id", FieldKind::Int32)],
                ),
                response: ApiResponse::message("Sign"),
            },
            ApiMethod {
                id: "DeleteSign".to_string(),
                method: RestMethod::Delete,
                path: "/v1/signs/{id}".to_string(),
                description: "Delete a sign".to_string(),
                request: ApiRequest::message(
                    "DeleteSignRequest",
                    vec![RequestField::path("id", FieldKind::Int32)],
                ),
                response: ApiResponse::Empty,
            },
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
            },
            ApiMethod {
                id: "GetSignIdForKioskId".to_string(),
                method: RestMethod::Get,
                path: "/v1/kiosks/{kiosk_id}/sign".to_string(),
                description: "Get the sign that should be displayed on a kiosk".to_string(),
                request: ApiRequest::message(
                    "GetSignIdForKioskIdRequest",
                    vec![RequestField::path("kiosk_id", FieldKind::Int32)],
                ),
                response: ApiResponse::message("GetSignIdResponse"),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_has_correct_metadata() {
        let api = define_display_api();

        assert_eq!(api.name, "Display");
        assert_eq!(api.client_name(), "DisplayClient");
        assert_eq!(api.package, "kiosk.v1");
        assert!(api.docs_url.is_some());
    }

    #[test]
    fn method_ids_are_unique() {
        let api = define_display_api();
        let mut ids: Vec<_> = api.methods.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), api.methods.len());
    }

    #[test]
    fn get_kiosk_binds_id_into_path() {
        let api = define_display_api();
        let method = api.find_method("get_kiosk").unwrap();

        assert_eq!(method.method, RestMethod::Get);
        assert_eq!(method.path_params(), vec!["id"]);
        assert!(method.request.field("id").is_some_and(|f| f.in_path));
        assert_eq!(method.response.type_name(), "Kiosk");
    }

    #[test]
    fn list_signs_takes_empty_and_returns_list() {
        let api = define_display_api();
        let method = api.find_method("list_signs_callable").unwrap();

        assert!(method.request.is_empty());
        assert!(method.response.is_list());
        assert_eq!(method.response.type_name(), "ListSignsResponse");
    }

    #[test]
    fn every_path_param_is_a_request_field() {
        let api = define_display_api();
        for method in &api.methods {
            for param in method.path_params() {
                assert!(
                    method.request.field(param).is_some_and(|f| f.in_path),
                    "{}: path param '{}' is not a path field",
                    method.id,
                    param
                );
            }
        }
    }
}
