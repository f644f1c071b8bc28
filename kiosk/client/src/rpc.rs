//! Typed descriptions of the Display RPCs.
//!
//! Each RPC is a zero-sized marker implementing [`Rpc`], tying together its
//! request type, response type and JSON/HTTP mapping. Both invocation forms
//! of the client are written once against this trait.

use kiosk_define::{RestMethod, SchemaObject};
use kiosk_definitions::display::{
    DeleteKioskRequest, DeleteSignRequest, Empty, GetKioskRequest, GetSignIdForKioskIdRequest,
    GetSignIdResponse, GetSignRequest, Kiosk, ListKiosksResponse, ListSignsResponse,
    SetSignIdForKioskIdsRequest, Sign,
};

/// A unary RPC of the Display service.
pub trait Rpc: Send + Sync + 'static {
    /// Request message.
    type Request: SchemaObject;
    /// Response message.
    type Response: SchemaObject;

    /// RPC name as declared by the service, e.g. `GetKiosk`.
    const NAME: &'static str;
    /// HTTP method of the JSON mapping.
    const METHOD: RestMethod;

    /// URL path with the request's path fields substituted.
    fn path(request: &Self::Request) -> String;

    /// Whether the request is sent as the JSON body.
    fn has_body() -> bool {
        matches!(Self::METHOD, RestMethod::Post | RestMethod::Put | RestMethod::Patch)
    }
}

pub struct CreateKiosk;

impl Rpc for CreateKiosk {
    type Request = Kiosk;
    type Response = Kiosk;
    const NAME: &'static str = "CreateKiosk";
    const METHOD: RestMethod = RestMethod::Post;

    fn path(_: &Kiosk) -> String {
        "/v1/kiosks".to_string()
    }
}

pub struct ListKiosks;

impl Rpc for ListKiosks {
    type Request = Empty;
    type Response = ListKiosksResponse;
    const NAME: &'static str = "ListKiosks";
    const METHOD: RestMethod = RestMethod::Get;

    fn path(_: &Empty) -> String {
        "/v1/kiosks".to_string()
    }
}

pub struct GetKiosk;

impl Rpc for GetKiosk {
    type Request = GetKioskRequest;
    type Response = Kiosk;
    const NAME: &'static str = "GetKiosk";
    const METHOD: RestMethod = RestMethod::Get;

    fn path(request: &GetKioskRequest) -> String {
        format!("/v1/kiosks/{}", request.id)
    }
}

pub struct DeleteKiosk;

impl Rpc for DeleteKiosk {
    type Request = DeleteKioskRequest;
    type Response = Empty;
    const NAME: &'static str = "DeleteKiosk";
    const METHOD: RestMethod = RestMethod::Delete;

    fn path(request: &DeleteKioskRequest) -> String {
        format!("/v1/kiosks/{}", request.id)
    }
}

pub struct CreateSign;

impl Rpc for CreateSign {
    type Request = Sign;
    type Response = Sign;
    const NAME: &'static str = "CreateSign";
    const METHOD: RestMethod = RestMethod::Post;

    fn path(_: &Sign) -> String {
        "/v1/signs".to_string()
    }
}

pub struct ListSigns;

impl Rpc for ListSigns {
    type Request = Empty;
    type Response = ListSignsResponse;
    const NAME: &'static str = "ListSigns";
    const METHOD: RestMethod = RestMethod::Get;

    fn path(_: &Empty) -> String {
        "/v1/signs".to_string()
    }
}

pub struct GetSign;

impl Rpc for GetSign {
    type Request = GetSignRequest;
    type Response = Sign;
    const NAME: &'static str = "GetSign";
    const METHOD: RestMethod = RestMethod::Get;

    fn path(request: &GetSignRequest) -> String {
        format!("/v1/signs/{}", request.id)
    }
}

pub struct DeleteSign;

impl Rpc for DeleteSign {
    type Request = DeleteSignRequest;
    type Response = Empty;
    const NAME: &'static str = "DeleteSign";
    const METHOD: RestMethod = RestMethod::Delete;

    fn path(request: &DeleteSignRequest) -> String {
        format!("/v1/signs/{}", request.id)
    }
}

pub struct SetSignIdForKioskIds;

impl Rpc for SetSignIdForKioskIds {
    type Request = SetSignIdForKioskIdsRequest;
    type Response = Empty;
    const NAME: &'static str = "SetSignIdForKioskIds";
    const METHOD: RestMethod = RestMethod::Post;

    fn path(request: &SetSignIdForKioskIdsRequest) -> String {
        format!("/v1/signs/{}", request.sign_id)
    }
}

pub struct GetSignIdForKioskId;

impl Rpc for GetSignIdForKioskId {
    type Request = GetSignIdForKioskIdRequest;
    type Response = GetSignIdResponse;
    const NAME: &'static str = "GetSignIdForKioskId";
    const METHOD: RestMethod = RestMethod::Get;

    fn path(request: &GetSignIdForKioskIdRequest) -> String {
        format!("/v1/kiosks/{}/sign", request.kiosk_id)
    }
}
