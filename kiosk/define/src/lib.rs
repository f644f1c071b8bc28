//! Kiosk Definition Library
//!
//! This crate provides the primitives used to describe an RPC service and the
//! usage samples generated for it. The definitions are consumed by the
//! `kiosk-gen` binary, which emits one sample file per [`SampleDescriptor`].
//!
//! ## Core Types
//!
//! ### Service Types
//!
//! - [`ServiceApi`] - A service definition with its methods
//! - [`ApiMethod`] - A single unary RPC with its HTTP mapping and schemas
//! - [`RestMethod`] - HTTP methods (GET, POST, DELETE, ...)
//! - [`ApiRequest`] - Request message shapes (Empty or a typed message)
//! - [`ApiResponse`] - Response shapes (message, repeated list, empty)
//! - [`Schema`] - Type information for request/response messages
//!
//! ### Sample Types
//!
//! - [`SampleDescriptor`] - Identity and generation parameters of one sample
//! - [`CallingForm`] - Request (direct) or Callable (future) invocation
//! - [`ApiMethodType`] - The client surface a sample calls through
//!
//! ## Examples
//!
//! ```
//! use kiosk_define::{ApiMethod, ApiRequest, ApiResponse, RestMethod, ServiceApi};
//!
//! let api = ServiceApi {
//!     name: "Display".to_string(),
//!     package: "kiosk.v1".to_string(),
//!     description: "Manages kiosks and the signs they display".to_string(),
//!     docs_url: None,
//!     methods: vec![ApiMethod {
//!         id: "ListSigns".to_string(),
//!         method: RestMethod::Get,
//!         path: "/v1/signs".to_string(),
//!         description: "List active signs".to_string(),
//!         request: ApiRequest::Empty,
//!         response: ApiResponse::list("ListSignsResponse", "signs", "Sign"),
//!     }],
//! };
//!
//! assert_eq!(api.name, "Display");
//! assert_eq!(api.methods[0].rust_name(), "list_signs");
//! ```

pub mod naming;
pub mod prelude;
pub mod request;
pub mod response;
pub mod sample;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use request::{ApiRequest, FieldKind, RequestField};
pub use response::ApiResponse;
pub use sample::{ApiMethodType, CallingForm, DescriptorError, SampleDescriptor};
pub use schema::{Schema, SchemaObject};
pub use types::{ApiMethod, RestMethod, ServiceApi};
