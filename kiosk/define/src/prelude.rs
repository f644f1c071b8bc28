//! Convenient re-exports for working with kiosk definitions.
//!
//! ## Examples
//!
//! ```
//! use kiosk_define::prelude::*;
//!
//! let api = ServiceApi {
//!     name: "Display".to_string(),
//!     package: "kiosk.v1".to_string(),
//!     description: "Display service".to_string(),
//!     docs_url: None,
//!     methods: vec![],
//! };
//! assert!(api.find_method("get_kiosk").is_none());
//! ```

pub use crate::request::{ApiRequest, FieldKind, RequestField};
pub use crate::response::ApiResponse;
pub use crate::sample::{ApiMethodType, CallingForm, DescriptorError, SampleDescriptor};
pub use crate::schema::{Schema, SchemaObject};
pub use crate::types::{ApiMethod, RestMethod, ServiceApi};
