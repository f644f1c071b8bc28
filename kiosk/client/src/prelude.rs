//! Everything a sample needs in one import.
//!
//! ```
//! use kiosk_client::prelude::*;
//!
//! let request = GetKioskRequest::builder().id(1024).build();
//! assert_eq!(request.id, 1024);
//! ```

pub use crate::callable::{ApiFuture, UnaryCallable};
pub use crate::client::DisplayClient;
pub use crate::config::ClientConfig;
pub use crate::error::KioskError;

pub use kiosk_definitions::display::{
    DeleteKioskRequest, DeleteSignRequest, Empty, GetKioskRequest, GetSignIdForKioskIdRequest,
    GetSignIdResponse, GetSignRequest, Kiosk, ListKiosksResponse, ListSignsResponse,
    SetSignIdForKioskIdsRequest, Sign,
};
