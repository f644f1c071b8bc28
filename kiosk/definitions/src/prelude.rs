//! Convenient re-exports for working with the Display definitions.
//!
//! ```
//! use kiosk_definitions::prelude::*;
//!
//! let request = GetKioskRequest::builder().id(7).build();
//! assert_eq!(request.id, 7);
//! ```

pub use crate::display::{define_display_api, display_samples};

pub use crate::display::{
    DeleteKioskRequest, DeleteSignRequest, Empty, GetKioskRequest, GetSignIdForKioskIdRequest,
    GetSignIdResponse, GetSignRequest, Kiosk, LatLng, ListKiosksResponse, ListSignsResponse,
    ScreenSize, SetSignIdForKioskIdsRequest, Sign,
};
