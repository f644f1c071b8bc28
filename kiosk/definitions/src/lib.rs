//! Kiosk API Definitions
//!
//! This crate contains the Display service definition built from the
//! primitives in `kiosk-define`, the service's message types, and the
//! descriptors of the samples generated for it.
//!
//! ## Available Services
//!
//! - [`display`] - Kiosk Display service
//!
//! ## Examples
//!
//! ```
//! use kiosk_definitions::display::{define_display_api, display_samples};
//!
//! let api = define_display_api();
//! for sample in display_samples() {
//!     assert!(api.find_method(&sample.api_method_name).is_some());
//! }
//! ```

pub mod display;
pub mod prelude;

pub use display::{define_display_api, display_samples};
