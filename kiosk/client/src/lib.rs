//! Client for the Kiosk Display service.
//!
//! Samples are written against this crate's public surface only. The client
//! exposes each RPC of the Display service in two calling forms:
//!
//! - **Request form** - an async method taking the request message
//! - **Callable form** - a `*_callable()` accessor whose `future_call()`
//!   dispatches immediately and returns an [`ApiFuture`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use kiosk_client::prelude::*;
//!
//! # async fn run() -> Result<(), KioskError> {
//! let client = DisplayClient::from_env()?;
//!
//! let kiosk = client.get_kiosk(GetKioskRequest::builder().id(1).build()).await?;
//! println!("Response: {}", kiosk);
//!
//! let future = client.list_signs_callable().future_call(Empty::default());
//! for sign in future.await?.signs {
//!     println!("Sign: {}", sign);
//! }
//! # Ok(())
//! # }
//! ```

pub mod callable;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod rpc;

pub use callable::{ApiFuture, UnaryCallable};
pub use client::DisplayClient;
pub use config::ClientConfig;
pub use error::{ConfigError, KioskError};
pub use rpc::Rpc;

/// Display service messages.
pub use kiosk_definitions::display as messages;
