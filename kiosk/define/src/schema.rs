//! Schema definitions for request/response messages.
//!
//! These schemas are used during sample generation to name the message
//! types a sample constructs and receives.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Trait bound for message types exchanged with a service.
///
/// Automatically implemented for any type that satisfies all the bounds.
///
/// ## Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use kiosk_define::SchemaObject;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct GetThing {
///     id: i32,
/// }
///
/// fn accepts_schema<T: SchemaObject>(_: T) {}
/// accepts_schema(GetThing { id: 7 });
/// ```
pub trait SchemaObject: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static {}

impl<T> SchemaObject for T where T: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static
{}

/// A schema descriptor for code generation.
///
/// ## Examples
///
/// ```
/// use kiosk_define::Schema;
///
/// let schema = Schema::new("Kiosk");
/// assert_eq!(schema.type_name, "Kiosk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// The Rust type name (e.g., "ListSignsResponse").
    pub type_name: String,
}

impl Schema {
    /// Creates a new schema with just a type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}
