//! Response shape definitions.
//!
//! The response shape decides how a sample consumes the result: a single
//! message is written once, a list response is iterated element by element.

use crate::schema::Schema;

/// Describes the response of a method.
///
/// ## Examples
///
/// ```
/// use kiosk_define::ApiResponse;
///
/// let kiosk = ApiResponse::message("Kiosk");
/// assert_eq!(kiosk.type_name(), "Kiosk");
///
/// let signs = ApiResponse::list("ListSignsResponse", "signs", "Sign");
/// assert!(signs.is_list());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// A single message.
    Message(Schema),

    /// A message wrapping a repeated field of elements.
    List {
        /// The wrapping response message (e.g., `ListSignsResponse`).
        schema: Schema,
        /// The repeated field name (e.g., `signs`).
        field: String,
        /// The element type (e.g., `Sign`).
        element: Schema,
    },

    /// The empty message (DELETE and action RPCs).
    Empty,
}

impl ApiResponse {
    /// Creates a single-message response by type name.
    pub fn message(type_name: impl Into<String>) -> Self {
        Self::Message(Schema::new(type_name))
    }

    /// Creates a list response.
    pub fn list(
        type_name: impl Into<String>,
        field: impl Into<String>,
        element: impl Into<String>,
    ) -> Self {
        Self::List {
            schema: Schema::new(type_name),
            field: field.into(),
            element: Schema::new(element),
        }
    }

    /// The Rust type name of the response message.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Message(schema) | Self::List { schema, .. } => &schema.type_name,
            Self::Empty => "Empty",
        }
    }

    /// Returns `true` when the response carries a repeated element field.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }
}
