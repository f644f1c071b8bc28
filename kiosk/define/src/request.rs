//! Request message definitions.
//!
//! A request is either the well-known `Empty` message or a typed message
//! whose fields are either bound into the URL path or sent in the JSON body.

use crate::schema::Schema;

/// Scalar shape of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 32-bit signed integer (`i32`).
    Int32,
    /// UTF-8 string.
    String,
    /// Repeated 32-bit integers (`Vec<i32>`).
    Int32List,
}

/// A single field of a request message.
///
/// ## Examples
///
/// ```
/// use kiosk_define::{FieldKind, RequestField};
///
/// let id = RequestField::path("id", FieldKind::Int32);
/// assert!(id.in_path);
///
/// let ids = RequestField::body("kiosk_ids", FieldKind::Int32List);
/// assert!(!ids.in_path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestField {
    /// Field name in snake_case; doubles as the builder setter name.
    pub name: String,
    /// Field shape.
    pub kind: FieldKind,
    /// Whether the field is substituted into the path template.
    pub in_path: bool,
}

impl RequestField {
    /// A field bound to a `{name}` placeholder of the path template.
    pub fn path(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            in_path: true,
        }
    }

    /// A field carried in the JSON request body.
    pub fn body(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            in_path: false,
        }
    }
}

/// Describes the request message of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// The empty message. Samples build it with `Empty::default()`.
    Empty,

    /// A typed message built through `Type::builder()`.
    Message {
        /// The message type.
        schema: Schema,
        /// The message fields.
        fields: Vec<RequestField>,
    },
}

impl ApiRequest {
    /// Creates a typed request message.
    ///
    /// ```
    /// use kiosk_define::{ApiRequest, FieldKind, RequestField};
    ///
    /// let request = ApiRequest::message("GetSignRequest", vec![RequestField::path("id", FieldKind::Int32)]);
    /// assert_eq!(request.type_name(), "GetSignRequest");
    /// assert!(request.field("id").is_some());
    /// ```
    pub fn message(type_name: impl Into<String>, fields: Vec<RequestField>) -> Self {
        Self::Message {
            schema: Schema::new(type_name),
            fields,
        }
    }

    /// The Rust type name of the request message.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Message { schema, .. } => &schema.type_name,
        }
    }

    /// Looks up a field by name. `Empty` has no fields.
    pub fn field(&self, name: &str) -> Option<&RequestField> {
        match self {
            Self::Empty => None,
            Self::Message { fields, .. } => fields.iter().find(|f| f.name == name),
        }
    }

    /// Returns `true` for the empty message.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
