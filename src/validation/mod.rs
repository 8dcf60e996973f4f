//! Request input validation.
//!
//! Each writable entity implements [`Validate`], turning a raw JSON value
//! into its typed `New*` input or a list of field-level [`Violation`]s.
//! Checks cover presence, type and format only; they never touch the
//! database.

mod entities;
mod fields;


use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub use fields::{Fields, parse_iso8601, parse_uuid};

/// A single failed check on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Input field name as sent by the client
    #[schema(example = "listId")]
    pub field: String,
    /// Name of the failed check
    #[schema(example = "isUuid")]
    pub constraint: String,
    /// Human-readable description
    #[schema(example = "listId must be a UUID")]
    pub message: String,
}

impl Violation {
    pub fn new(field: &str, constraint: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            constraint: constraint.to_string(),
            message: message.into(),
        }
    }
}

/// Parse a raw input object into a typed value.
pub trait Validate: Sized {
    fn validate(input: &Value) -> Result<Self, Vec<Violation>>;
}
