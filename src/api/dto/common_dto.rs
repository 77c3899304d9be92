//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form body for the search endpoints (`search_term` field).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchForm {
    /// Substring to match against names, case-insensitively. The empty
    /// term matches every record.
    #[serde(default)]
    pub search_term: String,
}

/// Response body for the delete endpoints.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Whether the delete was applied.
    pub success: bool,
}

/// One accepted field of a create/edit form, served by the GET form routes.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct FormField {
    /// Form field name.
    pub name: &'static str,
    /// Whether the field must be present.
    pub required: bool,
    /// Whether the field may repeat (list-valued).
    pub multiple: bool,
}

impl FormField {
    /// A required single-valued field.
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            multiple: false,
        }
    }

    /// An optional single-valued field.
    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            multiple: false,
        }
    }

    /// An optional repeatable field.
    #[must_use]
    pub const fn repeated(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            multiple: true,
        }
    }
}

/// Descriptor for a create form: which fields a POST to the same path
/// accepts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormDescriptor {
    /// Accepted form fields.
    pub fields: Vec<FormField>,
}
