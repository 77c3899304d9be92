//! Directory error types with HTTP status code mapping.
//!
//! [`DirectoryError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ArtistId, VenueId};

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "venue not found: 42",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`DirectoryError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Venue with the given ID was not found.
    #[error("venue not found: {0}")]
    VenueNotFound(VenueId),

    /// Artist with the given ID was not found.
    #[error("artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// Request validation failed: a required field is malformed, a foreign
    /// key does not resolve, or a timestamp cannot be parsed.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Storage layer failure (transaction, constraint, connectivity).
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// A stored genre string could not be decoded back into a tag list.
    #[error("genre codec error: {0}")]
    GenreCodec(#[from] serde_json::Error),

    /// Internal invariant violation, e.g. a show referencing a missing
    /// counterpart record.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::VenueNotFound(_) => 2001,
            Self::ArtistNotFound(_) => 2002,
            Self::Internal(_) => 3000,
            Self::Storage(_) => 3001,
            Self::GenreCodec(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::VenueNotFound(_) | Self::ArtistNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::GenreCodec(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side failures are logged in full but surface a generic
        // message to the client.
        let message = match &self {
            Self::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                "internal server error".to_string()
            }
            Self::GenreCodec(e) => {
                tracing::error!(error = %e, "stored genre value failed to decode");
                "internal server error".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message,
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        let venue = DirectoryError::VenueNotFound(VenueId::new(7));
        assert_eq!(venue.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(venue.error_code(), 2001);

        let artist = DirectoryError::ArtistNotFound(ArtistId::new(9));
        assert_eq!(artist.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(artist.error_code(), 2002);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = DirectoryError::Validation("start_time does not parse".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn server_variants_map_to_500() {
        let storage = DirectoryError::Storage(sqlx::Error::PoolClosed);
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.error_code(), 3001);

        let internal = DirectoryError::Internal("missing counterpart".to_string());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error_code(), 3000);
    }

    #[test]
    fn display_includes_id() {
        let err = DirectoryError::VenueNotFound(VenueId::new(42));
        assert_eq!(err.to_string(), "venue not found: 42");
    }
}
