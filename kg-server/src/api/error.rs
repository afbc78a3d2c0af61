//! REST API error types
//!
//! A closed set of domain errors, each mapped to exactly one HTTP status
//! and JSON body. Internal faults are logged server-side and never expose
//! detail to the caller.

use kg_auth::AuthError;
use kg_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "ALREADY_EXISTS")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is absent or blank (400)
    #[error("Missing required field '{field}' {location}")]
    MissingFields {
        field: String,
        location: ErrorLocation,
    },

    /// Registration for an email that already has a record (400)
    #[error("Identity already exists {location}")]
    AlreadyExists { location: ErrorLocation },

    /// Login rejected; deliberately silent on whether the email exists (400)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// No bearer credential presented at all (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// A bearer token was presented but is not honored (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::MissingFields { field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "MISSING_FIELDS".into(),
                    message: "Please enter all fields".into(),
                    field: Some(field),
                },
            ),
            ApiError::AlreadyExists { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "ALREADY_EXISTS".into(),
                    message: "User already exists".into(),
                    field: None,
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "Invalid credentials".into(),
                    field: None,
                },
            ),
            ApiError::Unauthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHENTICATED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "Internal server error".into(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateIdentity { .. } => ApiError::AlreadyExists {
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert auth errors to API errors.
///
/// Absent credentials map to 401, presented-but-rejected tokens to 403;
/// the two tiers are not interchangeable.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::MissingHeader { .. } => ApiError::Unauthenticated {
                message: "No bearer token presented".into(),
                location,
            },
            AuthError::InvalidScheme { .. } => ApiError::Unauthenticated {
                message: "Expected 'Bearer' authorization scheme".into(),
                location,
            },
            AuthError::Malformed { .. } => ApiError::Forbidden {
                message: "Malformed token".into(),
                location,
            },
            AuthError::BadSignature { .. } => ApiError::Forbidden {
                message: "Token signature mismatch".into(),
                location,
            },
            AuthError::Expired { .. } => ApiError::Forbidden {
                message: "Token expired".into(),
                location,
            },
            AuthError::InvalidClaim { .. } => ApiError::Forbidden {
                message: "Invalid token claims".into(),
                location,
            },
            AuthError::Sign { .. } | AuthError::MalformedDigest { .. } | AuthError::Hash { .. } => {
                ApiError::Internal {
                    message: e.to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
