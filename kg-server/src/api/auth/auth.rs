//! Registration and login handlers

use crate::{
    ApiError, ApiResult, IdentityDto, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};

use crate::app_state::AppState;

use kg_core::Identity;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /auth/register
///
/// Validate input, reject duplicate emails, hash the password and append
/// the record. The response excludes the digest.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let username = require("username", &req.username)?;
    let email = require("email", &req.email)?;
    let password = require("password", &req.password)?;

    if state.store.find_by_email(&email).await.is_some() {
        return Err(ApiError::AlreadyExists {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Argon2 takes tens of milliseconds; keep it off the runtime workers
    let digest = tokio::task::spawn_blocking(move || kg_auth::hash_password(&password))
        .await
        .map_err(join_error)??;

    let identity = Identity::new(username, email, digest);

    // The store re-checks uniqueness under its write lock, so a racing
    // registration for the same email surfaces here as AlreadyExists
    let stored = state.store.insert(identity).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: IdentityDto::from(stored),
        }),
    ))
}

/// POST /auth/login
///
/// An unknown email and a wrong password produce the same error; the
/// response must not reveal which one happened.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = require("email", &req.email)?;
    let password = require("password", &req.password)?;

    let Some(identity) = state.store.find_by_email(&email).await else {
        return Err(ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let digest = identity.password_digest.clone();
    let matches = tokio::task::spawn_blocking(move || kg_auth::verify_password(&password, &digest))
        .await
        .map_err(join_error)??;

    if !matches {
        return Err(ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.issuer.issue(&identity.id.to_string())?;

    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        token,
    }))
}

/// Reject an absent or blank field, returning the trimmed value
#[track_caller]
fn require(field: &str, value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MissingFields {
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}

#[track_caller]
fn join_error(e: tokio::task::JoinError) -> ApiError {
    ApiError::Internal {
        message: format!("Hashing task failed: {e}"),
        location: ErrorLocation::from(Location::caller()),
    }
}
