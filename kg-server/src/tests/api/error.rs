use crate::ApiError;

use kg_auth::AuthError;
use kg_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn response_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_missing_fields_returns_400_with_field() {
    let error = ApiError::MissingFields {
        field: "email".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_FIELDS");
    assert_eq!(json["error"]["message"], "Please enter all fields");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_already_exists_returns_400() {
    let error = ApiError::AlreadyExists {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "ALREADY_EXISTS");
    assert_eq!(json["error"]["message"], "User already exists");
}

#[tokio::test]
async fn test_invalid_credentials_returns_400() {
    let error = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_unauthenticated_returns_401() {
    let error = ApiError::Unauthenticated {
        message: "No bearer token presented".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "Token expired".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::Internal {
        message: "store poisoned at shard 3".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[test]
fn test_duplicate_identity_maps_to_already_exists() {
    let error = ApiError::from(StoreError::DuplicateIdentity {
        email: "alice@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::AlreadyExists { .. }));
}

#[test]
fn test_missing_header_maps_to_unauthenticated() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::Unauthenticated { .. }));
}

#[test]
fn test_expired_token_maps_to_forbidden() {
    let error = ApiError::from(AuthError::Expired {
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::Forbidden { .. }));
}
