use crate::{ApiError, AppState, AuthClaims};

use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn create_test_state() -> AppState {
    AppState::new(b"extractor-test-secret-32-bytes!!", Duration::from_secs(3600))
}

#[tokio::test]
async fn test_extractor_without_header_rejects_unauthenticated() {
    let state = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthClaims::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_extractor_with_basic_scheme_rejects_unauthenticated() {
    let state = create_test_state();
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthClaims::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_extractor_with_garbage_token_rejects_forbidden() {
    let state = create_test_state();
    let request = Request::builder()
        .header("Authorization", "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthClaims::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_extractor_with_valid_token_returns_claims() {
    let state = create_test_state();
    let token = state.issuer.issue("identity-123").unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthClaims::from_request_parts(&mut parts, &state).await;

    let AuthClaims(claims) = result.unwrap();
    assert_eq!(claims.user.id, "identity-123");
}
