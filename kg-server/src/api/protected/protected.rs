//! The token-gated resource

use crate::{AuthClaims, ProtectedResponse};

use axum::Json;

/// GET /protected
///
/// The extractor has already verified the bearer token; the handler only
/// echoes the claims it was granted.
pub async fn protected_resource(AuthClaims(claims): AuthClaims) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "You have access to protected data!".to_string(),
        user: claims,
    })
}
