//! Axum extractor gating protected endpoints on a verified bearer token

use crate::ApiError;

use crate::app_state::AppState;

use kg_auth::{Claims, extract_bearer_token};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Verified claims of the bearer token on the current request.
///
/// Rejection is two-tier: no credential presented at all is 401; a
/// presented but unverifiable token is 403. Each request gets a fresh
/// value; nothing is attached to shared request state.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get("authorization")
                .and_then(|h| h.to_str().ok());

            let token = extract_bearer_token(header)?;
            let claims = state.verifier.verify(token)?;

            log::debug!("Authenticated request for identity {}", claims.user.id);

            Ok(AuthClaims(claims))
        }
    }
}
