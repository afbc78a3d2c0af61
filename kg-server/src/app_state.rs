use kg_auth::{TokenIssuer, TokenVerifier};
use kg_store::CredentialStore;

use std::sync::Arc;
use std::time::Duration;

/// Shared application state for request handlers.
///
/// The store handle is shared across all requests; the token engines are
/// read-only state fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: CredentialStore,
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Build state from the signing secret and token lifetime
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            store: CredentialStore::new(),
            issuer: Arc::new(TokenIssuer::with_hs256(secret, token_ttl)),
            verifier: Arc::new(TokenVerifier::with_hs256(secret)),
        }
    }
}
