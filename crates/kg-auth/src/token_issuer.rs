use crate::{AuthError, Claims, Result as AuthErrorResult, UserClaims};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Default access-token lifetime: one hour.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3_600;

/// Issues HS256-signed access tokens.
///
/// The secret is process-wide state fixed at startup; rotating it
/// invalidates every outstanding token.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with an HS256 secret and a token lifetime
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for an authenticated identity.
    ///
    /// Claims carry the identity id under `user.id`, `iat = now` and
    /// `exp = now + ttl`.
    #[track_caller]
    pub fn issue(&self, identity_id: &str) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user: UserClaims {
                id: identity_id.to_string(),
            },
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::Sign {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Configured token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
