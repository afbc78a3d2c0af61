pub mod claims;
pub mod error;
pub mod password;
pub mod token_issuer;
pub mod token_verifier;

pub use claims::{Claims, UserClaims};
pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use token_issuer::{DEFAULT_TOKEN_TTL_SECS, TokenIssuer};
pub use token_verifier::{TokenVerifier, extract_bearer_token};

#[cfg(test)]
mod tests;
