//! Password hashing using Argon2id

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Hash a plaintext password into a PHC-format Argon2id digest.
///
/// The salt is random per call, so hashing the same password twice yields
/// two different digests that both verify.
#[track_caller]
pub fn hash_password(plaintext: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a plaintext password against a stored digest.
///
/// A non-matching password is `Ok(false)`, not an error; only a digest that
/// cannot be parsed as a PHC string fails.
#[track_caller]
pub fn verify_password(plaintext: &str, digest: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(digest).map_err(|_| AuthError::MalformedDigest {
        location: ErrorLocation::from(Location::caller()),
    })?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
