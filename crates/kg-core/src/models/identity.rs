//! Identity record - one registered user's credentials and metadata.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered identity.
///
/// `email` is the unique key across all live records. `password_digest`
/// holds an Argon2id PHC string, never the plaintext password. Records are
/// immutable after creation; there is no profile-update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with a fresh id
    pub fn new(username: String, email: String, password_digest: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_digest,
            created_at: Utc::now(),
        }
    }
}
