use kg_core::Identity;

use serde::Serialize;

/// Identity summary for JSON serialization; the password digest is never
/// part of a response
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username,
            email: identity.email,
        }
    }
}
