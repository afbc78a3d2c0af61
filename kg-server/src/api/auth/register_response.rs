use crate::IdentityDto;

use serde::Serialize;

/// Successful registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: IdentityDto,
}
