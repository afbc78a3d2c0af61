use serde::Serialize;

/// Successful login response carrying the bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
