use kg_auth::Claims;

use serde::Serialize;

/// Response for the protected resource, echoing the verified claims
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: Claims,
}
