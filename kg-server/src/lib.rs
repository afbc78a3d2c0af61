pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{login, register},
        identity_dto::IdentityDto,
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_claims::AuthClaims,
    protected::{protected::protected_resource, protected_response::ProtectedResponse},
};

pub use crate::app_state::AppState;
pub use crate::config::Config;
pub use crate::error::{Result, ServerError};
pub use crate::routes::build_router;

#[cfg(test)]
mod tests;
