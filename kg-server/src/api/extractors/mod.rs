pub mod auth_claims;
