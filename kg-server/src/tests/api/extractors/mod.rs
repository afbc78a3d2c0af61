mod auth_claims;
