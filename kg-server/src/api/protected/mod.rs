pub mod protected;
pub mod protected_response;
