use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Identity already registered for {email} {location}")]
    DuplicateIdentity {
        email: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
