pub mod credential_store;
pub mod error;

pub use credential_store::CredentialStore;
pub use error::{Result, StoreError};
