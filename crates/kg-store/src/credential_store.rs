//! Volatile credential store, keyed by email.

use crate::{Result as StoreErrorResult, StoreError};

use kg_core::Identity;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};
use tokio::sync::RwLock;

/// In-memory store of registered identities.
///
/// Clones share the same underlying map. Records are append-only and live
/// only as long as the process; there is no update, delete or durability.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<HashMap<String, Identity>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new identity, returning the stored record.
    ///
    /// The uniqueness check and the insert happen under a single write
    /// lock: of any number of concurrent inserts for one email, exactly
    /// one succeeds and the rest observe `DuplicateIdentity`.
    pub async fn insert(&self, identity: Identity) -> StoreErrorResult<Identity> {
        let mut inner = self.inner.write().await;

        if inner.contains_key(&identity.email) {
            debug!("Rejected duplicate registration for {}", identity.email);
            return Err(StoreError::DuplicateIdentity {
                email: identity.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        inner.insert(identity.email.clone(), identity.clone());
        info!("Registered identity {} ({} total)", identity.id, inner.len());

        Ok(identity)
    }

    /// Look up an identity by email. Absence is a normal outcome, not an
    /// error.
    pub async fn find_by_email(&self, email: &str) -> Option<Identity> {
        self.inner.read().await.get(email).cloned()
    }

    /// Number of live records
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}
