//! In-memory Users permissions store
//!
//! Used by tests and local tooling. Mirrors the HTTP store's contract:
//! fetch of a never-saved user returns the default payload, saves replace
//! the stored payload wholesale. A switchable failure mode exercises the
//! persistence-failure path without a network.

use crate::core::permissions::PermissionPayload;
use crate::storage::users::UserPermissionsStore;
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// [`UserPermissionsStore`] over a process-local map
#[derive(Default)]
pub struct MemoryUsersStore {
    records: RwLock<HashMap<String, PermissionPayload>>,
    fail_writes: AtomicBool,
}

impl MemoryUsersStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail with a persistence error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stored payload for a user, if any was ever saved
    pub async fn stored(&self, user_id: &str) -> Option<PermissionPayload> {
        self.records.read().await.get(user_id).cloned()
    }

    /// Pre-seed a user's payload
    pub async fn seed(&self, user_id: &str, payload: PermissionPayload) {
        self.records.write().await.insert(user_id.to_string(), payload);
    }
}

#[async_trait]
impl UserPermissionsStore for MemoryUsersStore {
    async fn fetch_user_permissions(&self, user_id: &str) -> Result<PermissionPayload> {
        Ok(self.stored(user_id).await.unwrap_or_default())
    }

    async fn save_user_permissions(
        &self,
        user_id: &str,
        payload: &PermissionPayload,
    ) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AdminError::persistence("simulated backend failure"));
        }
        self.records
            .write()
            .await
            .insert(user_id.to_string(), payload.clone());
        Ok(())
    }
}
