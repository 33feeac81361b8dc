//! Users permissions persistence interface

use crate::core::permissions::PermissionPayload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence boundary for per-user permission payloads.
///
/// Writes are full overwrites of the stored payload; partial updates are not
/// part of the interface, matching the matrix's bulk-overwrite design. Saves
/// are fire-once: the store reports success or failure and never retries.
#[async_trait]
pub trait UserPermissionsStore: Send + Sync {
    /// Fetch the previously saved payload for a user, or the default
    /// (all-false) payload when none was ever saved.
    async fn fetch_user_permissions(&self, user_id: &str) -> Result<PermissionPayload>;

    /// Persist the full payload for a user, replacing whatever was stored.
    async fn save_user_permissions(&self, user_id: &str, payload: &PermissionPayload)
        -> Result<()>;
}
