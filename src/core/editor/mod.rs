//! Permission editor lifecycle
//!
//! The editor is the single owner of a mutable [`PermissionMatrix`] between
//! open and save/cancel. It seeds the matrix from the subject user's stored
//! payload, applies toggles, and persists the whole tree in one write. No
//! other code holds a mutable alias to the tree while the editor is open.


use crate::config::models::catalog::PermissionCatalog;
use crate::core::permissions::{Action, CheckState, PermissionMatrix, PermissionPayload};
use crate::storage::users::UserPermissionsStore;
use crate::utils::error::{AdminError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// An open editing session over one user's permissions
pub struct PermissionEditor {
    subject: Option<String>,
    matrix: PermissionMatrix,
    store: Arc<dyn UserPermissionsStore>,
}

impl PermissionEditor {
    /// Open an editor for the given subject, seeded from the store.
    ///
    /// A subject without saved permissions starts from the all-false tree.
    /// `subject` may be `None` while the surrounding screen has not resolved
    /// a user yet; toggling works, saving does not.
    pub async fn open(
        store: Arc<dyn UserPermissionsStore>,
        catalog: Arc<PermissionCatalog>,
        subject: Option<String>,
    ) -> Result<Self> {
        let matrix = match &subject {
            Some(user_id) => {
                let payload = store
                    .fetch_user_permissions(user_id)
                    .await
                    .map_err(as_persistence)?;
                debug!(user = %user_id, "seeded permission editor from stored payload");
                PermissionMatrix::from_payload(catalog, &payload)
            }
            None => PermissionMatrix::new(catalog),
        };

        Ok(Self {
            subject,
            matrix,
            store,
        })
    }

    /// The subject user id, if one is set
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Read-only view of the matrix
    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    // Toggle operations, delegated so the editor stays the only mutable
    // alias to the tree.

    pub fn toggle_action(
        &mut self,
        module_key: &str,
        submodule_key: &str,
        action: Action,
        value: bool,
    ) -> Result<()> {
        self.matrix
            .toggle_action(module_key, submodule_key, action, value)
    }

    pub fn toggle_submodule(
        &mut self,
        module_key: &str,
        submodule_key: &str,
        value: bool,
    ) -> Result<()> {
        self.matrix.toggle_submodule(module_key, submodule_key, value)
    }

    pub fn toggle_module(&mut self, module_key: &str, value: bool) -> Result<()> {
        self.matrix.toggle_module(module_key, value)
    }

    pub fn set_super_admin(&mut self, value: bool) {
        self.matrix.set_super_admin(value);
    }

    pub fn module_state(&self, module_key: &str) -> Result<CheckState> {
        self.matrix.module_state(module_key)
    }

    pub fn submodule_state(&self, module_key: &str, submodule_key: &str) -> Result<CheckState> {
        self.matrix.submodule_state(module_key, submodule_key)
    }

    /// Persist the full tree plus the super admin flag.
    ///
    /// The subject is validated before anything else: without a user id no
    /// success path may run. On persistence failure the in-memory state is
    /// untouched so the caller can surface the message and offer a retry;
    /// the save itself is never retried here.
    pub async fn save(&self) -> Result<PermissionPayload> {
        let subject = self.subject.as_deref().ok_or_else(|| {
            AdminError::missing_subject("cannot save permissions without a subject user")
        })?;

        let payload = self.matrix.payload();
        self.store
            .save_user_permissions(subject, &payload)
            .await
            .map_err(as_persistence)?;

        info!(user = %subject, "permissions saved");
        Ok(payload)
    }

    /// Discard the session without side effects
    pub fn cancel(self) {
        debug!(subject = ?self.subject, "permission editor cancelled");
    }
}

/// Fold store-boundary failures into the persistence variant so the editor
/// surfaces one displayable message regardless of transport.
fn as_persistence(err: AdminError) -> AdminError {
    match err {
        AdminError::Persistence(_) => err,
        other => AdminError::persistence(other.to_string()),
    }
}
