//! Hierarchical permission matrix
//!
//! The permission model of the admin platform: a nested boolean tree keyed
//! by module → submodule → action plus a `super_admin` flag, with tri-state
//! checked/indeterminate derivation for hierarchical checkbox UIs.

mod matrix;
#[cfg(test)]
mod tests;
mod types;
mod wire;

pub use matrix::PermissionMatrix;
pub use types::{Action, ActionGrants, CheckState, PermissionState, PermissionTree, SubmoduleGrants};
pub use wire::PermissionPayload;
