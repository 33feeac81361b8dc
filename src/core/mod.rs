//! Core functionality for the admin platform
//!
//! This module contains the permission domain logic: the matrix itself and
//! the editor session that owns it.

pub mod editor;
pub mod permissions;

pub use editor::PermissionEditor;
pub use permissions::{
    Action, CheckState, PermissionMatrix, PermissionPayload, PermissionState, PermissionTree,
};
