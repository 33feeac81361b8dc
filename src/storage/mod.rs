//! Storage layer for the admin core
//!
//! The Users backend owns permission persistence; this module defines the
//! boundary trait plus the HTTP implementation and an in-memory fake.

pub mod http;
pub mod memory;
pub mod users;

pub use http::HttpUsersStore;
pub use memory::MemoryUsersStore;
pub use users::UserPermissionsStore;
