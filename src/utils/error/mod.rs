//! Error handling for the admin core
//!
//! This module defines all error types used throughout the crate.

mod helpers;
#[cfg(test)]
mod tests;
mod types;

pub use types::{AdminError, Result};
