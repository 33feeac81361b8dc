//! Utility modules for the admin core
//!
//! - **error**: Error handling
//! - **logging**: Tracing subscriber setup
//! - **debounce**: Trailing-edge debouncing for search/filter inputs

pub mod debounce;
pub mod error;
pub mod logging;

pub use debounce::Debouncer;
pub use error::{AdminError, Result};
pub use logging::init_logging;
