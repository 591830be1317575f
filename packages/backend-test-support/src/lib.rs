//! Backend test support utilities
//!
//! Shared helpers for the restaurant backend test suites: unified logging
//! initialization, error-body assertions and unique test data generators.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
