//! Error handling for the restaurant backend.

pub mod error_code;

pub use error_code::ErrorCode;
