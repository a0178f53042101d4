//! Error handling module
//!
//! Defines the error kinds a rendering pass can fail with, each mapped to an exit code

pub mod types;

pub use types::*;
