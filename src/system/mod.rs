//! System abstraction for filesystem and network operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations.

use crate::operations::location::Location;
use reqwest::Url;
use std::io;
use std::path::Path;
use tracing::debug;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (filesystem + network)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `reqwest`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    // ==================== Network Operations ====================

    /// Fetch the body of an http(s) resource as text
    ///
    /// A response with a non-success status is an error.
    fn http_get_text(&self, url: &Url) -> io::Result<String>;

    /// Fetch a resolved location, whichever kind it is
    #[inline]
    fn fetch_text(&self, location: &Location) -> io::Result<String> {
        debug!(
            "Fetching {} ({})",
            location,
            if location.is_remote() { "network" } else { "local file" }
        );
        match *location {
            Location::Path(ref path) => self.read_to_string(path),
            Location::Url(ref url) => self.http_get_text(url),
        }
    }
}
