//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for branchpage operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PageError {
    /// Configuration Error - missing, malformed or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Fetch Error - a configuration or branch list resource could not be fetched
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Page Error - the target element is missing or cannot hold the list
    #[error("Page error: {message}")]
    Page { message: String },

    /// Filesystem Error - writing the result failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl PageError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Fetch { .. } => 2,
            Self::Page { .. } => 3,
            Self::Filesystem { .. } => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a fetch error
    #[inline]
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a page error
    #[inline]
    pub fn page<S: Into<String>>(message: S) -> Self {
        Self::Page {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
