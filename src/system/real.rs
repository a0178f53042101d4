//! Real system implementation using `std::fs` and a blocking `reqwest` client

use super::System;
use reqwest::Url;
use reqwest::blocking::Client;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Production implementation of System trait
///
/// Filesystem calls delegate to the standard library. Each network fetch
/// builds its own client since a pass performs at most two requests.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn http_get_text(&self, url: &Url) -> io::Result<String> {
        debug!("GET {}", url);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(io::Error::other)?;

        let response = client
            .get(url.clone())
            .send()
            .map_err(io::Error::other)?
            .error_for_status()
            .map_err(io::Error::other)?;

        debug!("{} responded with {}", url, response.status());
        response.text().map_err(io::Error::other)
    }
}
