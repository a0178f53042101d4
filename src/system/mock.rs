//! Mock system implementation for testing

use super::System;
use reqwest::Url;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and a table of canned HTTP
/// responses, for fast, isolated unit tests without side effects. Any URL
/// that was not registered fails as if the connection were refused.
///
/// # Example
/// ```
/// use branchpage::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/site/config.json", b"{}")
///     .with_url("https://example.com/branches.txt", "main\n");
///
/// assert!(system.exists(Path::new("/site/config.json")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    responses: HashMap<String, MockResponse>,
    requests: Vec<String>,
}

#[derive(Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                responses: HashMap::new(),
                requests: Vec::new(),
            })),
        }
    }

    /// Add a file with contents (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if let Some(parent) = path_buf.parent() {
                Self::ensure_parent_dirs(&mut state.dirs, parent);
            }
            state.files.insert(path_buf, contents.to_vec());
        }
        self
    }

    /// Add a directory (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            Self::ensure_parent_dirs(&mut state.dirs, path.as_ref());
        }
        self
    }

    /// Serve `body` for GET requests to `url` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_url(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(body.to_owned()))
    }

    /// Answer GET requests to `url` with a non-success status (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// URLs requested so far, in request order
    #[must_use]
    #[inline]
    pub fn requests(&self) -> Vec<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.requests.clone()
    }

    fn with_response(self, url: &str, response: MockResponse) -> Self {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            // Keyed the way `Url` prints, so "https://host" matches "https://host/"
            let key = Url::parse(url).map_or_else(|_| url.to_owned(), |parsed| parsed.to_string());
            state.responses.insert(key, response);
        }
        self
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    #[inline]
    fn http_get_text(&self, url: &Url) -> io::Result<String> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.requests.push(url.to_string());

        match state.responses.get(url.as_str()).cloned() {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(io::Error::other(format!(
                "HTTP status client error ({status}) for url ({url})"
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("error sending request for url ({url})"),
            )),
        }
    }
}
