//! Resolution of configuration and branch list references
//!
//! References behave the way they would from inside the page: absolute URLs
//! are used as they are, root-relative ones (`/b.txt`) start at the site
//! root, anything else is relative to where the page lives. Local files
//! outside the site are reached with `file:` URLs.

use anyhow::{Result, anyhow};
use reqwest::Url;
use std::fmt;
use std::path::{Path, PathBuf};

/// What relative references are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base {
    /// Page on disk
    Dir {
        /// Directory holding the page
        dir: PathBuf,
        /// Directory served as `/`
        site_root: PathBuf,
    },
    /// Address the page is published under
    Url(Url),
}

impl Base {
    /// Base for a page file: the directory containing it, which is also the site root
    #[must_use]
    pub fn from_page(page: &Path) -> Self {
        let dir = page
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        return Self::from_dir(dir);
    }

    /// Base for a directory that is also the site root
    #[must_use]
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self::Dir {
            site_root: dir.clone(),
            dir,
        }
    }

    /// Serve root-relative references from `root` instead of the page directory
    ///
    /// Has no effect on a URL base, whose host already defines the root.
    #[must_use]
    pub fn with_site_root<P: AsRef<Path>>(self, root: P) -> Self {
        match self {
            Self::Dir { dir, .. } => Self::Dir {
                dir,
                site_root: root.as_ref().to_path_buf(),
            },
            url @ Self::Url(_) => url,
        }
    }

    /// Base for a published site address
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The address is not an absolute http(s) URL
    pub fn from_url(address: &str) -> Result<Self> {
        let url = Url::parse(address)
            .map_err(|e| anyhow!("Invalid base URL '{address}': {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Invalid base URL '{address}': only http and https are supported"
            ));
        }
        Ok(Self::Url(url))
    }
}

/// A resolved place to fetch a resource from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    Url(Url),
}

impl Location {
    /// Resolve a reference taken from the command line or the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reference is blank
    /// - The reference uses a scheme other than http, https or file
    /// - The reference is protocol-relative (`//host/...`) and the base is a directory
    /// - The reference cannot be joined onto a URL base
    pub fn resolve(base: &Base, reference: &str) -> Result<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(anyhow!("Cannot resolve an empty location"));
        }

        if let Ok(url) = Url::parse(reference) {
            match url.scheme() {
                "http" | "https" => return Ok(Self::Url(url)),
                "file" => {
                    return url
                        .to_file_path()
                        .map(Self::Path)
                        .map_err(|()| anyhow!("Invalid file URL: '{reference}'"));
                }
                // Single-letter schemes are Windows drive letters
                scheme if scheme.len() == 1 => {}
                scheme => {
                    return Err(anyhow!(
                        "Unsupported scheme '{scheme}' in location '{reference}'"
                    ));
                }
            }
        }

        match *base {
            Base::Dir { .. } if reference.starts_with("//") => Err(anyhow!(
                "Cannot resolve protocol-relative location '{reference}' without --base-url"
            )),
            Base::Dir { ref site_root, .. } if reference.starts_with('/') => {
                Ok(Self::Path(site_root.join(reference.trim_start_matches('/'))))
            }
            Base::Dir { ref dir, .. } => Ok(Self::Path(dir.join(reference))),
            Base::Url(ref url) => url
                .join(reference)
                .map(Self::Url)
                .map_err(|e| anyhow!("Cannot resolve '{reference}' against '{url}': {e}")),
        }
    }

    /// Whether fetching this location goes over the network
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(*self, Self::Url(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Path(ref path) => write!(f, "{}", path.display()),
            Self::Url(ref url) => write!(f, "{url}"),
        }
    }
}
