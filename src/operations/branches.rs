//! Branch list fetching and parsing

use crate::error::PageError;
use crate::operations::location::Location;
use crate::system::System;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A single non-empty branch name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    /// Wrap a name, or `None` if it is empty
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a branch list into names, one per line
///
/// Empty lines are dropped and order is kept. A `\r` left over from CRLF line
/// endings is removed; any other whitespace is part of the name.
#[must_use]
pub fn parse_branch_list(text: &str) -> Vec<BranchName> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(BranchName::new)
        .collect()
}

/// Fetch the branch list at `location` and parse it
///
/// # Errors
///
/// Returns a `PageError::Fetch` if the resource cannot be fetched. There is
/// no retry.
pub fn fetch_branch_list(system: &dyn System, location: &Location) -> Result<Vec<BranchName>> {
    debug!("Fetching branch list from {}", location);

    let text = system.fetch_text(location).map_err(|e| {
        return PageError::fetch(format!(
            "Failed to fetch branch list from {location}: {e}"
        ));
    })?;

    let branches = parse_branch_list(&text);
    debug!("Branch list contains {} branch(es)", branches.len());

    Ok(branches)
}
