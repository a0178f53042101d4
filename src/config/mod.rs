//! Configuration management module
//!
//! Handles JSON configuration loading, JSON schema validation, and command-line overrides

pub mod json;
pub mod schema;
pub mod validation;

use crate::operations::location::Location;
use crate::system::System;
use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Loaded once per rendering pass and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Location of the newline-delimited branch list
    pub branches: String,

    /// URL prefix every link starts with
    pub root: String,

    /// Path segment between `root` and the branch name
    pub prefix: String,
}

/// Values given on the command line that replace the loaded ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub branches: Option<String>,
    pub root: Option<String>,
    pub prefix: Option<String>,
}

impl ConfigOverrides {
    /// Whether no field is overridden
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.branches.is_none() && self.root.is_none() && self.prefix.is_none()
    }
}

impl Config {
    /// Load configuration from a local file or URL
    pub fn load(system: &dyn System, location: &Location) -> anyhow::Result<Self> {
        json::load_config(system, location, &ConfigOverrides::default())
    }

    /// Load configuration, replacing fields with the given overrides before validation
    pub fn load_with_overrides(
        system: &dyn System,
        location: &Location,
        overrides: &ConfigOverrides,
    ) -> anyhow::Result<Self> {
        json::load_config(system, location, overrides)
    }

    /// Validate configuration field contents
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }
}
