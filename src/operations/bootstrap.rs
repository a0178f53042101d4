//! The rendering pass: configuration, branch list, list, page

use crate::config::{Config, ConfigOverrides};
use crate::operations::branches::fetch_branch_list;
use crate::operations::location::{Base, Location};
use crate::operations::render::{RenderedList, render_list};
use crate::page::Page;
use crate::system::System;
use anyhow::{Context as _, Result};
use tracing::{debug, info};

/// Where the configuration is and where the list goes
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BootstrapOptions {
    /// What relative locations are resolved against
    pub base: Base,
    /// Configuration reference, resolved against `base`
    pub config: String,
    /// Id of the element the list is appended to
    pub target_id: String,
    /// Command-line replacements for configuration fields
    pub overrides: ConfigOverrides,
}

impl BootstrapOptions {
    pub const DEFAULT_CONFIG: &'static str = "config.json";
    pub const DEFAULT_TARGET_ID: &'static str = "branch-list";

    /// Options with the default configuration location and target id
    #[must_use]
    pub fn new(base: Base) -> Self {
        Self {
            base,
            config: Self::DEFAULT_CONFIG.to_owned(),
            target_id: Self::DEFAULT_TARGET_ID.to_owned(),
            overrides: ConfigOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_config<S: Into<String>>(mut self, config: S) -> Self {
        self.config = config.into();
        self
    }

    #[must_use]
    pub fn with_target_id<S: Into<String>>(mut self, target_id: S) -> Self {
        self.target_id = target_id.into();
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Result of a completed pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Rendered {
    pub config: Config,
    pub list: RenderedList,
}

/// One rendering pass
///
/// Running consumes the bootstrap, so a pass cannot be re-entered or repeated.
/// Every step must succeed before the page is touched.
#[non_exhaustive]
pub struct PageBootstrap<'src> {
    options: BootstrapOptions,
    system: &'src dyn System,
}

impl<'src> PageBootstrap<'src> {
    #[must_use]
    pub fn new(system: &'src dyn System, options: BootstrapOptions) -> Self {
        Self { options, system }
    }

    /// Load the configuration, fetch the branches and build the list
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A location cannot be resolved
    /// - The configuration cannot be fetched, parsed or validated
    /// - The branch list cannot be fetched
    pub fn render(self) -> Result<Rendered> {
        let config_location = Location::resolve(&self.options.base, &self.options.config)
            .context("Invalid configuration location")?;
        let config =
            Config::load_with_overrides(self.system, &config_location, &self.options.overrides)?;

        let branches_location = Location::resolve(&self.options.base, &config.branches)
            .context("Invalid branch list location in configuration")?;
        let branches = fetch_branch_list(self.system, &branches_location)?;

        let list = render_list(&branches, &config);
        debug!("Rendered {} branch link(s)", list.len());

        Ok(Rendered { config, list })
    }

    /// Perform the full pass, appending the list to the target element of `page`
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the page has no usable target
    /// element. The page is unmodified in either case.
    pub fn run(self, page: &mut dyn Page) -> Result<Rendered> {
        let target_id = self.options.target_id.clone();
        let rendered = self.render()?;

        page.append_list(&target_id, &rendered.list)?;
        info!(
            "Added {} branch link(s) to '#{}'",
            rendered.list.len(),
            target_id
        );

        Ok(rendered)
    }
}
