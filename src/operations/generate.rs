//! Page generation coordination
//!
//! Turns command-line arguments into one rendering pass and decides where
//! its result goes.

use core::str::FromStr;

use crate::cli::Args;
use crate::error::PageError;
use crate::operations::bootstrap::{BootstrapOptions, PageBootstrap, Rendered};
use crate::operations::location::Base;
use crate::page::HtmlPage;
use crate::system::System;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Output format for `--fragment`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// `<ul>` markup
    Html,
    /// JSON document of items and links
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'html' or 'json'")),
        }
    }
}

/// Where the generated output is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Coordinates a complete generation run
#[non_exhaustive]
pub struct GenerateOperation<'src> {
    page: PathBuf,
    options: BootstrapOptions,
    fragment: Option<OutputFormat>,
    destination: Destination,
    dry_run: bool,
    system: &'src dyn System,
}

impl<'src> GenerateOperation<'src> {
    /// Create a generation run from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is invalid
    /// - The fragment output format is unknown
    /// - `--in-place` is combined with `--fragment`
    /// - The page does not exist (unless only a fragment is rendered)
    #[inline]
    pub fn new(args: Args, system: &'src dyn System) -> Result<Self> {
        let page = PathBuf::from(&args.page);

        let base = match args.base_url.as_deref() {
            Some(url) => Base::from_url(url).map_err(|e| PageError::configuration(e.to_string()))?,
            None => match args.site_root.as_deref() {
                Some(root) => Base::from_page(&page).with_site_root(root),
                None => Base::from_page(&page),
            },
        };

        let fragment = if args.fragment {
            Some(
                args.output_format
                    .parse::<OutputFormat>()
                    .map_err(PageError::configuration)?,
            )
        } else {
            None
        };

        if fragment.is_some() && args.in_place {
            return Err(PageError::configuration(
                "--in-place cannot be combined with --fragment; it would replace the page with the list",
            )
            .into());
        }

        if fragment.is_none() && !system.exists(&page) {
            return Err(PageError::page(format!("Page not found: {}", page.display())).into());
        }

        let destination = match args.output.as_deref() {
            Some(output) => Destination::File(PathBuf::from(output)),
            None if args.in_place => Destination::File(page.clone()),
            None => Destination::Stdout,
        };

        let options = BootstrapOptions::new(base)
            .with_config(args.config.clone())
            .with_target_id(args.target.clone())
            .with_overrides(args.overrides());

        Ok(Self {
            page,
            options,
            fragment,
            destination,
            dry_run: args.dry_run,
            system,
        })
    }

    /// Where the output of this run goes
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Execute the run
    ///
    /// Returns the text meant for stdout, if any; file destinations are
    /// written here.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rendering pass fails
    /// - The output cannot be written
    #[inline]
    pub fn execute(self) -> Result<Option<String>> {
        let bootstrap = PageBootstrap::new(self.system, self.options);

        let (rendered, output) = match self.fragment {
            Some(format) => {
                let rendered = bootstrap.render()?;
                let mut output = match format {
                    OutputFormat::Html => rendered.list.to_html(),
                    OutputFormat::Json => rendered.list.to_json()?,
                };
                output.push('\n');
                (rendered, output)
            }
            None => {
                let mut page = HtmlPage::load(self.system, &self.page)?;
                let rendered = bootstrap.run(&mut page)?;
                (rendered, page.into_string())
            }
        };

        if self.dry_run {
            Self::preview(&rendered, &self.destination);
            return Ok(None);
        }

        match self.destination {
            Destination::Stdout => Ok(Some(output)),
            Destination::File(ref path) => {
                self.system.write(path, output.as_bytes()).map_err(|e| {
                    return PageError::filesystem(format!(
                        "Failed to write {}: {e}",
                        path.display()
                    ));
                })?;
                info!("Wrote {}", path.display());
                Ok(None)
            }
        }
    }

    fn preview(rendered: &Rendered, destination: &Destination) {
        info!("Dry run preview - no files will be modified:");
        info!("");
        info!("Branch links ({}):", rendered.list.len());
        for item in &rendered.list.items {
            info!("  - {} -> {}", item.link.text, item.link.href);
        }
        info!("");
        match *destination {
            Destination::Stdout => info!("Would print the result to stdout"),
            Destination::File(ref path) => info!("Would write {}", path.display()),
        }
        info!("Run without --dry-run to write the result.");
    }
}
