//! # `BranchPage`
//!
//! `BranchPage` renders the branches of a repository as a list of links inside
//! a static HTML page. A `config.json` next to the page names the branch list
//! and how each link is built:
//!
//! ```json
//! { "branches": "branches.txt", "root": "https://example.com/", "prefix": "tree/" }
//! ```
//!
//! ## Usage
//!
//! ```sh
//! branchpage --page site/index.html --in-place
//! branchpage --page site/index.html --output public/index.html
//! branchpage --config https://example.com/config.json --fragment --output-format json
//! ```
//!
//! See `branchpage --help` for all options.

use anyhow::Result;
use branchpage::cli::Args;
use branchpage::error::PageError;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Fragment output goes to stdout, so keep logging to errors there
    let log_level = if args.fragment && args.output.is_none() {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match branchpage::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<PageError>()
                    .map_or(1, PageError::exit_code),
            );
        }
    }
}
