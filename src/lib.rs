//! `BranchPage` - A CLI tool for rendering a branch link list into a static page
//!
//! This library loads a small JSON configuration, fetches the newline-delimited
//! branch list it points at, builds an unordered list linking every branch to
//! `root + prefix + name`, and appends that list to the `#branch-list` element
//! of an HTML page.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod page;
pub mod system;

use anyhow::Result;
use cli::Args;
use operations::generate::GenerateOperation;
use system::RealSystem;

/// Main entry point for the branchpage library
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();
    let operation = GenerateOperation::new(args, &system)?;

    // Output to stdout (not using logging)
    if let Some(output) = operation.execute()? {
        print!("{output}");
    }

    Ok(())
}
