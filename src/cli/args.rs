use crate::config::ConfigOverrides;
use clap::Parser;

/// Command-line arguments for branchpage
#[derive(Parser, Debug, Clone)]
#[command(name = "branchpage")]
#[command(about = "A CLI tool for rendering a branch link list into a static page")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// HTML page the list is added to
    #[arg(long, value_name = "PATH", default_value = "./index.html")]
    pub page: String,

    /// Configuration file path or URL, relative to the page
    #[arg(long, value_name = "LOCATION", default_value = "config.json")]
    pub config: String,

    /// Address the page is published under; relative locations resolve against it
    #[arg(long = "base-url", value_name = "URL", env = "BRANCHPAGE_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory served as the site root; root-relative locations such as /b.txt start here
    #[arg(long = "site-root", value_name = "DIR", conflicts_with = "base_url")]
    pub site_root: Option<String>,

    /// Id of the element the list is appended to
    #[arg(long, value_name = "ID", default_value = "branch-list")]
    pub target: String,

    /// Write the resulting page to this file instead of stdout
    #[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
    pub output: Option<String>,

    /// Write the resulting page back over the input page
    #[arg(long = "in-place", conflicts_with = "output")]
    pub in_place: bool,

    /// Output only the rendered list, without reading a page
    #[arg(long)]
    pub fragment: bool,

    /// Output format for --fragment: html or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "html",
        requires = "fragment"
    )]
    pub output_format: String,

    /// Branch list location, replacing the configured one
    #[arg(long, value_name = "LOCATION")]
    pub branches: Option<String>,

    /// Link root, replacing the configured one
    #[arg(long, value_name = "URL")]
    pub root: Option<String>,

    /// Link prefix, replacing the configured one
    #[arg(long, value_name = "SEGMENT")]
    pub prefix: Option<String>,

    /// Fetch and render without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Configuration values given on the command line
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            branches: self.branches.clone(),
            root: self.root.clone(),
            prefix: self.prefix.clone(),
        }
    }
}
