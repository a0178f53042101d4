//! Tests for turning command-line arguments into a generation run

use branchpage::cli::Args;
use branchpage::error::PageError;
use branchpage::operations::generate::{Destination, GenerateOperation, OutputFormat};
use branchpage::system::System;
use branchpage::system::mock::MockSystem;
use clap::Parser as _;
use std::path::{Path, PathBuf};

const PAGE: &str = "<body><div id=\"branch-list\"></div></body>\n";

fn site() -> MockSystem {
    MockSystem::new()
        .with_file("/site/index.html", PAGE.as_bytes())
        .with_file(
            "/site/config.json",
            br#"{"branches": "branches.txt", "root": "https://x/", "prefix": "tree/"}"#,
        )
        .with_file("/site/branches.txt", b"main\ndev\n")
}

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["branchpage", "--page", "/site/index.html"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_page_printed_to_stdout_by_default() {
    let system = site();
    let operation = GenerateOperation::new(args(&[]), &system).unwrap();
    assert_eq!(operation.destination(), &Destination::Stdout);

    let output = operation.execute().unwrap().unwrap();
    assert!(output.contains("<li><a href=\"https://x/tree/main\">main</a></li>"));
    assert!(output.contains("<li><a href=\"https://x/tree/dev\">dev</a></li>"));
    assert_eq!(system.read_to_string(Path::new("/site/index.html")).unwrap(), PAGE);
}

#[test]
fn test_in_place_rewrites_page() {
    let system = site();
    let operation = GenerateOperation::new(args(&["--in-place"]), &system).unwrap();
    assert_eq!(
        operation.destination(),
        &Destination::File(PathBuf::from("/site/index.html"))
    );

    assert_eq!(operation.execute().unwrap(), None);
    let written = system.read_to_string(Path::new("/site/index.html")).unwrap();
    assert!(written.contains("<div id=\"branch-list\"><ul>\n"));
    assert!(written.ends_with("</ul></div></body>\n"));
}

#[test]
fn test_output_file() {
    let system = site().with_dir("/public");
    let operation = GenerateOperation::new(args(&["--output", "/public/index.html"]), &system).unwrap();

    operation.execute().unwrap();
    let written = system.read_to_string(Path::new("/public/index.html")).unwrap();
    assert!(written.contains("https://x/tree/dev"));
}

#[test]
fn test_output_into_missing_directory() {
    let system = site();
    let operation = GenerateOperation::new(args(&["--output", "/nowhere/index.html"]), &system).unwrap();

    let err = operation.execute().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PageError>(),
        Some(PageError::Filesystem { .. })
    ));
}

#[test]
fn test_dry_run_writes_nothing() {
    let system = site();
    let operation = GenerateOperation::new(args(&["--in-place", "--dry-run"]), &system).unwrap();

    assert_eq!(operation.execute().unwrap(), None);
    assert_eq!(system.read_to_string(Path::new("/site/index.html")).unwrap(), PAGE);
}

#[test]
fn test_fragment_html() {
    let system = site();
    let operation = GenerateOperation::new(args(&["--fragment"]), &system).unwrap();

    let output = operation.execute().unwrap().unwrap();
    assert!(output.starts_with("<ul>\n"));
    assert!(output.ends_with("</ul>\n"));
}

#[test]
fn test_fragment_json() {
    let system = site();
    let operation =
        GenerateOperation::new(args(&["--fragment", "--output-format", "json"]), &system).unwrap();

    let output = operation.execute().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["items"][1]["link"]["href"], "https://x/tree/dev");
}

#[test]
fn test_fragment_does_not_need_a_page() {
    let system = MockSystem::new()
        .with_file(
            "/site/config.json",
            br#"{"branches": "branches.txt", "root": "", "prefix": ""}"#,
        )
        .with_file("/site/branches.txt", b"main\n");

    let operation = GenerateOperation::new(args(&["--fragment"]), &system).unwrap();
    let output = operation.execute().unwrap().unwrap();
    assert!(output.contains("<a href=\"main\">main</a>"));
}

#[test]
fn test_fragment_in_place_rejected() {
    let system = site();
    let err = GenerateOperation::new(args(&["--fragment", "--in-place"]), &system)
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<PageError>(),
        Some(PageError::Configuration { .. })
    ));
}

#[test]
fn test_missing_page() {
    let system = MockSystem::new();
    let err = GenerateOperation::new(args(&[]), &system).err().unwrap();
    assert!(err.to_string().contains("Page not found"));
}

#[test]
fn test_invalid_base_url() {
    let system = site();
    let err = GenerateOperation::new(args(&["--base-url", "ftp://example.com/"]), &system)
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<PageError>(),
        Some(PageError::Configuration { .. })
    ));
}

#[test]
fn test_base_url_redirects_fetches() {
    let system = site().with_url(
        "https://example.com/config.json",
        r#"{"branches": "remote.txt", "root": "https://r/", "prefix": ""}"#,
    )
    .with_url("https://example.com/remote.txt", "live\n");

    let operation =
        GenerateOperation::new(args(&["--base-url", "https://example.com/"]), &system).unwrap();
    let output = operation.execute().unwrap().unwrap();
    assert!(output.contains("<a href=\"https://r/live\">live</a>"));
}
