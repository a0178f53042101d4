//! Unit tests for JSON configuration loading

use branchpage::config::{Config, ConfigOverrides};
use branchpage::error::PageError;
use branchpage::operations::location::Location;
use branchpage::system::mock::MockSystem;
use std::path::PathBuf;

fn config_at(path: &str) -> Location {
    Location::Path(PathBuf::from(path))
}

fn error_kind(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<PageError>().map(PageError::exit_code)
}

#[test]
fn load_valid_config() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "/b.txt", "root": "https://x/", "prefix": "tree/"}"#,
    );

    let config = Config::load(&system, &config_at("/site/config.json")).unwrap();
    assert_eq!(
        config,
        Config {
            branches: "/b.txt".to_owned(),
            root: "https://x/".to_owned(),
            prefix: "tree/".to_owned(),
        }
    );
}

#[test]
fn load_config_ignores_extra_fields() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "b.txt", "root": "", "prefix": "", "title": "Builds"}"#,
    );

    let config = Config::load(&system, &config_at("/site/config.json")).unwrap();
    assert_eq!(config.branches, "b.txt");
    assert_eq!(config.root, "");
}

#[test]
fn load_config_from_url() {
    let system = MockSystem::new().with_url(
        "https://example.com/config.json",
        r#"{"branches": "b.txt", "root": "https://x/", "prefix": "tree/"}"#,
    );

    let location = Location::Url("https://example.com/config.json".parse().unwrap());
    let config = Config::load(&system, &location).unwrap();
    assert_eq!(config.prefix, "tree/");
    assert_eq!(system.requests(), vec!["https://example.com/config.json"]);
}

#[test]
fn load_nonexistent_file() {
    let system = MockSystem::new();
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(2));
    assert!(err.to_string().contains("Failed to fetch configuration"));
}

#[test]
fn load_invalid_json() {
    let system = MockSystem::new().with_file("/site/config.json", b"{ branches: nope");
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(1));
    assert!(err.to_string().contains("Failed to parse JSON configuration"));
}

#[test]
fn load_config_missing_field() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "b.txt", "root": "https://x/"}"#,
    );
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(1));
    assert!(err.to_string().contains("prefix"));
}

#[test]
fn load_config_wrong_field_type() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "b.txt", "root": 42, "prefix": "tree/"}"#,
    );
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(1));
}

#[test]
fn load_config_not_an_object() {
    let system = MockSystem::new().with_file("/site/config.json", br#"["b.txt"]"#);
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(1));
}

#[test]
fn load_config_blank_branches() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "  ", "root": "https://x/", "prefix": "tree/"}"#,
    );
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(1));
    assert!(err.to_string().contains("'branches' cannot be empty"));
}

#[test]
fn load_config_with_line_break_in_root() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "b.txt", "root": "https://x/\n", "prefix": "tree/"}"#,
    );
    let err = Config::load(&system, &config_at("/site/config.json")).unwrap_err();

    assert_eq!(error_kind(&err), Some(1));
    assert!(err.to_string().contains("control character"));
}

#[test]
fn overrides_fill_missing_fields() {
    let system = MockSystem::new().with_file("/site/config.json", br#"{"branches": "b.txt"}"#);
    let overrides = ConfigOverrides {
        root: Some("https://x/".to_owned()),
        prefix: Some("tree/".to_owned()),
        ..ConfigOverrides::default()
    };

    let config =
        Config::load_with_overrides(&system, &config_at("/site/config.json"), &overrides).unwrap();
    assert_eq!(config.root, "https://x/");
    assert_eq!(config.prefix, "tree/");
}

#[test]
fn overrides_replace_loaded_values() {
    let system = MockSystem::new().with_file(
        "/site/config.json",
        br#"{"branches": "b.txt", "root": "https://x/", "prefix": "tree/"}"#,
    );
    let overrides = ConfigOverrides {
        branches: Some("other.txt".to_owned()),
        ..ConfigOverrides::default()
    };

    let config =
        Config::load_with_overrides(&system, &config_at("/site/config.json"), &overrides).unwrap();
    assert_eq!(config.branches, "other.txt");
    assert_eq!(config.root, "https://x/");
}
