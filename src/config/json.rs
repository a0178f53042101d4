//! JSON configuration loading and parsing

use crate::config::{Config, ConfigOverrides};
use crate::error::PageError;
use crate::operations::location::Location;
use crate::system::System;
use anyhow::Result;
use serde_json::Value;
use tracing::debug;

/// Fetch, parse and validate the configuration document at `location`
///
/// Overrides are applied to the parsed document before it is checked, so a
/// command-line value can stand in for a field the document is missing.
///
/// # Errors
///
/// Returns a `PageError::Fetch` if the document cannot be read, and a
/// `PageError::Configuration` if it is not JSON, is missing a field, or has
/// a field of the wrong type or content.
pub fn load_config(
    system: &dyn System,
    location: &Location,
    overrides: &ConfigOverrides,
) -> Result<Config> {
    debug!("Loading configuration from {}", location);

    let content = system.fetch_text(location).map_err(|e| {
        return PageError::fetch(format!(
            "Failed to fetch configuration from {location}: {e}"
        ));
    })?;

    let mut document: Value = serde_json::from_str(&content).map_err(|e| {
        return PageError::configuration(format!(
            "Failed to parse JSON configuration in {location}: {e}"
        ));
    })?;

    apply_overrides(&mut document, overrides);

    crate::config::schema::validate_against_schema(&document)
        .map_err(|e| PageError::configuration(format!("{location}: {e}")))?;

    let config: Config = serde_json::from_value(document).map_err(|e| {
        return PageError::configuration(format!(
            "Failed to read configuration fields in {location}: {e}"
        ));
    })?;

    config
        .validate()
        .map_err(|e| PageError::configuration(format!("{location}: {e}")))?;

    debug!(
        "Configuration loaded: branches={}, root={}, prefix={}",
        config.branches, config.root, config.prefix
    );

    Ok(config)
}

/// Replace fields of a parsed document with command-line values
///
/// Documents that are not JSON objects are left alone; schema validation
/// rejects them afterwards.
fn apply_overrides(document: &mut Value, overrides: &ConfigOverrides) {
    if overrides.is_empty() {
        return;
    }
    let Value::Object(ref mut fields) = *document else {
        return;
    };

    for (key, value) in [
        ("branches", &overrides.branches),
        ("root", &overrides.root),
        ("prefix", &overrides.prefix),
    ] {
        if let Some(value) = value.as_ref() {
            debug!("Overriding configuration field '{}' from the command line", key);
            fields.insert(key.to_owned(), Value::String(value.clone()));
        }
    }
}
