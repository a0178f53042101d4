//! Configuration validation logic

use crate::config::Config;
use anyhow::{Result, anyhow};

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - The branch list location is blank
/// - A field contains a line break or other control character
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    if config.branches.trim().is_empty() {
        return Err(anyhow!(
            "Configuration field 'branches' cannot be empty"
        ));
    }

    for (field, value) in [
        ("branches", &config.branches),
        ("root", &config.root),
        ("prefix", &config.prefix),
    ] {
        validate_no_control_chars(field, value)?;
    }

    Ok(())
}

/// Reject values that would break the generated markup
///
/// # Errors
///
/// Returns an error if:
/// - The value contains a control character
#[inline]
pub fn validate_no_control_chars(field: &str, value: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|c| c.is_control()) {
        return Err(anyhow!(
            "Configuration field '{field}' contains a control character ({c:?}): '{}'",
            value.escape_debug()
        ));
    }

    Ok(())
}

/// Characters of a branch name that are not valid as-is in a URL path
///
/// Branch names are concatenated into link addresses without encoding;
/// callers use this to warn about names that will produce odd links.
#[must_use]
pub fn url_unsafe_chars(segment: &str) -> Vec<char> {
    let mut unsafe_chars = Vec::new();
    for c in segment.chars().filter(|&c| !is_url_path_char(c)) {
        if !unsafe_chars.contains(&c) {
            unsafe_chars.push(c);
        }
    }
    unsafe_chars
}

const fn is_url_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';'
                | '=' | ':' | '@' | '/'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_names_with_slashes_are_safe() {
        assert!(url_unsafe_chars("feature/login-v2").is_empty());
        assert!(url_unsafe_chars("release_1.0").is_empty());
    }

    #[test]
    fn test_unsafe_chars_reported_once_each() {
        assert_eq!(url_unsafe_chars("fix #12 and #13"), vec![' ', '#']);
        assert_eq!(url_unsafe_chars("100%"), vec!['%']);
        assert_eq!(url_unsafe_chars("café"), vec!['é']);
    }
}
