//! Construction of the branch link list

use crate::config::Config;
use crate::config::validation::url_unsafe_chars;
use crate::operations::branches::BranchName;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::borrow::Cow;
use tracing::warn;

/// A hyperlink: visible text and target address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// One list entry, wrapping exactly one link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub link: Link,
}

/// An unordered list of branch links, in branch list order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedList {
    pub items: Vec<ListItem>,
}

/// Address a branch links to: `root`, `prefix` and the name, concatenated as-is
#[must_use]
pub fn link_href(config: &Config, branch: &BranchName) -> String {
    format!("{}{}{}", config.root, config.prefix, branch)
}

/// Build the list for `branches`, one item per branch
///
/// Names are not URL-encoded. A name with characters that need encoding is
/// logged as a warning and used unchanged.
#[must_use]
pub fn render_list(branches: &[BranchName], config: &Config) -> RenderedList {
    let items = branches
        .iter()
        .map(|branch| {
            let unsafe_chars = url_unsafe_chars(branch.as_str());
            if !unsafe_chars.is_empty() {
                warn!(
                    "Branch '{}' contains characters that are not URL-safe ({:?}); link is used unencoded",
                    branch, unsafe_chars
                );
            }

            ListItem {
                link: Link {
                    text: branch.to_string(),
                    href: link_href(config, branch),
                },
            }
        })
        .collect();

    RenderedList { items }
}

impl RenderedList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Markup for the list, one `<li>` per line
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<ul>\n");
        for item in &self.items {
            html.push_str("<li><a href=\"");
            html.push_str(&escape_html(&item.link.href));
            html.push_str("\">");
            html.push_str(&escape_html(&item.link.text));
            html.push_str("</a></li>\n");
        }
        html.push_str("</ul>");
        html
    }

    /// Pretty-printed JSON form of the list
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list cannot be serialized
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize branch list to JSON")
    }
}

/// Escape text for use in element content or a double-quoted attribute
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
