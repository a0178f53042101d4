//! HTML page held as text
//!
//! Only as much of HTML is understood as is needed to find an element by id
//! and the end tag that closes it. Comments and the bodies of `<script>`,
//! `<style>`, `<textarea>` and `<title>` are skipped so markup-looking text
//! inside them is never matched.

use super::Page;
use crate::error::PageError;
use crate::operations::render::RenderedList;
use crate::system::System;
use anyhow::Result;
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Elements that never have children or an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An HTML document the branch list is appended into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    source: String,
}

/// A start or end tag found in the document
#[derive(Debug)]
struct Tag {
    span: Range<usize>,
    name: String,
    closing: bool,
    self_closing: bool,
    id: Option<String>,
}

impl HtmlPage {
    #[must_use]
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a page from disk
    ///
    /// # Errors
    ///
    /// Returns a `PageError::Filesystem` if the file cannot be read.
    pub fn load(system: &dyn System, path: &Path) -> Result<Self> {
        let source = system.read_to_string(path).map_err(|e| {
            return PageError::filesystem(format!("Failed to read page {}: {e}", path.display()));
        })?;
        Ok(Self::new(source))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.source
    }

    /// Whether an element with this id exists
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The markup scanner cannot be built
    pub fn has_element(&self, id: &str) -> Result<bool> {
        let tags = scan_tags(&self.source)?;
        Ok(tags
            .iter()
            .any(|tag| !tag.closing && tag.id.as_deref() == Some(id)))
    }

    /// Offset of the end tag closing the element with this id
    fn insertion_point(&self, id: &str) -> Result<usize> {
        let tags = scan_tags(&self.source)?;

        let Some(open_index) = tags
            .iter()
            .position(|tag| !tag.closing && tag.id.as_deref() == Some(id))
        else {
            return Err(PageError::page(format!("No element with id '{id}' found in page")).into());
        };

        let mut remaining = tags.iter().skip(open_index);
        let Some(open) = remaining.next() else {
            return Err(PageError::page(format!("No element with id '{id}' found in page")).into());
        };

        if open.self_closing || VOID_ELEMENTS.contains(&open.name.as_str()) {
            return Err(PageError::page(format!(
                "Element '#{id}' is an empty <{}> element and cannot contain the branch list",
                open.name
            ))
            .into());
        }

        let mut depth = 0_usize;
        for tag in remaining.filter(|tag| tag.name == open.name) {
            if tag.closing {
                if depth == 0 {
                    return Ok(tag.span.start);
                }
                depth -= 1;
            } else if !tag.self_closing {
                depth += 1;
            }
        }

        Err(PageError::page(format!(
            "Element '#{id}' has no closing </{}> tag",
            open.name
        ))
        .into())
    }
}

impl Page for HtmlPage {
    fn append_list(&mut self, target_id: &str, list: &RenderedList) -> Result<()> {
        let position = self.insertion_point(target_id)?;
        self.source.insert_str(position, &list.to_html());
        debug!(
            "Appended list of {} item(s) into '#{}' at offset {}",
            list.len(),
            target_id,
            position
        );
        Ok(())
    }
}

/// Find every start and end tag outside comments and raw-text elements
fn scan_tags(source: &str) -> Result<Vec<Tag>> {
    let opaque = Regex::new(concat!(
        r"(?is)<!--.*?-->",
        r"|<script\b[^>]*>.*?</script\s*>",
        r"|<style\b[^>]*>.*?</style\s*>",
        r"|<textarea\b[^>]*>.*?</textarea\s*>",
        r"|<title\b[^>]*>.*?</title\s*>",
    ))?;
    let tag = Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9:-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)?;
    let attribute =
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)?;

    // Stretches of markup between opaque regions
    let mut gaps = Vec::new();
    let mut cursor = 0;
    for skipped in opaque.find_iter(source) {
        gaps.push(cursor..skipped.start());
        cursor = skipped.end();
    }
    gaps.push(cursor..source.len());

    let mut tags = Vec::new();
    for gap in gaps {
        let Some(text) = source.get(gap.clone()) else {
            continue;
        };
        for caps in tag.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let attributes = caps.get(3).map_or("", |m| m.as_str());
            tags.push(Tag {
                span: (gap.start + whole.start())..(gap.start + whole.end()),
                name: caps.get(2).map_or("", |m| m.as_str()).to_ascii_lowercase(),
                closing: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
                self_closing: attributes.trim_end().ends_with('/'),
                id: attribute_value(&attribute, attributes, "id"),
            });
        }
    }

    Ok(tags)
}

/// Value of the named attribute, if present
fn attribute_value(attribute: &Regex, attributes: &str, name: &str) -> Option<String> {
    attribute.captures_iter(attributes).find_map(|caps| {
        let key = caps.get(1)?;
        if !key.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());
        Some(value.to_owned())
    })
}
