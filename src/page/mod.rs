//! Page document module
//!
//! The page is handed to the bootstrap explicitly; nothing reaches for a global document.

pub mod html;

pub use html::HtmlPage;

use crate::operations::render::RenderedList;
use anyhow::Result;

/// A document that can receive the rendered list
pub trait Page {
    /// Append `list` as the last child of the element whose id is `target_id`
    ///
    /// # Errors
    ///
    /// Returns a `PageError::Page` if no such element exists or it cannot hold children.
    fn append_list(&mut self, target_id: &str, list: &RenderedList) -> Result<()>;
}
