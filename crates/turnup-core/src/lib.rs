//! turnup-core - HTML node tree and rendering
//!
//! This crate provides the core data structures and rendering for HTML
//! documents. It is used by `turnup` (the Markdown parsing pipeline) and
//! `turnup-site` (the static-site generator).
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──parsing──▶ ┌───────────────┐
//!                              │               │
//!                              │ HtmlNode tree │ ──▶ HTML String
//!                              │               │
//!                              └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use turnup_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! let html = tree.render().unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod ast;
mod render;

pub use ast::{Attributes, HtmlNode};
pub use render::render_attributes;

/// Error type for tree rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A parent node had no children. Only the root `body` of an empty
    /// document may render without children.
    #[error("parent element <{0}> has no children")]
    EmptyParent(String),

    /// A parent node had an empty tag.
    #[error("parent element has no tag")]
    MissingTag,
}
