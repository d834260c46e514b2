//! # turnup
//!
//! Convert Markdown to an HTML node tree.
//!
//! This crate implements the parsing pipeline used by the turnup
//! static-site generator: inline-span tokenization, block segmentation and
//! classification, and assembly of the resulting `turnup-core` tree.
//!
//! ## Design
//!
//! The pipeline is synchronous and pure: the same input always produces
//! the same tree, there is no I/O and no hidden state, and separate
//! documents can be converted concurrently without coordination.
//!
//! ```text
//! Markdown ──segment──▶ blocks ──classify──▶ block nodes
//!                                   │
//!                                   ▼ per line
//!                          inline spans ──▶ leaf nodes ──▶ HtmlNode tree
//! ```
//!
//! ## Example
//!
//! ```rust
//! use turnup::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text.").unwrap();
//! assert!(html.contains("<h1>"));
//! assert!(html.contains("<b>bold</b>"));
//! ```

mod block;
mod document;
mod inline;

pub use block::{block_to_node, classify, segment, BlockKind};
pub use document::{extract_title, markdown_to_html, markdown_to_tree};
pub use inline::{tokenize, Span};
pub use turnup_core::{HtmlNode, RenderError};

/// Error type for Markdown conversion
#[derive(Debug, thiserror::Error)]
pub enum TurnupError {
    /// A style delimiter appeared an odd number of times in one span of
    /// text. Parsing is deterministic, so the input itself is at fault and
    /// a retry would fail identically.
    #[error("malformed Markdown: {0}")]
    MalformedMarkdown(String),

    /// No level-1 heading line to use as the document title.
    #[error("document has no level-1 heading")]
    MissingTitle,

    /// A construction invariant of the output tree was violated.
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, TurnupError>;
