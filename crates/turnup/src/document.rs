//! Document assembly.
//!
//! The entry points that tie the pipeline together: segment a Markdown
//! document into blocks, convert each block to a subtree, and wrap the
//! result in the `html`/`body` root.

use turnup_core::HtmlNode;

use crate::block::{block_to_node, segment};
use crate::{Result, TurnupError};

/// Parse a Markdown document into an HTML node tree.
///
/// An empty document is valid and yields `<html><body></body></html>`.
/// Fails with [`TurnupError::MalformedMarkdown`] on unbalanced inline
/// delimiters anywhere in the document; no partial tree is returned.
pub fn markdown_to_tree(document: &str) -> Result<HtmlNode> {
    let blocks = segment(document)
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent(
        "html",
        vec![HtmlNode::parent("body", blocks)],
    ))
}

/// Parse a Markdown document and render it to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String> {
    Ok(markdown_to_tree(document)?.render()?)
}

/// Extract the document title: the text of the first level-1 heading line.
pub fn extract_title(document: &str) -> Result<String> {
    document
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(TurnupError::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let tree = markdown_to_tree("").unwrap();
        assert_eq!(tree.render().unwrap(), "<html><body></body></html>");
    }

    #[test]
    fn test_full_document() {
        let markdown = "# Title\n\nA paragraph with **bold** text.\n\n* one\n* two";
        let html = markdown_to_html(markdown).unwrap();
        assert_eq!(
            html,
            "<html><body>\
             <h1><div>Title</div></h1>\
             <p><div>A paragraph with <b>bold</b> text.</div></p>\
             <ul><li><div>one</div></li><li><div>two</div></li></ul>\
             </body></html>"
        );
    }

    #[test]
    fn test_block_order_preserved() {
        let markdown = "first\n\nsecond\n\nthird";
        let html = markdown_to_html(markdown).unwrap();
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        let third = html.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_malformed_document_returns_no_tree() {
        assert!(matches!(
            markdown_to_tree("fine\n\nan *unclosed italic"),
            Err(TurnupError::MalformedMarkdown(_))
        ));
    }

    #[test]
    fn test_repeated_parses_agree() {
        let markdown = "# Title\n\n> a quote\n\n```\ncode\n```";
        assert_eq!(
            markdown_to_html(markdown).unwrap(),
            markdown_to_html(markdown).unwrap()
        );
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Hello\nbody").unwrap(), "Hello");
        assert_eq!(extract_title("intro\n\n# Later Title").unwrap(), "Later Title");
        assert_eq!(extract_title("#  padded  ").unwrap(), "padded");
    }

    #[test]
    fn test_extract_title_missing() {
        assert!(matches!(
            extract_title("no heading here"),
            Err(TurnupError::MissingTitle)
        ));
        assert!(matches!(
            extract_title("## only level two"),
            Err(TurnupError::MissingTitle)
        ));
    }
}
