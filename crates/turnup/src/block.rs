//! Block segmentation, classification, and conversion.
//!
//! A block is a blank-line-delimited top-level unit of a Markdown
//! document. Blocks are classified by their first line only and converted
//! to parent subtrees, invoking the inline tokenizer for contents that may
//! carry inline spans.

use turnup_core::HtmlNode;

use crate::inline::tokenize;
use crate::Result;

/// The kind of a top-level Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1-6
    Heading(u8),
    /// Fenced code block
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are separated by a blank line (two consecutive newlines); order
/// is preserved.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block; the first matching rule wins.
///
/// The decision is single-pass over the block's first line, no
/// backtracking. A block that starts like a heading classifies as a
/// heading even if later lines look like list items.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }
    if block.len() > 6 && block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }
    if block.starts_with('>') {
        return BlockKind::Quote;
    }
    if is_unordered_marker(block) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_marker(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// 1-6 leading `#` followed by whitespace.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    match block.as_bytes().get(hashes) {
        Some(b) if b.is_ascii_whitespace() => Some(hashes as u8),
        _ => None,
    }
}

/// `*` or `-` followed by whitespace.
fn is_unordered_marker(block: &str) -> bool {
    let bytes = block.as_bytes();
    matches!(bytes.first(), Some(b'*') | Some(b'-'))
        && bytes.get(1).is_some_and(|b| b.is_ascii_whitespace())
}

/// One or more digits, a `.`, then whitespace.
fn is_ordered_marker(block: &str) -> bool {
    let digits = block.bytes().take_while(|b| b.is_ascii_digit()).count();
    digits > 0
        && block.as_bytes().get(digits) == Some(&b'.')
        && block
            .as_bytes()
            .get(digits + 1)
            .is_some_and(|b| b.is_ascii_whitespace())
}

/// Convert a classified block to its parent subtree.
pub fn block_to_node(block: &str) -> Result<HtmlNode> {
    match classify(block) {
        BlockKind::Paragraph => Ok(HtmlNode::parent("p", inline_children(block)?)),

        BlockKind::Heading(level) => {
            // The marker is `level` hashes plus one whitespace character.
            let content = &block[usize::from(level) + 1..];
            Ok(HtmlNode::parent(format!("h{level}"), inline_children(content)?))
        }

        BlockKind::Code => {
            let content = &block[3..block.len() - 3];
            let code = HtmlNode::parent("code", inline_children(content)?);
            Ok(HtmlNode::parent("pre", vec![code]))
        }

        BlockKind::Quote => {
            let quote = block
                .split('\n')
                .map(|line| line.strip_prefix('>').unwrap_or(line))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(HtmlNode::parent("blockquote", inline_children(&quote)?))
        }

        BlockKind::UnorderedList => {
            let items = block
                .split('\n')
                .map(|line| list_item(line.get(2..).unwrap_or("")))
                .collect::<Result<Vec<_>>>()?;
            Ok(HtmlNode::parent("ul", items))
        }

        BlockKind::OrderedList => {
            let items = block
                .split('\n')
                .map(|line| list_item(strip_ordered_marker(line)))
                .collect::<Result<Vec<_>>>()?;
            Ok(HtmlNode::parent("ol", items))
        }
    }
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", inline_children(text)?))
}

/// Strip `N. ` from a list line: everything through the first `.` plus the
/// following character.
fn strip_ordered_marker(line: &str) -> &str {
    match line.find('.') {
        Some(dot) => line.get(dot + 2..).unwrap_or(""),
        None => line,
    }
}

/// Tokenize every line of a block's content and wrap the resulting nodes
/// in a single `div` parent.
///
/// The one-`div` wrapper across all lines is deliberate output policy.
/// Tokenizing an empty line yields one empty plain span, so the wrapper
/// always has at least one child.
pub(crate) fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    let mut nodes = Vec::new();
    for line in text.split('\n') {
        for span in tokenize(line)? {
            nodes.push(span.to_node());
        }
    }
    Ok(vec![HtmlNode::parent("div", nodes)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment() {
        let markdown = "
                # This is a heading

                This is a paragraph of text. It has some **bold** and *italic* words.

                * This is the first list item in a list block
                * This is a list item
                * This is another list item
            ";
        let blocks = segment(markdown);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("# "));
    }

    #[test]
    fn test_segment_empty_document() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_classify_heading() {
        assert_eq!(classify("### a title"), BlockKind::Heading(3));
        assert_eq!(classify("# h1"), BlockKind::Heading(1));
        assert_eq!(classify("###### h6"), BlockKind::Heading(6));
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(classify("```\nsome code  \n```"), BlockKind::Code);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(classify("> to be or not to be"), BlockKind::Quote);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(classify("* item 1\n* item 2"), BlockKind::UnorderedList);
        assert_eq!(classify("- item 1\n- item 2"), BlockKind::UnorderedList);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(classify("1. item 1\n2. item 2"), BlockKind::OrderedList);
        assert_eq!(classify("10. item"), BlockKind::OrderedList);
    }

    #[test]
    fn test_classify_paragraph_fallbacks() {
        assert_eq!(classify("```\nan unclosed fence  "), BlockKind::Paragraph);
        assert_eq!(classify("*item 1\n- item 2"), BlockKind::Paragraph);
        assert_eq!(classify("1.item 1\n2. "), BlockKind::Paragraph);
        assert_eq!(classify("###"), BlockKind::Paragraph);
        assert_eq!(classify("####### seven hashes"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_is_first_line_only() {
        // Starts like a heading, later line looks like a list item.
        assert_eq!(classify("# title\n* not a list"), BlockKind::Heading(1));
    }

    #[test]
    fn test_paragraph_node() {
        let node = block_to_node("plain words").unwrap();
        assert_eq!(node.render().unwrap(), "<p><div>plain words</div></p>");
    }

    #[test]
    fn test_heading_node() {
        let node = block_to_node("## Section").unwrap();
        assert_eq!(node.render().unwrap(), "<h2><div>Section</div></h2>");
    }

    #[test]
    fn test_code_node() {
        let node = block_to_node("```\nlet x = 1;\n```").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<pre><code><div>let x = 1;</div></code></pre>"
        );
    }

    #[test]
    fn test_quote_node() {
        let node = block_to_node("> first\n> second").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<blockquote><div> first second</div></blockquote>"
        );
    }

    #[test]
    fn test_unordered_list_node() {
        let node = block_to_node("* item 1\n* item 2").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<ul><li><div>item 1</div></li><li><div>item 2</div></li></ul>"
        );
    }

    #[test]
    fn test_ordered_list_node() {
        let node = block_to_node("1. first\n2. second\n10. tenth").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<ol><li><div>first</div></li><li><div>second</div></li><li><div>tenth</div></li></ol>"
        );
    }

    #[test]
    fn test_inline_spans_inside_list_items() {
        let node = block_to_node("* plain **bold**").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<ul><li><div>plain <b>bold</b></div></li></ul>"
        );
    }
}
