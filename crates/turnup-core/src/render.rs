//! HTML tree rendering
//!
//! Converts an [`HtmlNode`] tree into HTML text.

use crate::ast::{Attributes, HtmlNode};
use crate::RenderError;

impl HtmlNode {
    /// Render this node and its descendants to an HTML string.
    ///
    /// Fails with [`RenderError`] on trees that violate the construction
    /// invariants: a parent without a tag, or a parent without children.
    /// The root `body` of an empty document is the one parent allowed to
    /// render without children.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut output = String::with_capacity(256);
        render_node(self, &mut output)?;
        Ok(output)
    }
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<(), RenderError> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            match tag {
                Some(tag) => {
                    out.push('<');
                    out.push_str(tag);
                    out.push_str(&render_attributes(attrs));
                    out.push('>');
                    out.push_str(value);
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
                // An untagged leaf is a plain text run.
                None => out.push_str(value),
            }
            Ok(())
        }

        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            if tag.is_empty() {
                return Err(RenderError::MissingTag);
            }
            // An empty document produces <body></body>.
            if children.is_empty() && tag != "body" {
                return Err(RenderError::EmptyParent(tag.clone()));
            }

            out.push('<');
            out.push_str(tag);
            out.push_str(&render_attributes(attrs));
            out.push('>');
            for child in children {
                render_node(child, out)?;
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            Ok(())
        }
    }
}

/// Render an attribute map as ` key="value"` pairs in insertion order.
///
/// Returns the empty string for an empty map. Values are escaped so the
/// output always stays inside the quotes.
pub fn render_attributes(attrs: &Attributes) -> String {
    let mut result = String::new();
    for (name, value) in attrs {
        result.push(' ');
        result.push_str(name);
        result.push_str("=\"");
        result.push_str(&escape_attribute(value));
        result.push('"');
    }
    result
}

/// Escape an HTML attribute value.
fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
