//! HTML node tree
//!
//! This module defines the node type for representing HTML documents.
//! The tree is the common output format of the Markdown parsing pipeline
//! and is turned into text by [`HtmlNode::render`](crate::HtmlNode::render).

use indexmap::IndexMap;

/// Attribute map with insertion order preserved.
pub type Attributes = IndexMap<String, String>;

/// A node in an HTML document tree.
///
/// A node is either a leaf carrying text or a parent carrying children,
/// never both. Each node exclusively owns its children, so the tree has
/// no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text content, optionally wrapped in a tag.
    ///
    /// A leaf without a tag renders as its value verbatim and is used for
    /// plain text runs between styled spans.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },

    /// An element with ordered children and no direct text value.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged leaf holding plain text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: collect_attrs(attrs),
        }
    }

    /// Create a parent node.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Create a parent node with attributes.
    pub fn parent_with_attrs(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attrs: collect_attrs(attrs),
        }
    }

    /// Check if this is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Check if this is a parent node.
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }

    /// Get the tag name, if the node has one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let attrs = match self {
            Self::Leaf { attrs, .. } => attrs,
            Self::Parent { attrs, .. } => attrs,
        };
        attrs.get(name).map(String::as_str)
    }

    /// Get the children of a parent node; a leaf has none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
