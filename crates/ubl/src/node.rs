//! Explicit XML tree.
//!
//! A node holds a tag name, an ordered attribute list, and either text or
//! ordered child nodes. There is no cursor or builder state; document shape
//! is whatever the tree says it is, and trees compare structurally.

use serde::{Deserialize, Serialize};

/// Node content: empty, a text value, or ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlContent {
    Empty,
    Text(String),
    Children(Vec<XmlNode>),
}

/// One element in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    content: XmlContent,
}

impl XmlNode {
    /// New empty element.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: XmlContent::Empty,
        }
    }

    /// New element holding a text value. Empty text stays `Empty` so the
    /// writer emits a self-closing tag.
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let content = if text.is_empty() {
            XmlContent::Empty
        } else {
            XmlContent::Text(text)
        };
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content,
        }
    }

    /// Append an attribute, preserving insertion order.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element, preserving insertion order.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.push_child(child);
        self
    }

    pub fn push_child(&mut self, child: XmlNode) {
        match &mut self.content {
            XmlContent::Children(children) => children.push(child),
            XmlContent::Empty => self.content = XmlContent::Children(vec![child]),
            XmlContent::Text(_) => {
                // Mixed content never occurs in the fixed document shape;
                // children win over a previously set text value.
                self.content = XmlContent::Children(vec![child]);
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn content(&self) -> &XmlContent {
        &self.content
    }

    /// Text value, if this is a text element.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            XmlContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child elements (empty slice for text/empty nodes).
    pub fn children(&self) -> &[XmlNode] {
        match &self.content {
            XmlContent::Children(children) => children,
            _ => &[],
        }
    }

    /// First child with the given tag name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children().iter().filter(move |c| c.name == name)
    }
}
