//! Stateless tree-to-text serializer.
//!
//! Walks an [`XmlNode`] tree and produces pretty-printed UTF-8 markup with a
//! text declaration, two-space indentation, and escaped text and attribute
//! values. Empty elements render self-closing.

use core::fmt::Write;

use crate::node::{XmlContent, XmlNode};

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const INDENT: &str = "  ";

/// Serialize a document rooted at `root`.
pub fn write_document(root: &XmlNode) -> String {
    let mut out = String::from(DECLARATION);
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &XmlNode, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    out.push('<');
    out.push_str(node.name());
    for (name, value) in node.attributes() {
        // Infallible: writing into a String.
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }

    match node.content() {
        XmlContent::Empty => {
            out.push_str("/>\n");
        }
        XmlContent::Text(text) => {
            let _ = write!(out, ">{}</{}>\n", escape_text(text), node.name());
        }
        XmlContent::Children(children) => {
            out.push_str(">\n");
            for child in children {
                write_node(out, child, depth + 1);
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
            let _ = write!(out, "</{}>\n", node.name());
        }
    }
}

fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
