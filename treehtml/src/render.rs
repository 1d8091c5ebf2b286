//! Serialization of [`Node`] trees to HTML text.
//!
//! Output is compact: no whitespace is inserted anywhere. The whole tree is written into
//! one growing buffer, which is returned once at the end.

use std::fmt;

use crate::attribute::write_attribute_list;
use crate::escape::push_escaped_text;
use crate::{Attribute, Node};

/// The prefix written by [`render_document`].
pub const DOCTYPE: &str = "<!doctype html>";

/// Render a node and all of its descendants to HTML.
///
/// ```
/// use treehtml::{node, render, text, valued};
///
/// let p = node("p", [text("<hello> & more")], [valued("class", "btn\"foo")]);
/// assert_eq!(
///     render(&p),
///     r#"<p class="btn&quot;foo">&lt;hello&gt; &amp; more</p>"#
/// );
/// ```
pub fn render(node: &Node) -> String {
    let mut output = String::new();
    write_node(&mut output, node);
    output
}

/// Render a node as a complete document, prefixed with [`DOCTYPE`].
///
/// The root is not checked; callers pass an `html` element when they want a full document.
pub fn render_document(node: &Node) -> String {
    let mut output = String::from(DOCTYPE);
    write_node(&mut output, node);
    output
}

fn write_node(output: &mut String, node: &Node) {
    match node {
        Node::Text { text } => push_escaped_text(output, text),
        Node::Void { tag, attributes } => {
            write_start_tag(output, tag, attributes);
        }
        Node::Content {
            tag,
            attributes,
            children,
        } => {
            write_start_tag(output, tag, attributes);
            for child in children {
                write_node(output, child);
            }
            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
    }
}

fn write_start_tag(output: &mut String, tag: &str, attributes: &[Attribute]) {
    output.push('<');
    output.push_str(tag);
    write_attribute_list(output, attributes);
    output.push('>');
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
