#![deny(missing_docs)]
//! A crate for building HTML trees out of plain function calls and rendering them to
//! escaped, compact HTML.
//!
//! A tree is made of [Node]s created with [text], [node] and [open_node], carrying
//! [Attribute]s created with [valued], [flag] and [class_list]. [render] turns a tree into
//! a string, and [render_document] does the same with a leading `<!doctype html>`.
//!
//! Text is escaped for `<`, `>` and `&`; attribute values additionally escape both kinds
//! of quote. Tag and attribute names are written out as given.
//!
//! The [tags] and [attributes] modules provide a shorthand for every common tag and
//! attribute.
//!
//! # Example
//!
//! ```
//! use treehtml::{class_list, flag, node, open_node, render_document, text, valued};
//!
//! let page = node(
//!     "html",
//!     [node(
//!         "body",
//!         [
//!             node("h1", [text("Fish & Chips")], [class_list([("title", true), ("muted", false)])]),
//!             open_node("input", [valued("name", "q"), flag("disabled", false)]),
//!         ],
//!         [],
//!     )],
//!     [valued("lang", "en")],
//! );
//! assert_eq!(
//!     render_document(&page),
//!     r#"<!doctype html><html lang="en"><body><h1 class="title">Fish &amp; Chips</h1><input name="q"></body></html>"#
//! );
//! ```

pub mod attributes;
pub mod tags;

mod attribute;
pub use attribute::{class_list, flag, render_attribute, render_attribute_list, valued, Attribute};

mod escape;
pub use escape::{escape_attribute_value, escape_text};

mod node;
pub use node::{node, open_node, text, Node};

mod render;
pub use render::{render, render_document, DOCTYPE};
