use crate::Attribute;

/// A node in an HTML tree.
///
/// Children are owned by their parent, so a tree is a plain value: it can be cloned,
/// compared and shared between threads, and is never modified by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node {
    /// A text node. The text is escaped when rendered.
    Text {
        /// The unescaped text.
        text: String,
    },
    /// A void element, such as `<br>`, rendered without a closing tag.
    Void {
        /// The name of the tag.
        tag: String,
        /// The attributes of the tag.
        attributes: Vec<Attribute>,
    },
    /// An element with a closing tag and zero or more children.
    Content {
        /// The name of the tag.
        tag: String,
        /// The attributes of the tag.
        attributes: Vec<Attribute>,
        /// The children of the tag.
        children: Vec<Node>,
    },
}

/// Create a text node.
pub fn text(text: impl Into<String>) -> Node {
    Node::Text { text: text.into() }
}

/// Create a void element. It is never given a closing tag, whatever `tag` is.
pub fn open_node(tag: impl Into<String>, attributes: impl IntoIterator<Item = Attribute>) -> Node {
    Node::Void {
        tag: tag.into(),
        attributes: attributes.into_iter().collect(),
    }
}

/// Create an element with children.
///
/// The tag name is trusted and written out as-is.
pub fn node(
    tag: impl Into<String>,
    children: impl IntoIterator<Item = Node>,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Node {
    Node::Content {
        tag: tag.into(),
        attributes: attributes.into_iter().collect(),
        children: children.into_iter().collect(),
    }
}

impl Node {
    /// Get the tag name of the node, if it is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Text { .. } => None,
            Node::Void { tag, .. } | Node::Content { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get the attributes of the node. Text nodes have none.
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Node::Text { .. } => &[],
            Node::Void { attributes, .. } | Node::Content { attributes, .. } => {
                attributes.as_slice()
            }
        }
    }

    /// Get the children of the node. Only [`Content`] nodes have any.
    ///
    /// [`Content`]: Node::Content
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Content { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Get the unescaped text of this node and all of its descendants, in document order.
    pub fn inner_text(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, result: &mut String) {
        match self {
            Node::Text { text } => result.push_str(text),
            Node::Void { .. } => {}
            Node::Content { children, .. } => {
                for child in children {
                    child.collect_text(result);
                }
            }
        }
    }

    /// Returns `true` if the node is [`Text`].
    ///
    /// [`Text`]: Node::Text
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Returns `true` if the node is [`Void`].
    ///
    /// [`Void`]: Node::Void
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void { .. })
    }

    /// Returns `true` if the node is [`Content`].
    ///
    /// [`Content`]: Node::Content
    #[must_use]
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content { .. })
    }

    /// Serialize the tree to pretty-printed JSON, for debugging.
    #[cfg(feature = "dump_tree")]
    pub fn dump_tree(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        text(s)
    }
}
impl From<String> for Node {
    fn from(s: String) -> Self {
        text(s)
    }
}
impl From<&String> for Node {
    fn from(s: &String) -> Self {
        text(s.as_str())
    }
}
