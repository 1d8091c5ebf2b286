use std::fmt;

use crate::escape::push_escaped_attribute_value;

/// An attribute on an element.
///
/// Names are written out verbatim; values are escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Attribute {
    /// A boolean attribute, such as `disabled`.
    ///
    /// Rendered as the bare name when enabled, and omitted entirely when not.
    Flag {
        /// The name of the attribute.
        name: String,
        /// Whether the attribute is present.
        enabled: bool,
    },
    /// A `name="value"` attribute.
    Valued {
        /// The name of the attribute.
        name: String,
        /// The unescaped value of the attribute.
        value: String,
    },
}

/// Create a boolean attribute that is rendered only when `enabled` is true.
pub fn flag(name: impl Into<String>, enabled: bool) -> Attribute {
    Attribute::Flag {
        name: name.into(),
        enabled,
    }
}

/// Create a `name="value"` attribute. The value is escaped at render time.
pub fn valued(name: impl Into<String>, value: impl Into<String>) -> Attribute {
    Attribute::Valued {
        name: name.into(),
        value: value.into(),
    }
}

/// Create a `class` attribute from `(class, enabled)` pairs.
///
/// Enabled classes are joined with a single space in their original order. If none are
/// enabled the result is an empty `class=""`.
///
/// ```
/// use treehtml::{class_list, render_attribute};
///
/// let attr = class_list([("foo", true), ("bar baz", false), ("bla", true)]);
/// assert_eq!(render_attribute(&attr), r#"class="foo bla""#);
/// ```
pub fn class_list<S: AsRef<str>>(classes: impl IntoIterator<Item = (S, bool)>) -> Attribute {
    let mut joined = String::new();
    for (class, _) in classes.into_iter().filter(|(_, enabled)| *enabled) {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(class.as_ref());
    }
    valued("class", joined)
}

/// Render a single attribute.
///
/// A disabled flag renders as the empty string.
pub fn render_attribute(attribute: &Attribute) -> String {
    let mut output = String::new();
    attribute.write(&mut output);
    output
}

/// Render a list of attributes as the string that follows a tag name.
///
/// Each attribute that renders to something is preceded by a single space, so the result
/// is either empty or starts with exactly one space.
pub fn render_attribute_list(attributes: &[Attribute]) -> String {
    let mut output = String::new();
    write_attribute_list(&mut output, attributes);
    output
}

pub(crate) fn write_attribute_list(output: &mut String, attributes: &[Attribute]) {
    for attribute in attributes.iter().filter(|a| a.is_rendered()) {
        output.push(' ');
        attribute.write(output);
    }
}

impl Attribute {
    /// The name of the attribute.
    pub fn name(&self) -> &str {
        match self {
            Attribute::Flag { name, .. } | Attribute::Valued { name, .. } => name.as_str(),
        }
    }

    /// The unescaped value of the attribute, if it has one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Attribute::Flag { .. } => None,
            Attribute::Valued { value, .. } => Some(value.as_str()),
        }
    }

    /// Returns `false` only for a disabled [`Flag`].
    ///
    /// [`Flag`]: Attribute::Flag
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Attribute::Flag { enabled, .. } => *enabled,
            Attribute::Valued { .. } => true,
        }
    }

    /// Whether rendering this attribute produces any output.
    fn is_rendered(&self) -> bool {
        match self {
            Attribute::Flag { name, enabled } => *enabled && !name.is_empty(),
            Attribute::Valued { .. } => true,
        }
    }

    fn write(&self, output: &mut String) {
        match self {
            Attribute::Flag { name, enabled } => {
                if *enabled {
                    output.push_str(name);
                }
            }
            Attribute::Valued { name, value } => {
                output.push_str(name);
                output.push_str("=\"");
                push_escaped_attribute_value(output, value);
                output.push('"');
            }
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_attribute(self))
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        flag(name, true)
    }
}
impl From<String> for Attribute {
    fn from(name: String) -> Self {
        flag(name, true)
    }
}
impl From<(&str, &str)> for Attribute {
    fn from((name, value): (&str, &str)) -> Self {
        valued(name, value)
    }
}
impl From<(&str, String)> for Attribute {
    fn from((name, value): (&str, String)) -> Self {
        valued(name, value)
    }
}
impl From<(String, String)> for Attribute {
    fn from((name, value): (String, String)) -> Self {
        valued(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_valued() {
        assert_eq!(render_attribute(&valued("id", "main")), r#"id="main""#);
    }

    #[test]
    fn test_render_valued_escapes_value_but_not_name() {
        let attr = valued("data-<x>", r#"a "b" & 'c' <d>"#);
        assert_eq!(
            render_attribute(&attr),
            r#"data-<x>="a &quot;b&quot; &amp; &#39;c&#39; &lt;d&gt;""#
        );
    }

    #[test]
    fn test_render_flag() {
        assert_eq!(render_attribute(&flag("disabled", true)), "disabled");
        assert_eq!(render_attribute(&flag("disabled", false)), "");
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_attribute_list(&[]), "");
    }

    #[test]
    fn test_render_list_has_single_leading_space() {
        let attrs = [valued("id", "x"), flag("hidden", true), valued("class", "a b")];
        assert_eq!(
            render_attribute_list(&attrs),
            r#" id="x" hidden class="a b""#
        );
    }

    #[test]
    fn test_render_list_skips_disabled_flags() {
        let attrs = [
            flag("disabled", false),
            valued("id", "x"),
            flag("checked", false),
            flag("open", true),
            flag("hidden", false),
        ];
        assert_eq!(render_attribute_list(&attrs), r#" id="x" open"#);
    }

    #[test]
    fn test_render_list_of_only_disabled_flags_is_empty() {
        let attrs = [flag("disabled", false), flag("checked", false)];
        assert_eq!(render_attribute_list(&attrs), "");
    }

    #[test]
    fn test_render_list_keeps_duplicates_in_order() {
        let attrs = [
            valued("class", "b"),
            valued("class", "a"),
            flag("x", true),
            flag("x", true),
        ];
        assert_eq!(
            render_attribute_list(&attrs),
            r#" class="b" class="a" x x"#
        );
    }

    #[test]
    fn test_class_list() {
        let attr = class_list([("foo", true), ("bar baz", false), ("bla", true)]);
        assert_eq!(attr, valued("class", "foo bla"));
    }

    #[test]
    fn test_class_list_with_nothing_enabled() {
        let attr = class_list([("foo", false), ("bar", false)]);
        assert_eq!(attr, valued("class", ""));
        assert_eq!(render_attribute(&attr), r#"class="""#);

        let attr = class_list(Vec::<(String, bool)>::new());
        assert_eq!(attr, valued("class", ""));
    }

    #[test]
    fn test_class_list_with_owned_strings() {
        let classes = vec![("card".to_string(), true), ("active".to_string(), true)];
        assert_eq!(class_list(classes), valued("class", "card active"));
    }

    #[test]
    fn test_accessors() {
        let attr = valued("href", "/home");
        assert_eq!(attr.name(), "href");
        assert_eq!(attr.value(), Some("/home"));
        assert!(attr.is_enabled());

        let attr = flag("disabled", false);
        assert_eq!(attr.name(), "disabled");
        assert_eq!(attr.value(), None);
        assert!(!attr.is_enabled());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Attribute::from("hidden"), flag("hidden", true));
        assert_eq!(Attribute::from(("id", "x")), valued("id", "x"));
        assert_eq!(
            Attribute::from(("id".to_string(), "x".to_string())),
            valued("id", "x")
        );
    }

    #[test]
    fn test_display_matches_render() {
        let attr = valued("title", "a & b");
        assert_eq!(attr.to_string(), render_attribute(&attr));
        assert_eq!(flag("open", false).to_string(), "");
    }
}
