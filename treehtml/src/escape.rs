//! Escaping rules for text content and attribute values.
//!
//! Only ASCII characters are ever substituted. Everything else is copied through as whole
//! string slices, so multi-byte characters are never split.

/// Escape text content: `<`, `>` and `&` become entities, quotes are left alone.
pub fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    push_escaped_text(&mut output, text);
    output
}

/// Escape a value that will be placed inside a double-quoted attribute.
///
/// In addition to the text rules, both `"` and `'` are escaped.
pub fn escape_attribute_value(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    push_escaped_attribute_value(&mut output, value);
    output
}

pub(crate) fn push_escaped_text(output: &mut String, text: &str) {
    html_escape::encode_text_to_string(text, output);
}

pub(crate) fn push_escaped_attribute_value(output: &mut String, value: &str) {
    // html-escape leaves `'` alone in double-quoted attributes; we always emit `&#39;`.
    for (idx, segment) in value.split('\'').enumerate() {
        if idx > 0 {
            output.push_str("&#39;");
        }
        html_escape::encode_double_quoted_attribute_to_string(segment, output);
    }
}
