//! One constructor per commonly used attribute.
//!
//! String attributes wrap [`valued`], boolean attributes wrap [`flag`], and numeric
//! attributes format their argument in base 10 before wrapping [`valued`]. Names that
//! clash with Rust keywords or contain a dash get an adjusted function name, such as
//! [`type_`] and [`http_equiv`].

use crate::{flag, valued, Attribute};

macro_rules! string_attributes {
    ($($fn_ident:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Create a `", $name, "=\"...\"` attribute.")]
            pub fn $fn_ident(value: impl Into<String>) -> Attribute {
                valued($name, value)
            }
        )*
    };
}
string_attributes! {
    accept => "accept",
    accept_charset => "accept-charset",
    accesskey => "accesskey",
    action => "action",
    alt => "alt",
    autocomplete => "autocomplete",
    charset => "charset",
    cite => "cite",
    class => "class",
    content => "content",
    contenteditable => "contenteditable",
    coords => "coords",
    crossorigin => "crossorigin",
    datetime => "datetime",
    dir => "dir",
    download => "download",
    draggable => "draggable",
    enctype => "enctype",
    for_ => "for",
    form => "form",
    formaction => "formaction",
    headers => "headers",
    href => "href",
    hreflang => "hreflang",
    http_equiv => "http-equiv",
    id => "id",
    inputmode => "inputmode",
    integrity => "integrity",
    kind => "kind",
    label => "label",
    lang => "lang",
    list => "list",
    loading => "loading",
    manifest => "manifest",
    max => "max",
    media => "media",
    method => "method",
    min => "min",
    name => "name",
    pattern => "pattern",
    ping => "ping",
    placeholder => "placeholder",
    poster => "poster",
    preload => "preload",
    referrerpolicy => "referrerpolicy",
    rel => "rel",
    role => "role",
    sandbox => "sandbox",
    scope => "scope",
    shape => "shape",
    sizes => "sizes",
    spellcheck => "spellcheck",
    src => "src",
    srcdoc => "srcdoc",
    srclang => "srclang",
    srcset => "srcset",
    step => "step",
    style => "style",
    target => "target",
    title => "title",
    translate => "translate",
    type_ => "type",
    usemap => "usemap",
    value => "value",
    wrap => "wrap",
}

macro_rules! flag_attributes {
    ($($fn_ident:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Create a boolean `", $name, "` attribute, omitted when `enabled` is false.")]
            pub fn $fn_ident(enabled: bool) -> Attribute {
                flag($name, enabled)
            }
        )*
    };
}
flag_attributes! {
    allowfullscreen => "allowfullscreen",
    async_ => "async",
    autofocus => "autofocus",
    autoplay => "autoplay",
    checked => "checked",
    controls => "controls",
    default => "default",
    defer => "defer",
    disabled => "disabled",
    formnovalidate => "formnovalidate",
    hidden => "hidden",
    inert => "inert",
    ismap => "ismap",
    loop_ => "loop",
    multiple => "multiple",
    muted => "muted",
    nomodule => "nomodule",
    novalidate => "novalidate",
    open => "open",
    playsinline => "playsinline",
    readonly => "readonly",
    required => "required",
    reversed => "reversed",
    selected => "selected",
}

macro_rules! numeric_attributes {
    ($($fn_ident:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Create a numeric `", $name, "=\"...\"` attribute.")]
            pub fn $fn_ident(value: i64) -> Attribute {
                valued($name, value.to_string())
            }
        )*
    };
}
numeric_attributes! {
    cols => "cols",
    colspan => "colspan",
    height => "height",
    high => "high",
    low => "low",
    maxlength => "maxlength",
    minlength => "minlength",
    optimum => "optimum",
    rows => "rows",
    rowspan => "rowspan",
    size => "size",
    span => "span",
    start => "start",
    tabindex => "tabindex",
    width => "width",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_attribute_list;

    #[test]
    fn test_string_attributes() {
        assert_eq!(href("/a?b=1&c=2"), valued("href", "/a?b=1&c=2"));
        assert_eq!(type_("text"), valued("type", "text"));
        assert_eq!(http_equiv("refresh"), valued("http-equiv", "refresh"));
        assert_eq!(for_("email"), valued("for", "email"));
    }

    #[test]
    fn test_flag_attributes() {
        assert_eq!(disabled(true), flag("disabled", true));
        assert_eq!(async_(true), flag("async", true));
        assert_eq!(
            render_attribute_list(&[disabled(false), checked(true), loop_(false)]),
            " checked"
        );
    }

    #[test]
    fn test_numeric_attributes() {
        assert_eq!(width(640), valued("width", "640"));
        assert_eq!(tabindex(-1), valued("tabindex", "-1"));
        assert_eq!(
            render_attribute_list(&[colspan(2), rowspan(0)]),
            r#" colspan="2" rowspan="0""#
        );
    }
}
