//! One constructor per HTML tag.
//!
//! These are thin wrappers around [`node`] and [`open_node`] with the tag name filled in.
//!
//! ```
//! use treehtml::{attributes::href, render, tags::*, text};
//!
//! let link = p([a([text("home")], [href("/")]), br([])], []);
//! assert_eq!(render(&link), r#"<p><a href="/">home</a><br></p>"#);
//! ```

use crate::{node, open_node, Attribute, Node};

macro_rules! content_tags {
    ($($tag_ident:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($tag_ident), ">` element with children and attributes.")]
            pub fn $tag_ident(
                children: impl IntoIterator<Item = Node>,
                attributes: impl IntoIterator<Item = Attribute>,
            ) -> Node {
                node(stringify!($tag_ident), children, attributes)
            }
        )*
        /// Tags that have a constructor in this module taking children.
        pub const CONTENT_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
content_tags! {
    html, head, title, style, script, noscript, body, main,
    header, footer, nav, section, article, aside, address,
    h1, h2, h3, h4, h5, h6, hgroup, p, pre, blockquote, div, span,
    ol, ul, li, dl, dt, dd, menu, figure, figcaption,
    a, em, strong, small, s, cite, q, dfn, abbr, ruby, rt, rp, data, time,
    code, var, samp, kbd, sub, sup, i, b, u, mark, bdi, bdo, ins, del,
    picture, iframe, object, video, audio, canvas, map, svg, math,
    table, caption, colgroup, thead, tbody, tfoot, tr, td, th,
    form, label, button, select, datalist, optgroup, option, textarea,
    output, progress, meter, fieldset, legend,
    details, summary, dialog, template, slot,
    big, center, font, strike, tt, acronym, marquee,
}

macro_rules! void_tags {
    ($($tag_ident:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($tag_ident), ">` void element with attributes.")]
            pub fn $tag_ident(attributes: impl IntoIterator<Item = Attribute>) -> Node {
                open_node(stringify!($tag_ident), attributes)
            }
        )*
        /// Tags that have a constructor in this module and never take children.
        pub const VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
void_tags! {
    area, base, br, col, embed, hr, img, input, link, meta,
    param, source, track, wbr,
}
