//! Tag name checks.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#syntax-tag-name)
//!
//! "Tags contain a tag name, giving the element's name. HTML elements all
//! have names that only use ASCII alphanumerics. In the HTML syntax, tag
//! names, even those for foreign elements, may be written with any mix of
//! lower- and uppercase letters that, when converted to all-lowercase,
//! matches the element's tag name; tag names are case-insensitive."

use std::collections::HashSet;
use std::sync::LazyLock;

/// The elements defined by HTML5, lowercase.
static HTML_ELEMENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
        "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
        "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
        "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
        "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input",
        "ins", "kbd", "keygen", "label", "legend", "li", "link", "main", "map", "mark", "menu",
        "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option", "output", "p",
        "param", "pre", "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "section",
        "select", "small", "source", "span", "strong", "style", "sub", "summary", "sup", "table",
        "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr",
        "track", "u", "ul", "var", "video", "wbr",
    ])
});

/// Returns true if the argument *can be* a valid HTML5 tag name: one or more
/// ASCII alphanumerics.
///
/// This checks the structural syntax only. Use [`is_html_tag_name`] to see
/// whether the argument names an element HTML defines.
#[must_use]
pub fn is_valid_html_tag_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if the argument names an HTML5 element, ignoring ASCII case.
///
/// # Example
/// ```
/// use htmlcheck_html::tags::is_html_tag_name;
///
/// assert!(is_html_tag_name("TEXTAREA"));
/// assert!(!is_html_tag_name("tuesday"));
/// ```
#[must_use]
pub fn is_html_tag_name(name: &str) -> bool {
    if !is_valid_html_tag_name(name) {
        return false;
    }
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        HTML_ELEMENTS.contains(name.to_ascii_lowercase().as_str())
    } else {
        HTML_ELEMENTS.contains(name)
    }
}
