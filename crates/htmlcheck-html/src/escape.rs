//! Escaping for double-quoted attribute values.
//!
//! [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
//!
//! "the attribute value, which, in addition to the requirements given above
//! for attribute values, must not contain any literal U+0022 QUOTATION MARK
//! characters (")"
//!
//! Ambiguous ampersands are escaped first, then every literal quote becomes
//! `&#34;`. Neither substitution can introduce a match for the other.

use std::borrow::Cow;

use memchr::memchr;

use crate::references::ambiguous::escape_ambiguous_ampersands_buffer;
use crate::references::{Html5ReferenceNames, ReferenceNames};

/// The escaped form of a literal double quote.
pub const HTML_QUOT: &str = "&#34;";

/// Returns the argument with double quotes escaped and with ambiguous
/// ampersands escaped.
///
/// # Example
/// ```
/// use htmlcheck_html::escape_attribute_value_double_quoted;
///
/// assert_eq!(
///     escape_attribute_value_double_quoted(r#"My name is "Franklin"."#),
///     "My name is &#34;Franklin&#34;."
/// );
/// ```
#[must_use]
pub fn escape_attribute_value_double_quoted(val: &str) -> Cow<'_, str> {
    AttributeEscaper::new().escape(val)
}

/// Shorthand for [`escape_attribute_value_double_quoted`].
#[must_use]
pub fn escape_attribute_double_quoted(val: &str) -> Cow<'_, str> {
    escape_attribute_value_double_quoted(val)
}

/// A configurable double-quoted attribute value escaper.
///
/// By default ampersand escaping is only attempted when the first `&` comes
/// before the first `;` in the value. That check is cheap but approximate:
/// in `a; &b;` the ambiguous `&b;` is left alone. [`full_scan`] disables the
/// check so every value with an ampersand is scanned.
///
/// [`full_scan`]: AttributeEscaper::full_scan
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeEscaper<N = Html5ReferenceNames> {
    names: N,
    full_scan: bool,
}

impl AttributeEscaper {
    /// An escaper backed by the HTML5 reference names.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: Html5ReferenceNames,
            full_scan: false,
        }
    }
}

impl<N: ReferenceNames> AttributeEscaper<N> {
    /// An escaper that consults `names` instead of the HTML5 list.
    #[must_use]
    pub fn with_names(names: N) -> Self {
        Self {
            names,
            full_scan: false,
        }
    }

    /// Always scan for ambiguous ampersands, skipping the `&`-before-`;`
    /// pre-filter.
    #[must_use]
    pub fn full_scan(mut self, enabled: bool) -> Self {
        self.full_scan = enabled;
        self
    }

    /// Whether the pre-filter is disabled.
    #[must_use]
    pub const fn is_full_scan(&self) -> bool {
        self.full_scan
    }

    /// Returns true if [`escape`](Self::escape) would look for ambiguous
    /// ampersands in `val`.
    #[must_use]
    pub fn scans_for_ampersands(&self, val: &str) -> bool {
        let bytes = val.as_bytes();
        match memchr(b'&', bytes) {
            None => false,
            Some(_) if self.full_scan => true,
            // An ambiguous ampersand needs a semicolon after it.
            Some(amp) => memchr(b';', bytes).is_some_and(|semi| amp < semi),
        }
    }

    /// Escape `val` for use inside a double-quoted attribute.
    ///
    /// Returns the input unchanged, without allocating, when it holds neither
    /// an ampersand nor a double quote.
    #[must_use]
    pub fn escape<'a>(&self, val: &'a str) -> Cow<'a, str> {
        let bytes = val.as_bytes();
        let has_ampersand = memchr(b'&', bytes).is_some();
        let has_quote = memchr(b'"', bytes).is_some();

        // Heuristic: without a quote or an ampersand there is nothing to do.
        if !has_ampersand && !has_quote {
            return Cow::Borrowed(val);
        }

        let escaped = if self.scans_for_ampersands(val) {
            escape_ambiguous_ampersands_buffer(val, &self.names)
        } else {
            None
        };

        match (escaped, has_quote) {
            (None, false) => Cow::Borrowed(val),
            (Some(escaped), false) => Cow::Owned(escaped),
            (None, true) => Cow::Owned(val.replace('"', HTML_QUOT)),
            (Some(escaped), true) => Cow::Owned(escaped.replace('"', HTML_QUOT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        for input in ["", "a", "\n", "ok fine", "'fine'", "semi; colon"] {
            assert!(matches!(
                escape_attribute_value_double_quoted(input),
                Cow::Borrowed(_)
            ));
        }
    }

    #[test]
    fn test_valid_references_are_borrowed() {
        assert!(matches!(
            escape_attribute_value_double_quoted("&amp; &lt;"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_prefilter() {
        let escaper = AttributeEscaper::new();
        assert!(escaper.scans_for_ampersands("&a;"));
        assert!(!escaper.scans_for_ampersands("a; &b;"));
        assert!(!escaper.scans_for_ampersands("no semicolon &"));
        assert!(!escaper.scans_for_ampersands("none"));

        let escaper = escaper.full_scan(true);
        assert!(escaper.is_full_scan());
        assert!(escaper.scans_for_ampersands("a; &b;"));
        assert!(!escaper.scans_for_ampersands("none"));
    }
}
