//! Ambiguous ampersand detection and escaping.
//!
//! [§ 13.1.4 Character references](https://html.spec.whatwg.org/multipage/syntax.html#syntax-ambiguous-ampersand)
//!
//! "An ambiguous ampersand is a U+0026 AMPERSAND character (&) that is
//! followed by one or more ASCII alphanumerics, followed by a U+003B
//! SEMICOLON character (;), where these characters do not match any of the
//! names given in the named character references section."
//!
//! "&ambiguous;" is ambiguous, but "&amp;" is not because "&amp;" is a valid
//! reference.

use std::borrow::Cow;

use super::named_character_references::{Html5ReferenceNames, ReferenceNames};
use super::scanner::{NamedReference, NamedReferenceScanner};

/// The escaped form of an ambiguous ampersand.
pub const HTML_AMP: &str = "&amp;";

/// Returns true if the argument contains an ambiguous ampersand.
///
/// # Example
/// ```
/// use htmlcheck_html::references::has_ambiguous_ampersand;
///
/// assert!(!has_ambiguous_ampersand("this &amp; that"));
/// assert!(!has_ambiguous_ampersand("this & that"));
/// assert!(has_ambiguous_ampersand("Can &what; be one?"));
/// ```
#[must_use]
pub fn has_ambiguous_ampersand(val: &str) -> bool {
    has_ambiguous_ampersand_with(val, &Html5ReferenceNames)
}

/// [`has_ambiguous_ampersand`] against a caller-supplied set of names.
#[must_use]
pub fn has_ambiguous_ampersand_with<N: ReferenceNames + ?Sized>(val: &str, names: &N) -> bool {
    NamedReferenceScanner::new(val).any(|reference| !names.contains(reference.name))
}

/// Every ambiguous ampersand in `val`, in order.
pub fn find_ambiguous_ampersands(val: &str) -> impl Iterator<Item = NamedReference<'_>> {
    find_ambiguous_ampersands_with(val, &Html5ReferenceNames)
}

/// [`find_ambiguous_ampersands`] against a caller-supplied set of names.
pub fn find_ambiguous_ampersands_with<'a, N: ReferenceNames + ?Sized>(
    val: &'a str,
    names: &N,
) -> impl Iterator<Item = NamedReference<'a>> {
    NamedReferenceScanner::new(val).filter(move |reference| !names.contains(reference.name))
}

/// Returns a copy of the argument with ambiguous ampersands escaped with
/// `&amp;`. Only the ampersand is replaced: `&foo;` becomes `&amp;foo;`.
///
/// The input is borrowed back unchanged when nothing needs escaping.
///
/// # Example
/// ```
/// use htmlcheck_html::references::escape_ambiguous_ampersands;
///
/// assert_eq!(
///     escape_ambiguous_ampersands("Who &writes; like this?"),
///     "Who &amp;writes; like this?"
/// );
/// ```
#[must_use]
pub fn escape_ambiguous_ampersands(val: &str) -> Cow<'_, str> {
    escape_ambiguous_ampersands_with(val, &Html5ReferenceNames)
}

/// [`escape_ambiguous_ampersands`] against a caller-supplied set of names.
#[must_use]
pub fn escape_ambiguous_ampersands_with<'a, N: ReferenceNames + ?Sized>(
    val: &'a str,
    names: &N,
) -> Cow<'a, str> {
    // The shortest ambiguous ampersand is three bytes ("&a;"), so the
    // ampersand has to start before the last two.
    let length = val.len();
    if length < 3 {
        return Cow::Borrowed(val);
    }
    match val.find('&') {
        Some(index) if index < length - 2 => {}
        _ => return Cow::Borrowed(val),
    }

    escape_ambiguous_ampersands_buffer(val, names).map_or(Cow::Borrowed(val), Cow::Owned)
}

/// Escape into a freshly allocated string, or `None` if `val` has no
/// ambiguous ampersands.
///
/// The first pass counts the ambiguous ampersands so the output is allocated
/// at its exact final size; the second pass copies the untouched spans.
pub(crate) fn escape_ambiguous_ampersands_buffer<N: ReferenceNames + ?Sized>(
    val: &str,
    names: &N,
) -> Option<String> {
    let mut scanner = NamedReferenceScanner::new(val);

    let count = scanner
        .by_ref()
        .filter(|reference| !names.contains(reference.name))
        .count();
    scanner.reset();

    if count == 0 {
        return None;
    }

    let final_length = val.len() + count * (HTML_AMP.len() - 1);
    let mut escaped = String::with_capacity(final_length);
    let mut src = 0;

    for reference in scanner.filter(|reference| !names.contains(reference.name)) {
        escaped.push_str(&val[src..reference.ampersand_index]);
        escaped.push_str(HTML_AMP);
        // Skip the ampersand; the name and semicolon are copied verbatim.
        src = reference.ampersand_index + 1;
    }
    escaped.push_str(&val[src..]);

    debug_assert_eq!(escaped.len(), final_length);
    Some(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_none_without_ambiguous_ampersands() {
        assert_eq!(escape_ambiguous_ampersands_buffer("&amp; &lt;", &Html5ReferenceNames), None);
        assert_eq!(escape_ambiguous_ampersands_buffer("", &Html5ReferenceNames), None);
    }

    #[test]
    fn test_buffer_is_allocated_at_final_size() {
        let escaped = escape_ambiguous_ampersands_buffer("&a;&b;", &Html5ReferenceNames);
        let escaped = escaped.unwrap_or_default();
        assert_eq!(escaped, "&amp;a;&amp;b;");
        assert_eq!(escaped.capacity(), escaped.len());
    }

    #[test]
    fn test_short_inputs_are_borrowed() {
        for input in ["", "&", "&;", "a&b", "ab&"] {
            assert!(matches!(escape_ambiguous_ampersands(input), Cow::Borrowed(_)));
        }
    }
}
