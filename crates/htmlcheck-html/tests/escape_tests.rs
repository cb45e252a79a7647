//! Integration tests for double-quoted attribute value escaping.

use std::borrow::Cow;

use htmlcheck_html::references::has_ambiguous_ampersand;
use htmlcheck_html::{
    AttributeEscaper, escape_attribute_double_quoted, escape_attribute_value_double_quoted,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn test_escape_attribute_value_double_quoted() {
    let cases = [
        ("", ""),
        ("a", "a"),
        ("\n", "\n"),
        ("ok fine", "ok fine"),
        ("'fine'", "'fine'"),
        ("none&;", "none&;"),
        ("&dan;", "&amp;dan;"),
        ("&dan;\"xxx\"", "&amp;dan;&#34;xxx&#34;"),
        ("\"\u{2318}\"", "&#34;\u{2318}&#34;"),
        ("My name is \"Franklin\".", "My name is &#34;Franklin&#34;."),
        ("An \"&ambiguous;\" ampersand.", "An &#34;&amp;ambiguous;&#34; ampersand."),
        ("&amp; \"", "&amp; &#34;"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            escape_attribute_value_double_quoted(input),
            expected,
            "escaping {input:?}"
        );
    }
}

#[test]
fn test_shorthand_matches() {
    for input in ["&dan;\"xxx\"", "plain", "a; &b;", "\"\""] {
        assert_eq!(
            escape_attribute_double_quoted(input),
            escape_attribute_value_double_quoted(input)
        );
    }
}

#[test]
fn test_nothing_to_escape_is_borrowed() {
    for input in ["nothing to be escaped", "&amp;", "a & b", "x;y"] {
        assert!(matches!(
            escape_attribute_value_double_quoted(input),
            Cow::Borrowed(_)
        ));
    }
}

#[test]
fn test_semicolon_before_ampersand_skips_ampersand_escaping() {
    // The pre-filter only looks at the first '&' and the first ';'.
    assert_eq!(escape_attribute_value_double_quoted("a; &b;"), "a; &b;");
    assert_eq!(
        escape_attribute_value_double_quoted("a; &b; \""),
        "a; &b; &#34;"
    );
    assert!(has_ambiguous_ampersand("a; &b;"));
}

#[test]
fn test_full_scan_escapes_past_early_semicolon() {
    let escaper = AttributeEscaper::new().full_scan(true);
    assert_eq!(escaper.escape("a; &b;"), "a; &amp;b;");
    assert_eq!(escaper.escape("a; &b; \""), "a; &amp;b; &#34;");
    assert_eq!(escaper.escape("&dan;\"xxx\""), "&amp;dan;&#34;xxx&#34;");
}

#[test]
fn test_custom_names() {
    let escaper = AttributeEscaper::with_names(["dan"]);
    assert_eq!(escaper.escape("&dan;\""), "&dan;&#34;");
    assert_eq!(escaper.escape("&amp;"), "&amp;amp;");
}

#[quickcheck]
fn prop_plain_text_round_trips(text: String) -> TestResult {
    if text.contains('&') || text.contains('"') {
        return TestResult::discard();
    }
    TestResult::from_bool(matches!(
        escape_attribute_value_double_quoted(&text),
        Cow::Borrowed(escaped) if escaped == text
    ))
}

#[quickcheck]
fn prop_output_has_no_double_quote(text: String) -> bool {
    !escape_attribute_value_double_quoted(&text).contains('"')
}

#[quickcheck]
fn prop_full_scan_leaves_no_ambiguous_ampersand(text: String) -> bool {
    let escaped = AttributeEscaper::new().full_scan(true).escape(&text);
    !has_ambiguous_ampersand(&escaped)
}
