//! Integration tests for ambiguous ampersand detection and escaping.

use std::borrow::Cow;
use std::collections::HashSet;

use htmlcheck_html::references::{
    character_reference_names, escape_ambiguous_ampersands, escape_ambiguous_ampersands_with,
    find_ambiguous_ampersands, has_ambiguous_ampersand, has_ambiguous_ampersand_with,
};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

#[test]
fn test_has_ambiguous_ampersand() {
    for input in [
        "This &could; be",
        "&amp; &this;",
        "&a;",
        "&9;",
        "what; &about; this;&?",
        "&this &is; also;",
        "\u{2318} &poi; \u{2318}",
        "Can &what; be one?",
    ] {
        assert!(has_ambiguous_ampersand(input), "expected {input:?} to be ambiguous");
    }
}

#[test]
fn test_has_no_ambiguous_ampersand() {
    for input in [
        "",
        "this is not ambiguous",
        "this & ain't ambiguous",
        "&#this",
        "neither &; this",
        "what; about& this?",
        "some; &and ;",
        "This &amp; that.",
        "Put &lt;input/>",
        "this & that;.",
        "This & that; &amp; others",
        "&this &amp; that;",
        "&\u{2318};",
        "&\u{FFFD};",
        "this &amp; that",
        "nothing here",
    ] {
        assert!(!has_ambiguous_ampersand(input), "expected {input:?} to be unambiguous");
    }
}

#[test]
fn test_find_ambiguous_ampersands() {
    let found: Vec<_> = find_ambiguous_ampersands("&this;&lt;&this;&that;")
        .map(|reference| (reference.name, reference.ampersand_index))
        .collect();
    assert_eq!(found, vec![("this", 0), ("this", 10), ("that", 16)]);
}

#[test]
fn test_escape_ambiguous_ampersands() {
    let cases = [
        ("", ""),
        ("&\u{2601};", "&\u{2601};"),
        ("test", "test"),
        ("none&;", "none&;"),
        ("&amp;", "&amp;"),
        ("this &\u{2318}&that;.", "this &\u{2318}&amp;that;."),
        ("&this;&lt;&this;&that;", "&amp;this;&lt;&amp;this;&amp;that;"),
        ("a &tuesday;", "a &amp;tuesday;"),
        ("this &could; be &ambigous;.", "this &amp;could; be &amp;ambigous;."),
        ("no &amp; here", "no &amp; here"),
        (
            "test &a;&b;&c;&d;&e;&f;&g;&h; \u{2318}",
            "test &amp;a;&amp;b;&amp;c;&amp;d;&amp;e;&amp;f;&amp;g;&amp;h; \u{2318}",
        ),
        ("Who &writes; like this?", "Who &amp;writes; like this?"),
    ];
    for (input, expected) in cases {
        assert_eq!(escape_ambiguous_ampersands(input), expected, "escaping {input:?}");
    }
}

#[test]
fn test_unchanged_input_is_borrowed() {
    for input in ["no &amp; here", "none&;", "plain", "&\u{2601};"] {
        assert!(matches!(escape_ambiguous_ampersands(input), Cow::Borrowed(_)));
    }
    assert!(matches!(escape_ambiguous_ampersands("&x;"), Cow::Owned(_)));
}

#[test]
fn test_every_table_name_is_unambiguous() {
    for name in character_reference_names() {
        let reference = format!("&{name};");
        assert!(!has_ambiguous_ampersand(&reference), "{reference} flagged");
        assert_eq!(escape_ambiguous_ampersands(&reference), reference);
    }
}

#[test]
fn test_unknown_names_are_escaped() {
    for name in ["Amp", "Daniel", "x1", "0", "nbspx", "ampamp"] {
        let reference = format!("&{name};");
        assert!(has_ambiguous_ampersand(&reference), "{reference} not flagged");
        assert_eq!(escape_ambiguous_ampersands(&reference), format!("&amp;{name};"));
    }
}

#[test]
fn test_synthetic_name_table() {
    let names = ["foo", "bar"];
    assert!(!has_ambiguous_ampersand_with("&foo; &bar;", &names));
    assert!(has_ambiguous_ampersand_with("&foo; &amp;", &names));
    assert_eq!(
        escape_ambiguous_ampersands_with("&foo; &amp;", &names),
        "&foo; &amp;amp;"
    );

    let set: HashSet<&str> = HashSet::from(["amp"]);
    assert!(has_ambiguous_ampersand_with("&lt;", &set));
    assert!(!has_ambiguous_ampersand_with("&amp;", &set));
}

/// Text assembled from fragments that tend to form (or almost form)
/// character references.
#[derive(Debug, Clone)]
struct HtmlText(String);

const FRAGMENTS: &[&str] = &[
    "&", ";", "amp", "lt", "foo", "Amp", "9", " ", "\"", "#", "\u{2318}", "&amp;", "&x;", "&;",
    "a", "-",
];

impl Arbitrary for HtmlText {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 24;
        let text = (0..count)
            .filter_map(|_| g.choose(FRAGMENTS).copied())
            .collect();
        Self(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

#[quickcheck]
fn prop_text_without_ampersand_is_untouched(text: String) -> TestResult {
    if text.contains('&') {
        return TestResult::discard();
    }
    TestResult::from_bool(
        !has_ambiguous_ampersand(&text) && escape_ambiguous_ampersands(&text) == text.as_str(),
    )
}

#[quickcheck]
fn prop_escaping_is_idempotent(text: HtmlText) -> bool {
    let once = escape_ambiguous_ampersands(&text.0).into_owned();
    escape_ambiguous_ampersands(&once) == once.as_str()
}

#[quickcheck]
fn prop_escaped_text_has_no_ambiguous_ampersand(text: HtmlText) -> bool {
    !has_ambiguous_ampersand(&escape_ambiguous_ampersands(&text.0))
}

#[quickcheck]
fn prop_escaped_length_is_exact(text: HtmlText) -> bool {
    let count = find_ambiguous_ampersands(&text.0).count();
    escape_ambiguous_ampersands(&text.0).len() == text.0.len() + count * 4
}

#[quickcheck]
fn prop_detection_matches_escaping(text: HtmlText) -> bool {
    let changed = matches!(escape_ambiguous_ampersands(&text.0), Cow::Owned(_));
    changed == has_ambiguous_ampersand(&text.0)
}
