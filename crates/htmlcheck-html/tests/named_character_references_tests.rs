//! Integration tests for named character reference lookup.

use htmlcheck_html::references::{
    character_reference_names, is_character_reference, is_character_reference_name,
    lookup_character_reference,
};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_character_reference("amp"), Some("&"));
    assert_eq!(lookup_character_reference("lt"), Some("<"));
    assert_eq!(lookup_character_reference("gt"), Some(">"));
    assert_eq!(lookup_character_reference("quot"), Some("\""));
    assert_eq!(lookup_character_reference("nbsp"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_multi_character_entity() {
    assert_eq!(lookup_character_reference("fjlig"), Some("fj"));
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_character_reference("notarealentity"), None);
    assert_eq!(lookup_character_reference("amp;"), None);
    assert_eq!(lookup_character_reference(""), None);
}

#[test]
fn test_is_character_reference_name() {
    for name in [
        "amp",
        "AMP",
        "And",
        "abreve",
        "ZeroWidthSpace",
        "lt",                              // smallest known
        "CounterClockwiseContourIntegral", // longest known
    ] {
        assert!(is_character_reference_name(name), "{name:?} should be a name");
    }

    for name in ["Amp", "Daniel", "Tuesday", "", "\u{2318}", "&amp;"] {
        assert!(!is_character_reference_name(name), "{name:?} should not be a name");
    }
}

#[test]
fn test_is_character_reference() {
    for reference in [
        "&amp;",
        "&AMP;",
        "&And;",
        "&abreve;",
        "&ZeroWidthSpace;",
        "&lt;",
        "&CounterClockwiseContourIntegral;",
    ] {
        assert!(is_character_reference(reference), "{reference:?} should be a reference");
    }

    for text in ["&Amp;", "&Daniel;", "&Tuesday;", "amp", "&amp", "amp;", "&\u{2318};", "&;", ""] {
        assert!(!is_character_reference(text), "{text:?} should not be a reference");
    }
}

#[test]
fn test_name_count() {
    assert_eq!(character_reference_names().count(), 2125);
    assert!(character_reference_names().all(is_character_reference_name));
}
