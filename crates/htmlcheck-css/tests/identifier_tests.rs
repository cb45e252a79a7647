//! Integration tests for CSS3 identifier and ID selector validation.

use htmlcheck_css::{
    IdentifierError, is_valid_css3_id_value, is_valid_css3_identifier, validate_css3_id_value,
    validate_css3_identifier,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn test_identifiers() {
    let cases = [
        ("", false),
        ("1a", false),    // cannot start with "a digit"
        ("--lua", false), // cannot start with "two hyphens"
        ("-1a", false),   // cannot start with "a hyphen followed by a digit"
        ("a#", false),
        ("a{b}", false),
        ("a|b", false),
        ("!", false),
        ("a b", false),
        ("2", false),
        (r"\32", true), // \32 is allowed at the start of a class name, even though "2" is not
        ("abc123DEF", true),
        ("a\u{00A0}b", true),
        ("\u{00A1}", true),
        ("\u{00A9}2005", true),
        ("a\u{2601}b", true),
        ("a-b", true),
        ("a_b", true),
        ("-a", true),
        ("_1", true),
        (r"B\&W\?", true), // illegal characters escaped
        (r"B\26 W\3F", true),
        (r"a\ b", true),
        (r"te\st", true), // same identifier as "test"
        ("hullo", true),
        ("wrapper2", true),
    ];
    for (input, expected) in cases {
        assert_eq!(is_valid_css3_identifier(input), expected, "identifier {input:?}");
    }
}

#[test]
fn test_hex_escape_terminated_by_whitespace() {
    for separator in [" ", "\t", "\n", "\r", "\x0C"] {
        let input = format!(r"\26{separator}B");
        assert!(is_valid_css3_identifier(&input), "{input:?}");
    }
    // Only one whitespace character belongs to the escape.
    assert!(!is_valid_css3_identifier(r"\26  B"));
}

#[test]
fn test_hex_escape_is_capped_at_six_digits() {
    assert!(is_valid_css3_identifier(r"\000026 B"));
    assert!(is_valid_css3_identifier(r"\0000267"));
    assert!(!is_valid_css3_identifier(r"\0000267 B"));
}

#[test]
fn test_non_hex_letter_ends_escape() {
    assert!(is_valid_css3_identifier(r"\26g"));
    assert!(!is_valid_css3_identifier(r"\26g B"));
}

#[test]
fn test_single_character_escapes() {
    assert!(is_valid_css3_identifier(r"\#id"));
    assert!(is_valid_css3_identifier(r"a\{b\}"));
    assert!(is_valid_css3_identifier(r"\1"));
    assert!(is_valid_css3_identifier(r"\-\-lua"));
    // An escaped character does not extend to the next one.
    assert!(!is_valid_css3_identifier(r"\##"));
}

#[test]
fn test_identifier_errors() {
    assert_eq!(validate_css3_identifier(""), Err(IdentifierError::Empty));
    assert_eq!(validate_css3_identifier("9lives"), Err(IdentifierError::LeadingDigit));
    assert_eq!(
        validate_css3_identifier("--x"),
        Err(IdentifierError::LeadingHyphen { second: '-' })
    );
    assert_eq!(
        validate_css3_identifier("-3"),
        Err(IdentifierError::LeadingHyphen { second: '3' })
    );
    assert_eq!(
        validate_css3_identifier("a\u{2601}#"),
        Err(IdentifierError::InvalidCharacter {
            index: 4,
            character: '#'
        })
    );
}

#[test]
fn test_id_values() {
    let cases = [
        ("", false),
        ("a", false), // must start with '#'
        ("#", false),
        ("##", false),
        ("#a", true),
        ("#main-content", true),
        ("#1", false),
        (r"#\31", true),
    ];
    for (input, expected) in cases {
        assert_eq!(is_valid_css3_id_value(input), expected, "id value {input:?}");
    }
}

#[test]
fn test_id_value_errors() {
    assert_eq!(validate_css3_id_value("a"), Err(IdentifierError::MissingNumberSign));
    assert_eq!(validate_css3_id_value("#"), Err(IdentifierError::Empty));
    assert_eq!(
        validate_css3_id_value("#a b"),
        Err(IdentifierError::InvalidCharacter {
            index: 2,
            character: ' '
        })
    );
    assert_eq!(
        validate_css3_id_value("#a b").map_err(|e| e.to_string()),
        Err("' ' at byte 2 is not allowed in an identifier".to_string())
    );
}

#[quickcheck]
fn prop_ascii_letters_are_identifiers(text: String) -> TestResult {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_alphabetic()) {
        return TestResult::discard();
    }
    TestResult::from_bool(is_valid_css3_identifier(&text))
}

#[quickcheck]
fn prop_id_value_is_hash_plus_identifier(text: String) -> bool {
    is_valid_css3_id_value(&format!("#{text}")) == is_valid_css3_identifier(&text)
}
