//! Integration tests for attribute, tag name, and ID syntax checks.

use htmlcheck_html::attributes::{
    is_valid_attribute_name, is_valid_attribute_value, is_valid_attribute_value_double_quoted,
    is_valid_attribute_value_single_quoted, is_valid_attribute_value_unquoted,
    validate_attribute_name, validate_attribute_value,
};
use htmlcheck_html::id::{is_valid_html4_id_value, is_valid_html5_id_value};
use htmlcheck_html::tags::{is_html_tag_name, is_valid_html_tag_name};
use htmlcheck_html::{AttributeError, AttributeQuoting};

const POI: &str = "\u{2318}";

#[test]
fn test_valid_attribute_names() {
    for name in ["name", "type", "data-valid", "example", POI] {
        assert!(is_valid_attribute_name(name), "expected {name:?} to be valid");
    }
}

#[test]
fn test_invalid_attribute_names() {
    for name in [
        "",
        " ",
        "\t",
        "\n",
        "\r\n",
        "\x0C",
        "this is invalid",
        "not-\u{0000}-valid",
        "i-am-\"happy\"",
        "i-am-'happy'",
        "<input>",
        "either/or",
        "this /",
        "mine=yours",
        "\x07",
        "\u{FFFF}",
    ] {
        assert!(!is_valid_attribute_name(name), "expected {name:?} to be invalid");
    }
}

#[test]
fn test_attribute_name_errors() {
    assert_eq!(validate_attribute_name(""), Err(AttributeError::EmptyName));
    assert_eq!(
        validate_attribute_name("not valid"),
        Err(AttributeError::SpaceCharacter {
            index: 3,
            character: ' '
        })
    );
    assert_eq!(
        validate_attribute_name("a\x1Bb"),
        Err(AttributeError::ControlCharacter {
            index: 1,
            character: '\x1B'
        })
    );
    assert_eq!(
        validate_attribute_name("mine=yours"),
        Err(AttributeError::InvalidNameCharacter {
            index: 4,
            character: '='
        })
    );
    assert_eq!(
        validate_attribute_name("x\u{FDD0}"),
        Err(AttributeError::Noncharacter {
            index: 1,
            character: '\u{FDD0}'
        })
    );
}

#[test]
fn test_attribute_values() {
    for val in [
        "data",
        "",
        "some other &#xBEEF;",
        "And &#1010; decimal",
        "And &amp; is fine",
        POI,
    ] {
        assert!(is_valid_attribute_value(val), "expected {val:?} to be valid");
    }
    assert!(!is_valid_attribute_value("&funky;"));
    assert!(!is_valid_attribute_value("and &funk; is fine"));
}

#[test]
fn test_unquoted_attribute_values() {
    for val in ["yes", "true", "email", "7", "wut?", POI] {
        assert!(is_valid_attribute_value_unquoted(val), "expected {val:?} to be valid");
    }
    for val in ["", "not this", "\"wut?\"", "a=b", "<", "`tick`", "&bad;"] {
        assert!(!is_valid_attribute_value_unquoted(val), "expected {val:?} to be invalid");
    }
}

#[test]
fn test_single_quoted_attribute_values() {
    assert!(is_valid_attribute_value_single_quoted("this is valid"));
    assert!(is_valid_attribute_value_single_quoted("yes"));
    assert!(is_valid_attribute_value_single_quoted(POI));
    assert!(is_valid_attribute_value_single_quoted("\"double\" is fine"));
    assert!(!is_valid_attribute_value_single_quoted("this 'is not' valid"));
    assert!(!is_valid_attribute_value_single_quoted("'no'"));
    assert!(!is_valid_attribute_value_single_quoted("&nope;"));
}

#[test]
fn test_double_quoted_attribute_values() {
    assert!(is_valid_attribute_value_double_quoted("this is valid"));
    assert!(is_valid_attribute_value_double_quoted("how are you?"));
    assert!(is_valid_attribute_value_double_quoted(POI));
    assert!(is_valid_attribute_value_double_quoted("'single' is fine"));
    assert!(!is_valid_attribute_value_double_quoted("this \"is not\" valid"));
    assert!(!is_valid_attribute_value_double_quoted("\"no\""));
}

#[test]
fn test_attribute_value_errors() {
    assert_eq!(
        validate_attribute_value("", AttributeQuoting::Unquoted),
        Err(AttributeError::EmptyValue)
    );
    assert_eq!(validate_attribute_value("", AttributeQuoting::DoubleQuoted), Ok(()));
    assert_eq!(
        validate_attribute_value("it's", AttributeQuoting::SingleQuoted),
        Err(AttributeError::InvalidValueCharacter {
            index: 2,
            character: '\'',
            quoting: AttributeQuoting::SingleQuoted
        })
    );
    assert_eq!(
        validate_attribute_value("x &y; \"", AttributeQuoting::DoubleQuoted),
        Err(AttributeError::InvalidValueCharacter {
            index: 6,
            character: '"',
            quoting: AttributeQuoting::DoubleQuoted
        })
    );
    assert_eq!(
        validate_attribute_value("x &y;", AttributeQuoting::DoubleQuoted),
        Err(AttributeError::AmbiguousAmpersand {
            index: 2,
            name: "y".to_string()
        })
    );
}

#[test]
fn test_attribute_error_messages() {
    let error = validate_attribute_value("it's", AttributeQuoting::SingleQuoted);
    assert_eq!(
        error.map_err(|e| e.to_string()),
        Err("'\\'' at byte 2 is not allowed in a single-quoted attribute value".to_string())
    );

    let error = validate_attribute_value("&funky;", AttributeQuoting::Unquoted);
    assert_eq!(
        error.map_err(|e| e.to_string()),
        Err("ambiguous ampersand \"&funky;\" at byte 0".to_string())
    );
}

#[test]
fn test_quoting_parses_from_kebab_case() {
    assert_eq!("unquoted".parse(), Ok(AttributeQuoting::Unquoted));
    assert_eq!("single-quoted".parse(), Ok(AttributeQuoting::SingleQuoted));
    assert_eq!("double-quoted".parse(), Ok(AttributeQuoting::DoubleQuoted));
    assert!("double".parse::<AttributeQuoting>().is_err());
    assert_eq!(AttributeQuoting::DoubleQuoted.to_string(), "double-quoted");
}

#[test]
fn test_valid_html_tag_names() {
    for name in ["a", "input", "html", "BODY", "pre", "h1"] {
        assert!(is_valid_html_tag_name(name), "expected {name:?} to be valid");
    }
    for name in ["", "x-tag", " mine \n", POI] {
        assert!(!is_valid_html_tag_name(name), "expected {name:?} to be invalid");
    }
}

#[test]
fn test_html_tag_names() {
    for name in ["TEXTAREA", "canvas", "strong", "Div", "h6"] {
        assert!(is_html_tag_name(name), "expected {name:?} to be an element");
    }
    for name in ["Tuesday", "tuesday", "text\narea", "h7", ""] {
        assert!(!is_html_tag_name(name), "expected {name:?} not to be an element");
    }
}

#[test]
fn test_html4_id_values() {
    let cases = [
        ("", false),
        ("a b", false),
        ("1abc", false),
        ("\u{2601}", false),
        ("last remarks", false),
        ("abc", true),
        ("a", true),
        ("a9", true),
        ("A-", true),
        ("a_b", true),
        ("a:b", true),
        ("a.b.c.", true),
        ("introduction", true),
    ];
    for (input, expected) in cases {
        assert_eq!(is_valid_html4_id_value(input), expected, "html4 id {input:?}");
    }
}

#[test]
fn test_html5_id_values() {
    let cases = [
        ("", false),
        ("a b", false),
        ("last remarks", false),
        ("tab\there", false),
        ("1abc", true),
        ("\u{2601}", true),
        ("abc", true),
        ("a", true),
        ("a9", true),
        ("A-", true),
        ("a_b", true),
        ("a:b", true),
        ("a.b.c.", true),
    ];
    for (input, expected) in cases {
        assert_eq!(is_valid_html5_id_value(input), expected, "html5 id {input:?}");
    }
}
