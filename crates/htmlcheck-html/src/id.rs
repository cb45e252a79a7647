//! ID attribute value checks.
//!
//! These check syntax only; uniqueness within a document is out of scope.
//! CSS ID selectors live in `htmlcheck-css`.

use crate::attributes::is_space_character;

/// Returns true if the argument is a valid HTML 4 ID value.
///
/// Note: HTML 4 is stricter than HTML5, strict enough that a valid ID is
/// also a valid quoted or unquoted attribute value.
///
/// [HTML 4.01 § 6.2](http://www.w3.org/TR/html401/types.html#type-name)
///
/// "ID and NAME tokens must begin with a letter ([A-Za-z]) and may be
/// followed by any number of letters, digits ([0-9]), hyphens ("-"),
/// underscores ("_"), colons (":"), and periods (".")."
#[must_use]
pub fn is_valid_html4_id_value(val: &str) -> bool {
    let bytes = val.as_bytes();

    // "must begin with a letter"
    let Some(first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    // "may be followed by any number of ..."
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b':' | b'_' | b'-' | b'.'))
}

/// Returns true if the argument is a valid HTML5 ID value.
///
/// Note: this is much more permissive than HTML 4 and CSS ID values.
///
/// "must be at least one character long" and "must not contain any space
/// characters"
#[must_use]
pub fn is_valid_html5_id_value(val: &str) -> bool {
    !val.is_empty() && !val.chars().any(is_space_character)
}
