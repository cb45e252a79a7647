//! CSS3 identifier validation.
//!
//! [CSS 2.1 § 4.1.3 Characters and case](https://www.w3.org/TR/CSS21/syndata.html#value-def-identifier)
//!
//! "In CSS, identifiers (including element names, classes, and IDs in
//! selectors) can contain only the characters [a-zA-Z0-9] and ISO 10646
//! characters U+00A0 and higher, plus the hyphen (-) and the underscore (_);
//! they cannot start with a digit, two hyphens, or a hyphen followed by a
//! digit."
//!
//! "Any character (except a hexadecimal digit, linefeed, carriage return, or
//! form feed) can be escaped with a backslash to remove its special meaning."
//!
//! "Third, backslash escapes allow authors to refer to characters they cannot
//! easily put in a document. In this case, the backslash is followed by at
//! most six hexadecimal digits (0..9A..F), which stand for the ISO 10646
//! character with that number, which must not be zero."
//!
//! Selectors Level 3 defers to this definition when it refers to identifiers.

use thiserror::Error;

/// A hex escape holds at most this many digits.
const MAX_HEX_DIGITS: usize = 6;

/// Why a value is not a CSS identifier or ID selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Identifiers must be at least one character long.
    #[error("identifier is empty")]
    Empty,
    /// "they cannot start with a digit"
    #[error("identifier starts with a digit")]
    LeadingDigit,
    /// "they cannot start with ... two hyphens, or a hyphen followed by a digit"
    #[error("identifier starts with a hyphen followed by {second:?}")]
    LeadingHyphen {
        /// The character after the leading hyphen.
        second: char,
    },
    /// A character that is neither allowed nor escaped.
    #[error("{character:?} at byte {index} is not allowed in an identifier")]
    InvalidCharacter {
        /// Byte index of the character.
        index: usize,
        /// The offending character.
        character: char,
    },
    /// "An ID selector contains a "number sign" (U+0023, #) immediately
    /// followed by the ID value"
    #[error("ID selector does not start with '#'")]
    MissingNumberSign,
}

/// [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization)
///
/// "w: [ \t\r\n\f]*"
const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Per-call lexer state.
///
/// The flags track just enough of the previous characters to know whether
/// the current one is inside an escape.
#[derive(Debug, Default)]
struct IdentifierLexer {
    /// The first character, once seen.
    first: Option<char>,
    /// Hex digits since the last backslash.
    hex_count: usize,
    /// Inside an escape, so a single whitespace character may end it.
    in_escape: bool,
    /// The previous character was a backslash.
    was_backslash: bool,
}

impl IdentifierLexer {
    /// Consume the character at `position` (counting code points) and byte
    /// `index`.
    fn consume(&mut self, position: usize, index: usize, c: char) -> Result<(), IdentifierError> {
        match position {
            // "they cannot start with a digit"
            0 => {
                self.first = Some(c);
                if c.is_ascii_digit() {
                    return Err(IdentifierError::LeadingDigit);
                }
            }
            // "they cannot start with ... two hyphens, or a hyphen followed
            // by a digit."
            1 if self.first == Some('-') && (c == '-' || c.is_ascii_digit()) => {
                return Err(IdentifierError::LeadingHyphen { second: c });
            }
            _ => {}
        }

        // "the backslash is followed by at most six hexadecimal digits"
        if self.hex_count > MAX_HEX_DIGITS {
            self.in_escape = false;
        }

        // "can contain ... ISO 10646 characters U+00A0 and higher"
        // "can contain ... the hyphen (-) and the underscore (_)"
        if c >= '\u{00A0}' || c == '-' || c == '_' {
            self.in_escape = false;
            self.was_backslash = false;
            return Ok(());
        }

        // "can contain ... the characters [a-zA-Z0-9]"
        if c.is_ascii_alphanumeric() {
            self.was_backslash = false;
            if c.is_ascii_hexdigit() {
                self.hex_count += 1;
            } else {
                self.in_escape = false;
            }
            return Ok(());
        }

        // "backslash escapes allow authors to refer to characters they cannot
        // easily put in a document"
        if c == '\\' {
            self.hex_count = 0;
            self.was_backslash = true;
            self.in_escape = true;
            return Ok(());
        }

        // "If a character in the range [0-9a-fA-F] follows the hexadecimal
        // number, the end of the number needs to be made clear ... with a
        // space (or other white space character)"
        if self.in_escape && is_whitespace(c) {
            self.in_escape = false;
            self.was_backslash = false;
            return Ok(());
        }

        // "Any character ... can be escaped with a backslash to remove its
        // special meaning."
        if self.was_backslash {
            self.was_backslash = false;
            self.in_escape = false;
            return Ok(());
        }

        Err(IdentifierError::InvalidCharacter {
            index,
            character: c,
        })
    }
}

/// Check a CSS3 identifier, taking escapes into account.
///
/// # Errors
///
/// Returns the reason at the first character that cannot be part of an
/// identifier. Nothing after that character is examined.
pub fn validate_css3_identifier(val: &str) -> Result<(), IdentifierError> {
    if val.is_empty() {
        return Err(IdentifierError::Empty);
    }

    let mut lexer = IdentifierLexer::default();
    for (position, (index, c)) in val.char_indices().enumerate() {
        lexer.consume(position, index, c)?;
    }

    Ok(())
}

/// Returns true if the argument is a valid CSS3 identifier. Identifiers
/// include element names, and the selector part of ID and class names.
///
/// Prohibited characters can be included using escapes.
///
/// # Example
/// ```
/// use htmlcheck_css::is_valid_css3_identifier;
///
/// assert!(is_valid_css3_identifier("hullo"));
/// assert!(is_valid_css3_identifier(r"B\26 W\3F"));
/// assert!(!is_valid_css3_identifier("--lua"));
/// ```
#[must_use]
pub fn is_valid_css3_identifier(val: &str) -> bool {
    validate_css3_identifier(val).is_ok()
}

/// Check a CSS3 ID selector value such as `#main`.
///
/// [Selectors Level 3 § 6.5](https://www.w3.org/TR/css3-selectors/#id-selectors)
///
/// "An ID selector contains a "number sign" (U+0023, #) immediately followed
/// by the ID value, which must be an CSS identifiers."
///
/// # Errors
///
/// Returns [`IdentifierError::MissingNumberSign`] without a leading `#`,
/// otherwise the identifier error for the rest. Byte indices count from the
/// start of `val`, including the `#`.
pub fn validate_css3_id_value(val: &str) -> Result<(), IdentifierError> {
    let Some(id) = val.strip_prefix('#') else {
        return Err(IdentifierError::MissingNumberSign);
    };

    validate_css3_identifier(id).map_err(|error| match error {
        IdentifierError::InvalidCharacter { index, character } => {
            IdentifierError::InvalidCharacter {
                index: index + 1,
                character,
            }
        }
        other => other,
    })
}

/// Returns true if the argument is a valid CSS3 ID selector value: a `#`
/// followed by a valid identifier.
#[must_use]
pub fn is_valid_css3_id_value(val: &str) -> bool {
    validate_css3_id_value(val).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(val: &str) -> IdentifierLexer {
        let mut lexer = IdentifierLexer::default();
        for (position, (index, c)) in val.char_indices().enumerate() {
            assert_eq!(lexer.consume(position, index, c), Ok(()), "rejected {val:?}");
        }
        lexer
    }

    #[test]
    fn test_backslash_enters_escape() {
        let lexer = lex(r"a\");
        assert!(lexer.was_backslash);
        assert!(lexer.in_escape);
        assert_eq!(lexer.hex_count, 0);
    }

    #[test]
    fn test_hex_digits_are_counted() {
        let lexer = lex(r"\26aF");
        assert_eq!(lexer.hex_count, 4);
        assert!(lexer.in_escape);
        assert!(!lexer.was_backslash);
    }

    #[test]
    fn test_non_hex_letter_ends_escape() {
        let lexer = lex(r"\2g");
        assert!(!lexer.in_escape);
    }

    #[test]
    fn test_whitespace_terminates_escape() {
        let lexer = lex(r"\26 ");
        assert!(!lexer.in_escape);
        assert!(!lexer.was_backslash);
    }

    #[test]
    fn test_first_character_is_recorded() {
        assert_eq!(lex("-a").first, Some('-'));
        assert_eq!(lex("").first, None);
    }
}
