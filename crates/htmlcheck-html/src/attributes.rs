//! Attribute name and value syntax checks.
//!
//! [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
//!
//! These functions check the syntax only. They make no judgment about whether
//! an attribute is defined for a given element.

use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::references::{NamedReference, find_ambiguous_ampersands};

/// Space characters are space, tab, line feed, form feed, and carriage return.
pub const SPACE_CHARACTERS: &str = "\u{0020}\u{0009}\u{000A}\u{000C}\u{000D}";

/// The non-space ASCII control characters NUL, BEL, BS, VT, ESC, and DEL.
pub const CONTROL_CHARACTERS: &str = "\u{0000}\u{0007}\u{0008}\u{000B}\u{001B}\u{007F}";

/// Characters not valid in an attribute name, besides the space and control
/// characters.
pub const INVALID_ATTRIBUTE_NAME_CHARACTERS: &str = "\u{0022}\u{0027}\u{003E}\u{002F}\u{003D}";

/// Characters not valid in an unquoted attribute value.
pub const INVALID_ATTRIBUTE_VALUE_UNQUOTED_CHARACTERS: &str =
    "\u{0022}\u{0027}\u{003C}\u{003D}\u{003E}\u{0060}";

/// How an attribute value is written in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AttributeQuoting {
    /// `<input type=email>`
    Unquoted,
    /// `<input type='email'>`
    SingleQuoted,
    /// `<input type="email">`
    DoubleQuoted,
}

/// Why an attribute name or value is not valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// "Attribute names must consist of one or more characters"
    #[error("attribute name is empty")]
    EmptyName,
    /// An unquoted value "must not be the empty string".
    #[error("unquoted attribute value is empty")]
    EmptyValue,
    /// A space character in a name or an unquoted value.
    #[error("space character {character:?} at byte {index}")]
    SpaceCharacter {
        /// Byte index of the character.
        index: usize,
        /// The offending character.
        character: char,
    },
    /// A control character in a name.
    #[error("control character {character:?} at byte {index}")]
    ControlCharacter {
        /// Byte index of the character.
        index: usize,
        /// The offending character.
        character: char,
    },
    /// A code point that Unicode will never assign.
    #[error("noncharacter {} at byte {index}", .character.escape_unicode())]
    Noncharacter {
        /// Byte index of the character.
        index: usize,
        /// The offending character.
        character: char,
    },
    /// One of `"`, `'`, `>`, `/`, `=` in a name.
    #[error("{character:?} at byte {index} is not allowed in an attribute name")]
    InvalidNameCharacter {
        /// Byte index of the character.
        index: usize,
        /// The offending character.
        character: char,
    },
    /// A character the quoting style forbids in the value.
    #[error("{character:?} at byte {index} is not allowed in a {quoting} attribute value")]
    InvalidValueCharacter {
        /// Byte index of the character.
        index: usize,
        /// The offending character.
        character: char,
        /// The quoting style that forbids it.
        quoting: AttributeQuoting,
    },
    /// An `&name;` where `name` is not a character reference name.
    #[error("ambiguous ampersand \"&{name};\" at byte {index}")]
    AmbiguousAmpersand {
        /// Byte index of the ampersand.
        index: usize,
        /// The name between the ampersand and the semicolon.
        name: String,
    },
}

impl From<NamedReference<'_>> for AttributeError {
    fn from(reference: NamedReference<'_>) -> Self {
        Self::AmbiguousAmpersand {
            index: reference.ampersand_index,
            name: reference.name.to_string(),
        }
    }
}

/// Returns true for U+0020, U+0009, U+000A, U+000C, and U+000D.
#[must_use]
pub const fn is_space_character(c: char) -> bool {
    matches!(c, '\u{0020}' | '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}')
}

/// Returns true for NUL, BEL, BS, VT, ESC, and DEL.
#[must_use]
pub const fn is_control_character(c: char) -> bool {
    matches!(
        c,
        '\u{0000}' | '\u{0007}' | '\u{0008}' | '\u{000B}' | '\u{001B}' | '\u{007F}'
    )
}

/// Returns true for the 66 Unicode noncharacters: U+FDD0..U+FDEF and every
/// code point ending in FFFE or FFFF.
#[must_use]
pub fn is_unicode_noncharacter(c: char) -> bool {
    let cp = u32::from(c);
    matches!(cp, 0xFDD0..=0xFDEF) || (cp & 0xFFFE) == 0xFFFE
}

/// Check an attribute name.
///
/// "Attribute names must consist of one or more characters other than the
/// space characters, U+0000 NULL, U+0022 QUOTATION MARK ("), U+0027
/// APOSTROPHE ('), ">" (U+003E), "/" (U+002F), and "=" (U+003D) characters,
/// the control characters, and any characters that are not defined by
/// Unicode."
///
/// # Errors
///
/// Returns the first problem found, scanning left to right.
pub fn validate_attribute_name(name: &str) -> Result<(), AttributeError> {
    if name.is_empty() {
        return Err(AttributeError::EmptyName);
    }

    for (index, character) in name.char_indices() {
        if is_space_character(character) {
            return Err(AttributeError::SpaceCharacter { index, character });
        }
        if is_control_character(character) {
            return Err(AttributeError::ControlCharacter { index, character });
        }
        if INVALID_ATTRIBUTE_NAME_CHARACTERS.contains(character) {
            return Err(AttributeError::InvalidNameCharacter { index, character });
        }
        if is_unicode_noncharacter(character) {
            return Err(AttributeError::Noncharacter { index, character });
        }
    }

    Ok(())
}

/// Returns true if the argument is a valid HTML5 attribute name.
///
/// # Example
/// ```
/// use htmlcheck_html::attributes::is_valid_attribute_name;
///
/// assert!(is_valid_attribute_name("data-valid"));
/// assert!(!is_valid_attribute_name("not valid"));
/// ```
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    validate_attribute_name(name).is_ok()
}

/// Check an attribute value written with the given quoting. The value must
/// not include the surrounding quotes.
///
/// "Attribute values are a mixture of text and character references, except
/// with the additional restriction that the text cannot contain an ambiguous
/// ampersand."
///
/// On top of that, an unquoted value "must not contain any literal space
/// characters, any U+0022 QUOTATION MARK characters ("), U+0027 APOSTROPHE
/// characters ('), "=" (U+003D) characters, "<" (U+003C) characters, ">"
/// (U+003E) characters, or "`" (U+0060) characters, and must not be the empty
/// string". A single-quoted value must not contain "'" and a double-quoted
/// value must not contain '"'.
///
/// # Errors
///
/// Returns the first forbidden character, or else the first ambiguous
/// ampersand.
pub fn validate_attribute_value(
    val: &str,
    quoting: AttributeQuoting,
) -> Result<(), AttributeError> {
    if quoting == AttributeQuoting::Unquoted && val.is_empty() {
        return Err(AttributeError::EmptyValue);
    }

    for (index, character) in val.char_indices() {
        match quoting {
            AttributeQuoting::Unquoted if is_space_character(character) => {
                return Err(AttributeError::SpaceCharacter { index, character });
            }
            AttributeQuoting::Unquoted
                if INVALID_ATTRIBUTE_VALUE_UNQUOTED_CHARACTERS.contains(character) =>
            {
                return Err(AttributeError::InvalidValueCharacter {
                    index,
                    character,
                    quoting,
                });
            }
            AttributeQuoting::SingleQuoted if character == '\'' => {
                return Err(AttributeError::InvalidValueCharacter {
                    index,
                    character,
                    quoting,
                });
            }
            AttributeQuoting::DoubleQuoted if character == '"' => {
                return Err(AttributeError::InvalidValueCharacter {
                    index,
                    character,
                    quoting,
                });
            }
            _ => {}
        }
    }

    match find_ambiguous_ampersands(val).next() {
        Some(reference) => Err(reference.into()),
        None => Ok(()),
    }
}

/// Returns true if the argument is a valid attribute value, with the caveat
/// that additional rules apply to unquoted, single-quoted, and double-quoted
/// attribute values. Only the ambiguous ampersand rule is checked here.
///
/// Note: prefer one of the quoting-specific functions below.
#[must_use]
pub fn is_valid_attribute_value(val: &str) -> bool {
    find_ambiguous_ampersands(val).next().is_none()
}

/// Returns true if the argument is a valid unquoted attribute value, like
/// `email` in `<input type=email>`.
#[must_use]
pub fn is_valid_attribute_value_unquoted(val: &str) -> bool {
    validate_attribute_value(val, AttributeQuoting::Unquoted).is_ok()
}

/// Returns true if the argument is a valid single-quoted attribute value.
/// The argument must not include the quotes.
#[must_use]
pub fn is_valid_attribute_value_single_quoted(val: &str) -> bool {
    validate_attribute_value(val, AttributeQuoting::SingleQuoted).is_ok()
}

/// Returns true if the argument is a valid double-quoted attribute value.
/// The argument must not include the quotes.
#[must_use]
pub fn is_valid_attribute_value_double_quoted(val: &str) -> bool {
    validate_attribute_value(val, AttributeQuoting::DoubleQuoted).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_class_tables_agree() {
        assert!(SPACE_CHARACTERS.chars().all(is_space_character));
        assert!(CONTROL_CHARACTERS.chars().all(is_control_character));
        assert!(!is_space_character('a'));
        assert!(!is_control_character(' '));
    }

    #[test]
    fn test_noncharacters() {
        assert!(is_unicode_noncharacter('\u{FDD0}'));
        assert!(is_unicode_noncharacter('\u{FDEF}'));
        assert!(is_unicode_noncharacter('\u{FFFE}'));
        assert!(is_unicode_noncharacter('\u{FFFF}'));
        assert!(is_unicode_noncharacter('\u{1FFFE}'));
        assert!(is_unicode_noncharacter('\u{10FFFF}'));
        assert!(!is_unicode_noncharacter('\u{FDCF}'));
        assert!(!is_unicode_noncharacter('\u{FDF0}'));
        assert!(!is_unicode_noncharacter('\u{FFFD}'));
        assert!(!is_unicode_noncharacter('\u{2318}'));
    }
}
