//! CSS identifier validation for the htmlcheck crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Identifiers** ([CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#value-def-identifier))
//!   - Element names, and the selector part of class and ID names
//!   - Hex escapes (`\26 `) and single-character escapes (`\&`)
//! - **ID Selectors** ([Selectors Level 3 § 6.5](https://www.w3.org/TR/css3-selectors/#id-selectors))
//!
//! # Not Implemented
//!
//! - Tokenizing stylesheets
//! - Decoding escapes into the characters they stand for

/// CSS identifier and ID selector validation.
pub mod identifier;

pub use identifier::{
    IdentifierError, is_valid_css3_id_value, is_valid_css3_identifier, validate_css3_id_value,
    validate_css3_identifier,
};
