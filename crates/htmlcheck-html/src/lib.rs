//! HTML5 text scanning, escaping, and syntax checks.
//!
//! # Scope
//!
//! This crate implements:
//! - **Named Character References** ([WHATWG § 13.5](https://html.spec.whatwg.org/multipage/named-characters.html))
//!   - The full table of reference names
//!   - A resumable scanner for `&name;` shaped text
//! - **Ambiguous Ampersands** ([WHATWG § 13.1.4](https://html.spec.whatwg.org/multipage/syntax.html#syntax-ambiguous-ampersand))
//!   - Detection and minimal escaping
//!   - Double-quoted attribute value escaping
//! - **Syntax Checks**
//!   - Attribute names and values, tag names, HTML 4 and HTML5 IDs
//!
//! # Not Implemented
//!
//! - Tokenizing or parsing documents
//! - Decoding character references

/// Attribute name and value checks.
pub mod attributes;
/// Double-quoted attribute value escaping.
pub mod escape;
/// ID attribute value checks.
pub mod id;
/// Named character references and ambiguous ampersands.
pub mod references;
/// Tag name checks.
pub mod tags;

pub use attributes::{AttributeError, AttributeQuoting};
pub use escape::{
    AttributeEscaper, HTML_QUOT, escape_attribute_double_quoted,
    escape_attribute_value_double_quoted,
};
pub use references::{
    HTML_AMP, escape_ambiguous_ampersands, has_ambiguous_ampersand, is_character_reference,
    is_character_reference_name,
};
