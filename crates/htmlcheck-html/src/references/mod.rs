//! Named character references and ambiguous ampersands.
//!
//! [§ 13.1.4 Character references](https://html.spec.whatwg.org/multipage/syntax.html#character-references)

/// Ambiguous ampersand detection and escaping.
pub mod ambiguous;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Resumable scanner for `&name;` shaped substrings.
pub mod scanner;

pub use ambiguous::{
    HTML_AMP, escape_ambiguous_ampersands, escape_ambiguous_ampersands_with,
    find_ambiguous_ampersands, find_ambiguous_ampersands_with, has_ambiguous_ampersand,
    has_ambiguous_ampersand_with,
};
pub use named_character_references::{
    Html5ReferenceNames, ReferenceNames, character_reference_names, is_character_reference,
    is_character_reference_name, lookup_character_reference,
};
pub use scanner::{NamedReference, NamedReferenceScanner, ScanCursor, scan_next};
