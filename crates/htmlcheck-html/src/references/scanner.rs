//! Named character reference scanner.
//!
//! Finds substrings shaped like a named character reference: an ampersand,
//! one or more ASCII alphanumerics, and a semicolon. The scanner checks the
//! structure only; use [`is_character_reference_name`] to see whether the
//! returned name is actually defined.
//!
//! [`is_character_reference_name`]: super::is_character_reference_name

use memchr::memchr;

/// One `&name;` occurrence found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedReference<'a> {
    /// The alphanumeric part, without the ampersand and semicolon.
    pub name: &'a str,
    /// Byte index of the leading ampersand.
    pub ampersand_index: usize,
}

impl NamedReference<'_> {
    /// Byte index of the terminating semicolon.
    #[must_use]
    pub const fn semicolon_index(&self) -> usize {
        self.ampersand_index + self.name.len() + 1
    }
}

/// The resumable position of a scan.
///
/// Holds the byte index where the previous scan stopped, or `None` before the
/// first scan. The index never moves backwards unless the cursor is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCursor {
    last_index: Option<usize>,
}

impl ScanCursor {
    /// A cursor positioned before the start of the text.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_index: None }
    }

    /// Where the previous scan stopped: the semicolon of the last match, or
    /// the text length once the scan is exhausted.
    #[must_use]
    pub const fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Rewind to the beginning of the text.
    pub const fn reset(&mut self) {
        self.last_index = None;
    }

    const fn first_unscanned(&self) -> usize {
        match self.last_index {
            Some(index) => index + 1,
            None => 0,
        }
    }
}

/// Find the next named reference after `cursor` and advance the cursor past it.
///
/// On a match the cursor stops on the terminating semicolon. When nothing is
/// left the cursor moves to the end of `text` (or stays put, if it is already
/// further along), so repeated calls keep returning `None`.
///
/// An ampersand immediately followed by a semicolon (`&;`) is not a
/// candidate. A candidate interrupted by any other character is abandoned and
/// the search resumes at the interrupting character, which may itself start
/// the next candidate (`&this&that;` matches `that`).
pub fn scan_next<'a>(text: &'a str, cursor: &mut ScanCursor) -> Option<NamedReference<'a>> {
    let bytes = text.as_bytes();
    let length = bytes.len();
    let mut position = cursor.first_unscanned();

    while position < length {
        let Some(offset) = memchr(b'&', &bytes[position..]) else {
            break;
        };
        let ampersand_index = position + offset;
        let name_start = ampersand_index + 1;

        // Everything up to the first byte that is not ASCII alphanumeric.
        // Multi-byte code points never contain ASCII bytes, so this cannot
        // split a character.
        let name_end = bytes[name_start..]
            .iter()
            .position(|b| !b.is_ascii_alphanumeric())
            .map_or(length, |len| name_start + len);

        if name_end == length {
            // Ran off the end without a semicolon; nothing further can match.
            break;
        }

        if bytes[name_end] == b';' && name_end > name_start {
            cursor.last_index = Some(name_end);
            return Some(NamedReference {
                name: &text[name_start..name_end],
                ampersand_index,
            });
        }

        // "&;" or an interrupted candidate. The skipped alphanumerics cannot
        // hold an ampersand, so resume at the byte that stopped the name.
        position = name_end;
    }

    // Exhausted. The cursor never moves backwards, even when it was last
    // used on a longer text.
    cursor.last_index = Some(cursor.last_index.map_or(length, |last| last.max(length)));
    None
}

/// A scanner that owns its text and cursor.
///
/// # Example
/// ```
/// use htmlcheck_html::references::NamedReferenceScanner;
///
/// let mut scanner = NamedReferenceScanner::new("&but; &this;");
/// assert_eq!(scanner.next_reference().map(|r| (r.name, r.ampersand_index)), Some(("but", 0)));
/// assert_eq!(scanner.next_reference().map(|r| (r.name, r.ampersand_index)), Some(("this", 6)));
/// assert_eq!(scanner.next_reference(), None);
/// ```
#[derive(Debug, Clone)]
pub struct NamedReferenceScanner<'a> {
    value: &'a str,
    cursor: ScanCursor,
}

impl<'a> NamedReferenceScanner<'a> {
    /// Create a scanner positioned at the start of `value`.
    #[must_use]
    pub const fn new(value: &'a str) -> Self {
        Self {
            value,
            cursor: ScanCursor::new(),
        }
    }

    /// The text being scanned.
    #[must_use]
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// The current scan position.
    #[must_use]
    pub const fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    /// Return the next named reference, or `None` once the text is exhausted.
    pub fn next_reference(&mut self) -> Option<NamedReference<'a>> {
        scan_next(self.value, &mut self.cursor)
    }

    /// Reset the scanner to the beginning of the text.
    pub const fn reset(&mut self) {
        self.cursor.reset();
    }
}

impl<'a> Iterator for NamedReferenceScanner<'a> {
    type Item = NamedReference<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<(&str, usize)> {
        NamedReferenceScanner::new(text)
            .map(|r| (r.name, r.ampersand_index))
            .collect()
    }

    #[test]
    fn test_cursor_stops_on_semicolon() {
        let mut cursor = ScanCursor::new();
        assert_eq!(cursor.last_index(), None);

        let found = scan_next("a &b; c", &mut cursor);
        assert_eq!(found.map(|r| r.name), Some("b"));
        assert_eq!(cursor.last_index(), Some(4));
        assert_eq!(found.map(|r| r.semicolon_index()), Some(4));
    }

    #[test]
    fn test_exhausted_cursor_sits_at_end() {
        let mut cursor = ScanCursor::new();
        assert_eq!(scan_next("no refs", &mut cursor), None);
        assert_eq!(cursor.last_index(), Some(7));
        assert_eq!(scan_next("no refs", &mut cursor), None);
        assert_eq!(cursor.last_index(), Some(7));
    }

    #[test]
    fn test_empty_name_is_skipped() {
        assert_eq!(names("none&;"), vec![]);
        assert_eq!(names("&;&a;"), vec![("a", 2)]);
        assert_eq!(names("&&a;"), vec![("a", 1)]);
    }

    #[test]
    fn test_interrupted_candidate_resumes_at_interruption() {
        assert_eq!(names("&this&that;"), vec![("that", 5)]);
        assert_eq!(names("&this &is; also;"), vec![("is", 6)]);
        assert_eq!(names("&#this"), vec![]);
        assert_eq!(names("&ab\u{2318};"), vec![]);
    }

    #[test]
    fn test_trailing_ampersand() {
        assert_eq!(names("stop &"), vec![]);
        assert_eq!(names("&unterminated"), vec![]);
    }
}
