//! Clearing the global warning registry.
//!
//! Kept in its own test binary so it cannot race with the tests that rely on
//! warnings staying recorded.

use htmlcheck_common::warning::{clear_warnings, warn_once, was_warned};

#[test]
fn test_clear_warnings() {
    warn_once("clear", "to be cleared");
    warn_once("clear", "also cleared");
    assert!(was_warned("clear", "to be cleared"));

    clear_warnings();
    assert!(!was_warned("clear", "to be cleared"));
    assert!(!was_warned("clear", "also cleared"));

    warn_once("clear", "to be cleared");
    assert!(was_warned("clear", "to be cleared"));
}
