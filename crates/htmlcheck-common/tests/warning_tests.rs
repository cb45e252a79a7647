//! Integration tests for the warning registry.

use htmlcheck_common::warning::{warn_once, was_warned};

#[test]
fn test_warn_once_records_message() {
    assert!(!was_warned("test", "first sighting"));
    warn_once("test", "first sighting");
    assert!(was_warned("test", "first sighting"));
}

#[test]
fn test_warnings_are_keyed_by_component() {
    warn_once("html", "shared message");
    assert!(was_warned("html", "shared message"));
    assert!(!was_warned("css", "shared message"));
}

#[test]
fn test_repeated_warning_is_harmless() {
    warn_once("test", "repeated");
    warn_once("test", "repeated");
    assert!(was_warned("test", "repeated"));
}
