//! Common utilities for the htmlcheck crates.
//!
//! This crate provides shared infrastructure used by all components:
//! - **Warning System** - colored, deduplicated terminal diagnostics

pub mod warning;
