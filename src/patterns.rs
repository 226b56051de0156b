//! Compiled regex patterns for section matching and text cleanup.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Section Keywords
// =============================================================================

/// Matches the follow-up keyword in any case, with or without a separator:
/// "Follow up", "Follow-up", "FOLLOW_UP", "followup".
pub static FOLLOW_UP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)follow[\s\-_]*up").expect("FOLLOW_UP regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of horizontal whitespace for single-space collapsing.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\u{a0}]+").expect("HORIZONTAL_WHITESPACE regex")
});

/// Matches three or more line breaks (with optional blank-line padding).
pub static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n(\s*\n)+").expect("BLANK_LINES regex")
});
