//! Character encoding detection for raw statement bytes.
//!
//! Statements normally arrive as UTF-8 inside JSON, but archived copies may
//! be saved as standalone pages with a legacy charset declaration.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `<meta charset="...">` or `content="...; charset=..."`, whichever comes first.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([A-Za-z0-9_\-:.]+)"#).expect("valid regex")
});

/// Only the head of the document is searched for a declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the declared encoding, defaulting to UTF-8.
///
/// A UTF-8 or UTF-16 byte-order mark wins over any declaration.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode bytes to UTF-8, replacing invalid sequences with U+FFFD.
///
/// Never fails; borrows when the input is already valid UTF-8.
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, _) = detect_encoding(bytes).decode(bytes);
    text
}
