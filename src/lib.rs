//! # rs-problem-extract
//!
//! Segments coding-problem statements into their sections.
//!
//! A statement arrives as one blob of HTML. This library locates the
//! emphasized section headers inside it and splits it into a description,
//! worked examples (with their illustrative images), constraints and
//! follow-up notes, then merges those with the problem's metadata into a
//! single serializable record.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_problem_extract::segment;
//!
//! let html = "<p>Given an array.</p><strong>Example 1:</strong>\
//!             <pre>Input: [1]\nOutput: 1</pre>\
//!             <strong>Constraints:</strong><ul><li>1 &lt;= n</li></ul>";
//!
//! let segments = segment(html);
//! assert_eq!(segments.description, "Given an array.");
//! assert_eq!(segments.examples[0].text, "Input: [1]\nOutput: 1");
//! assert_eq!(segments.constraints, ["1 <= n"]);
//! assert!(segments.follow_ups.is_empty());
//! ```
//!
//! ## Features
//!
//! - **Segmentation**: never fails; absent sections come back empty
//! - **Two example strategies**: `<pre>` blocks, or class-marked containers
//! - **Assembly**: merges upstream metadata, hints, starter code and solution
//! - **Transport decoding**: GraphQL payloads into [`ProblemSource`]
//!
//! The library performs no I/O.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Document-order index for positional queries.
pub mod index;

/// Section locator and extractors.
pub mod extractor;

/// Merging metadata with segmented content.
pub mod assemble;

/// Transport payload decoding.
pub mod source;

/// URL utilities for image source resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{Example, ProblemContent, Segments};
pub use source::ProblemSource;

/// Segments a problem statement using default options.
///
/// Malformed markup is recovered the way a browser would; the worst case
/// is an empty result.
///
/// # Example
///
/// ```rust
/// use rs_problem_extract::segment;
///
/// let segments = segment("<p>Nothing else here.</p>");
/// assert_eq!(segments.description, "Nothing else here.");
/// assert!(segments.examples.is_empty());
/// ```
#[must_use]
pub fn segment(html: &str) -> Segments {
    segment_with_options(html, &Options::default())
}

/// Segments a problem statement with custom options.
///
/// # Example
///
/// ```rust
/// use rs_problem_extract::{segment_with_options, Options};
///
/// let html = r#"<img src="/img/a.png"><pre>Input: 1</pre>"#;
/// let options = Options {
///     base_url: Some("https://assets.example.com/".to_string()),
///     ..Options::default()
/// };
/// let segments = segment_with_options(html, &options);
/// assert_eq!(segments.examples[0].images, ["https://assets.example.com/img/a.png"]);
/// ```
#[must_use]
pub fn segment_with_options(html: &str, options: &Options) -> Segments {
    let doc = dom::parse(html);
    extractor::segment_document(&doc, options)
}

/// Segments statement bytes, detecting the character encoding.
///
/// The encoding comes from a byte-order mark or a `<meta charset>`
/// declaration, defaulting to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_problem_extract::segment_bytes;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert_eq!(segment_bytes(html).description, "Café");
/// ```
#[must_use]
pub fn segment_bytes(html: &[u8]) -> Segments {
    let html_str = encoding::transcode_to_utf8(html);
    segment(&html_str)
}

/// Assembles the output record for one problem with default options.
///
/// # Example
///
/// ```rust
/// use rs_problem_extract::{assemble, ProblemSource};
///
/// let source = ProblemSource {
///     slug: Some("two-sum".to_string()),
///     content: "<p>Given an array.</p>".to_string(),
///     ..ProblemSource::default()
/// };
/// let content = assemble(source);
/// assert_eq!(content.description, "Given an array.");
/// assert_eq!(content.file_name(), "two-sum.json");
/// ```
#[must_use]
pub fn assemble(source: ProblemSource) -> ProblemContent {
    assemble_with_options(source, &Options::default())
}

/// Assembles the output record for one problem with custom options.
#[must_use]
pub fn assemble_with_options(source: ProblemSource, options: &Options) -> ProblemContent {
    assemble::assemble_problem(source, options)
}
