//! Section extraction.
//!
//! Every extractor reads the same `DocumentIndex` and returns an empty value
//! when its section is absent; none of them can fail.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs (emphasis, paragraph, list, block)
//! - `anchors`: Section Locator and the keyword table (`SectionKind`)
//! - `description`: Paragraphs before the first example
//! - `examples`: Worked examples, with the preformatted and container strategies
//! - `constraints`: List items after the "Constraints" anchor
//! - `follow_up`: Follow-up notes
//! - `pipeline`: Runs all of the above over one document
//!
//! # Usage
//!
//! ```rust
//! use rs_problem_extract::dom;
//! use rs_problem_extract::extractor::{locate, extract_constraints, SectionKind};
//! use rs_problem_extract::index::DocumentIndex;
//!
//! let doc = dom::parse("<p><strong>Constraints:</strong></p><ul><li>1 &lt;= n</li></ul>");
//! let index = DocumentIndex::new(&doc);
//!
//! assert!(locate(&index, SectionKind::Constraints).is_some());
//! assert_eq!(extract_constraints(&index), ["1 <= n"]);
//! ```

pub mod anchors;
pub mod constraints;
pub mod description;
pub mod examples;
pub mod follow_up;
pub mod pipeline;
pub mod tags;

pub use anchors::{is_anchor, locate, locate_all, SectionAnchor, SectionKind};
pub use constraints::extract_constraints;
pub use description::extract_description;
pub use examples::{extract_examples, extract_examples_with_strategy, ExampleStrategy};
pub use follow_up::extract_follow_ups;
pub use pipeline::segment_document;
