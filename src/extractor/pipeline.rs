//! Segmentation pipeline.
//!
//! Builds the document-order index once and runs every section extractor
//! over it. Nothing here allocates beyond the index and the output.

use tracing::trace;

use crate::dom::Document;
use crate::index::DocumentIndex;
use crate::result::Segments;
use crate::Options;

use super::{extract_constraints, extract_description, extract_examples, extract_follow_ups};

/// Segment a parsed statement into its sections.
#[must_use]
pub fn segment_document(doc: &Document, options: &Options) -> Segments {
    let index = DocumentIndex::new(doc);

    let segments = Segments {
        description: extract_description(&index),
        examples: extract_examples(&index, options),
        constraints: extract_constraints(&index),
        follow_ups: extract_follow_ups(&index),
    };

    trace!(
        nodes = index.len(),
        description_len = segments.description.len(),
        examples = segments.examples.len(),
        constraints = segments.constraints.len(),
        follow_ups = segments.follow_ups.len(),
        "statement segmented"
    );

    segments
}
