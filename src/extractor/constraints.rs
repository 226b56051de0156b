//! Constraints Extractor

use tracing::debug;

use crate::dom;
use crate::index::DocumentIndex;

use super::anchors::{locate, SectionKind};
use super::tags::{ITEM_TAGS, LIST_TAGS};

/// Items of the first list following the "Constraints" anchor.
///
/// The list need not be a sibling of the anchor's block: it is the next
/// list in document order. Items are the list's own `<li>` children, trimmed.
/// No anchor, or no list after it, gives an empty vector.
#[must_use]
pub fn extract_constraints(index: &DocumentIndex) -> Vec<String> {
    let Some(anchor) = locate(index, SectionKind::Constraints) else {
        debug!("no constraints anchor");
        return Vec::new();
    };

    // Lists earlier in the same block do not count.
    let after = index.subtree_end(anchor.position);
    let Some((_, list)) = index.first_after(after, |node| dom::is_tag(node, &LIST_TAGS)) else {
        debug!("constraints anchor without a following list");
        return Vec::new();
    };

    dom::element_children(&list)
        .iter()
        .filter(|child| dom::is_tag(child, &ITEM_TAGS))
        .map(dom::normalized_text)
        .collect()
}
