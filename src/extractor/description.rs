//! Description Extractor
//!
//! The description is the run of top-level paragraphs before the first
//! example anchor. Traversal follows sibling links across the top level only;
//! nested content (lists, code, images) never contributes.

use crate::dom::{self, NodeRef};
use crate::index::DocumentIndex;

use super::anchors::{locate, SectionKind};
use super::tags::PARAGRAPH_TAGS;

/// Wrappers that are looked through when they are the only top-level element.
const WRAPPER_TAGS: [&str; 3] = ["div", "section", "article"];

/// Newline-joined text of the paragraphs preceding the first example.
///
/// Empty paragraphs (`<p>&nbsp;</p>`) are skipped. Without any example
/// anchor every top-level paragraph counts.
#[must_use]
pub fn extract_description(index: &DocumentIndex) -> String {
    let stop = locate(index, SectionKind::Example).map(|anchor| anchor.position);

    let mut paragraphs = Vec::new();
    let mut current = top_level(index.body()).first_child();
    while let Some(node) = current {
        let holds_anchor = stop.is_some_and(|anchor| {
            index
                .position(&node)
                .is_some_and(|pos| index.contains(pos, anchor))
        });
        if holds_anchor {
            break;
        }

        if dom::is_tag(&node, &PARAGRAPH_TAGS) {
            let text = dom::normalized_text(&node);
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
        current = node.next_sibling();
    }

    paragraphs.join("\n")
}

/// Descend through lone wrapper elements: `<body><div>...</div></body>`
/// treats the div's children as the top level.
fn top_level<'a>(mut container: NodeRef<'a>) -> NodeRef<'a> {
    loop {
        let children = container.children();
        let mut significant = children
            .iter()
            .filter(|child| child.is_element() || (child.is_text() && !dom::is_blank_text(child)));
        match (significant.next(), significant.next()) {
            (Some(only), None) if dom::is_tag(only, &WRAPPER_TAGS) => container = *only,
            _ => return container,
        }
    }
}
