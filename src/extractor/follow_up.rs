//! Follow-up Extractor
//!
//! ```html
//! <p><strong>Follow up:</strong> Can you do it in O(1) space?</p>   <- remainder
//! <p>What if the input is sorted?</p>                                <- trailing paragraph
//! <pre>...</pre>                                                     <- ends the group
//! ```
//!
//! Some statements put the anchor outside any paragraph (straight under
//! `<body>` or a wrapper `<div>`) with the question as loose inline content
//! after it; the inline run up to the next block then plays the role of the
//! paragraph remainder.

use std::collections::HashSet;

use crate::dom::{self, NodeRef};
use crate::index::DocumentIndex;

use super::anchors::{is_anchor, locate_all, SectionAnchor, SectionKind};
use super::tags::{BLOCK_TAGS, PARAGRAPH_TAGS};

/// Follow-up notes in document order.
///
/// Each paragraph holding a follow-up anchor yields its own text minus the
/// anchor (when anything is left), then one entry per immediately following
/// sibling paragraph. An anchor outside a paragraph uses its inline run. A following paragraph that opens its own follow-up
/// ends the group and starts the next one.
#[must_use]
pub fn extract_follow_ups(index: &DocumentIndex) -> Vec<String> {
    let mut entries = Vec::new();
    let mut seen_groups = HashSet::new();
    let mut previous: Option<usize> = None;

    for anchor in locate_all(index, SectionKind::FollowUp) {
        // `<b><strong>Follow up</strong></b>` is one anchor, not two.
        let nested = previous.is_some_and(|prev| index.contains(prev, anchor.position));
        previous = Some(anchor.position);
        let in_paragraph = dom::is_tag(&anchor.block, &PARAGRAPH_TAGS);
        // Several anchors in one paragraph form a single group.
        let group = if in_paragraph { anchor.block_position } else { anchor.position };
        if nested || !seen_groups.insert(group) {
            continue;
        }

        let (remainder, last) = if in_paragraph {
            (
                text_outside(index, anchor.block_position, anchor.position),
                anchor.block,
            )
        } else {
            inline_run(&anchor)
        };

        let remainder = remainder.trim().trim_start_matches(':').trim();
        if !remainder.is_empty() {
            entries.push(remainder.to_string());
        }

        let mut next = dom::next_significant_sibling(&last);
        while let Some(sibling) = next {
            if !dom::is_tag(&sibling, &PARAGRAPH_TAGS) || opens_follow_up(index, &sibling) {
                break;
            }
            let text = dom::normalized_text(&sibling);
            if !text.is_empty() {
                entries.push(text);
            }
            next = dom::next_significant_sibling(&sibling);
        }
    }

    entries
}

/// Text of the paragraph at `pos`, leaving out the subtree rooted at `skip`.
fn text_outside(index: &DocumentIndex, pos: usize, skip: usize) -> String {
    let mut text = String::new();
    for p in pos + 1..=index.subtree_end(pos) {
        if index.contains(skip, p) {
            continue;
        }
        if let Some(node) = index.node(p).filter(NodeRef::is_text) {
            text.push_str(&node.text());
        }
    }
    text
}

/// Loose inline content after an anchor outside any paragraph, up to the next block.
///
/// Returns the text and the last node consumed.
fn inline_run<'a>(anchor: &SectionAnchor<'a>) -> (String, NodeRef<'a>) {
    let mut text = String::new();
    let mut last = anchor.node;
    let mut next = anchor.node.next_sibling();
    while let Some(node) = next {
        if dom::is_tag(&node, &BLOCK_TAGS) || dom::is_tag(&node, &["br", "hr"]) {
            break;
        }
        text.push_str(&dom::text_content(&node));
        last = node;
        next = node.next_sibling();
    }
    (text, last)
}

fn opens_follow_up(index: &DocumentIndex, node: &NodeRef) -> bool {
    let Some(pos) = index.position(node) else {
        return false;
    };
    (pos..=index.subtree_end(pos)).any(|p| {
        index
            .node(p)
            .is_some_and(|n| is_anchor(&n, SectionKind::FollowUp))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn follow_ups(html: &str) -> Vec<String> {
        let doc = parse(html);
        extract_follow_ups(&DocumentIndex::new(&doc))
    }

    #[test]
    fn test_inline_remainder_then_trailing_paragraphs() {
        let html = "<p><strong>Follow up:</strong> Can you do it in O(1)?</p>\n<p>What if sorted?</p>\n<p>What if streamed?</p><pre>x</pre><p>Unrelated.</p>";
        assert_eq!(
            follow_ups(html),
            ["Can you do it in O(1)?", "What if sorted?", "What if streamed?"]
        );
    }

    #[test]
    fn test_hyphenated_and_lowercase_variants() {
        assert_eq!(
            follow_ups("<p><strong>Follow-up:</strong>&nbsp;Less than O(n<sup>2</sup>)?</p>"),
            ["Less than O(n2)?"]
        );
        assert_eq!(follow_ups("<p><b>follow up</b>: recursion?</p>"), ["recursion?"]);
    }

    #[test]
    fn test_anchor_only_paragraph_contributes_siblings() {
        let html = "<p><strong>Follow up:</strong></p><p>Use constant memory.</p><p>&nbsp;</p>";
        assert_eq!(follow_ups(html), ["Use constant memory."]);
    }

    #[test]
    fn test_independent_groups_in_order() {
        let html = "<p><strong>Follow up:</strong> first</p><p>first-b</p><p><strong>Follow-up:</strong> second</p><p>second-b</p>";
        assert_eq!(follow_ups(html), ["first", "first-b", "second", "second-b"]);
    }

    #[test]
    fn test_group_ends_at_non_paragraph() {
        let html = "<p><strong>Follow up:</strong> a</p><ul><li>x</li></ul><p>b</p>";
        assert_eq!(follow_ups(html), ["a"]);
    }

    #[test]
    fn test_top_level_anchor_takes_inline_run() {
        let html = "<p>&nbsp;</p>\n<strong>Follow-up:&nbsp;</strong>Can you beat <code>O(n<sup>2</sup>)</code> time?\n<p>Or use less memory?</p>";
        assert_eq!(follow_ups(html), ["Can you beat O(n2) time?", "Or use less memory?"]);
    }

    #[test]
    fn test_anchor_in_wrapper_takes_only_its_inline_run() {
        let html = "<div><p>Given an array.</p><p><strong>Example 1:</strong></p><pre>Input: 1</pre><strong>Follow-up:</strong> faster?</div>";
        assert_eq!(follow_ups(html), ["faster?"]);
    }

    #[test]
    fn test_wrapped_anchor_keeps_trailing_paragraphs() {
        let html = "<section><pre>x</pre>\n<b>Follow up:</b> a<p>b</p><p>c</p></section>";
        assert_eq!(follow_ups(html), ["a", "b", "c"]);
    }

    #[test]
    fn test_two_anchors_in_one_paragraph_form_one_group() {
        let html = "<p><strong>Follow up:</strong> a <strong>Follow-up 2:</strong> b</p>";
        assert_eq!(follow_ups(html), ["a Follow-up 2: b"]);
    }

    #[test]
    fn test_nested_emphasis_counts_once() {
        let html = "<b><strong>Follow up:</strong></b> once\n<p>tail</p>";
        assert_eq!(follow_ups(html), ["once", "tail"]);
    }

    #[test]
    fn test_absent() {
        assert!(follow_ups("<p>Following the rules is up to you.</p>").is_empty());
        assert!(follow_ups("").is_empty());
    }
}
