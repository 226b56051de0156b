//! Section Locator
//!
//! A section starts at an emphasized run (`<strong>`/`<b>`) whose text carries
//! the section keyword. Every recognized section type lives in `SectionKind`,
//! so adding one means adding a variant and its matching rule here.

use crate::dom::{self, NodeRef};
use crate::index::DocumentIndex;
use crate::patterns::FOLLOW_UP;

use super::tags::{BLOCK_TAGS, EMPHASIS_TAGS, ROOT_TAGS};

/// Section types recognized by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// "Example 1:", "Example 2:", ...
    Example,
    /// "Constraints:"
    Constraints,
    /// "Follow up:", "Follow-up:"
    FollowUp,
}

impl SectionKind {
    /// Every section kind, in the order they usually appear.
    pub const ALL: [SectionKind; 3] = [Self::Example, Self::Constraints, Self::FollowUp];

    /// The literal keyword as it appears in statements.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Example => "Example",
            Self::Constraints => "Constraints",
            Self::FollowUp => "Follow up",
        }
    }

    /// Whether emphasized text opens a section of this kind.
    ///
    /// "Example" and "Constraints" are exact, case-sensitive substrings.
    /// Follow-ups are matched ignoring case and the separator between the
    /// two words, since statements spell it several ways.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Example | Self::Constraints => text.contains(self.keyword()),
            Self::FollowUp => FOLLOW_UP.is_match(text),
        }
    }
}

/// A located section start.
#[derive(Clone, Copy)]
pub struct SectionAnchor<'a> {
    /// Which section this anchor opens.
    pub kind: SectionKind,
    /// The emphasized node carrying the keyword.
    pub node: NodeRef<'a>,
    /// Document-order position of `node`.
    pub position: usize,
    /// Nearest block-level ancestor, or the anchor itself when it sits
    /// directly under `<body>`.
    pub block: NodeRef<'a>,
    /// Document-order position of `block`.
    pub block_position: usize,
}

/// Whether `node` is an emphasized run opening a `kind` section.
#[must_use]
pub fn is_anchor(node: &NodeRef, kind: SectionKind) -> bool {
    dom::is_tag(node, &EMPHASIS_TAGS) && kind.matches(&dom::text_content(node))
}

/// First anchor of `kind` in document order, `None` when the section is absent.
#[must_use]
pub fn locate<'a>(index: &DocumentIndex<'a>, kind: SectionKind) -> Option<SectionAnchor<'a>> {
    index
        .iter()
        .find(|(_, node)| is_anchor(node, kind))
        .map(|(pos, node)| anchor_at(index, kind, pos, node))
}

/// Every anchor of `kind` in document order.
#[must_use]
pub fn locate_all<'a>(index: &DocumentIndex<'a>, kind: SectionKind) -> Vec<SectionAnchor<'a>> {
    index
        .iter()
        .filter(|(_, node)| is_anchor(node, kind))
        .map(|(pos, node)| anchor_at(index, kind, pos, node))
        .collect()
}

fn anchor_at<'a>(
    index: &DocumentIndex<'a>,
    kind: SectionKind,
    position: usize,
    node: NodeRef<'a>,
) -> SectionAnchor<'a> {
    let (block, block_position) = enclosing_block(index, &node)
        .unwrap_or((node, position));
    SectionAnchor {
        kind,
        node,
        position,
        block,
        block_position,
    }
}

fn enclosing_block<'a>(index: &DocumentIndex<'a>, node: &NodeRef<'a>) -> Option<(NodeRef<'a>, usize)> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if !ancestor.is_element() || dom::is_tag(&ancestor, &ROOT_TAGS) {
            return None;
        }
        if dom::is_tag(&ancestor, &BLOCK_TAGS) {
            return index.position(&ancestor).map(|pos| (ancestor, pos));
        }
        current = ancestor.parent();
    }
    None
}
