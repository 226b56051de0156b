//! Document-order index.
//!
//! The tree is flattened once, depth first and left to right, so that
//! "nearest preceding X" and "next X after this block" become plain scans
//! over a slice instead of repeated sibling/parent walks.
//!
//! ```text
//! <p>a<b>c</b></p><pre>d</pre>
//!
//!   pos  node   subtree_end
//!   k    <p>    k+3
//!   k+1  "a"    k+1
//!   k+2  <b>    k+3
//!   k+3  "c"    k+3
//!   k+4  <pre>  k+5
//! ```

use std::collections::HashMap;

use crate::dom::{self, Document, NodeId, NodeRef};

/// Linear, read-only view of a parsed document in document order.
pub struct DocumentIndex<'a> {
    nodes: Vec<NodeRef<'a>>,
    positions: HashMap<NodeId, usize>,
    /// Position of the last node inside each node's subtree.
    subtree_end: Vec<usize>,
    body: usize,
}

impl<'a> DocumentIndex<'a> {
    /// Flatten `doc` into document order.
    #[must_use]
    pub fn new(doc: &'a Document) -> Self {
        let mut nodes = Vec::new();
        let mut subtree_end = Vec::new();

        // An entry carrying `Some(pos)` is the exit marker for the subtree opened at `pos`.
        let mut stack: Vec<(NodeRef<'a>, Option<usize>)> = vec![(doc.root(), None)];
        while let Some((node, opened_at)) = stack.pop() {
            if let Some(pos) = opened_at {
                subtree_end[pos] = nodes.len() - 1;
                continue;
            }
            let pos = nodes.len();
            nodes.push(node);
            subtree_end.push(pos);
            stack.push((node, Some(pos)));
            for child in node.children().into_iter().rev() {
                stack.push((child, None));
            }
        }

        let positions = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id, pos))
            .collect();

        let body = nodes
            .iter()
            .position(|node| dom::is_tag(node, &["body"]))
            .unwrap_or(0);

        Self {
            nodes,
            positions,
            subtree_end,
            body,
        }
    }

    /// Number of indexed nodes, including the document root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds nothing but the document root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Node at a document-order position.
    #[must_use]
    pub fn node(&self, pos: usize) -> Option<NodeRef<'a>> {
        self.nodes.get(pos).copied()
    }

    /// Document-order position of a node from the indexed document.
    #[must_use]
    pub fn position(&self, node: &NodeRef) -> Option<usize> {
        self.positions.get(&node.id).copied()
    }

    /// The `<body>` element, or the document root when there is none.
    #[must_use]
    pub fn body(&self) -> NodeRef<'a> {
        self.nodes[self.body]
    }

    /// All nodes in document order, paired with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, NodeRef<'a>)> + '_ {
        self.nodes.iter().copied().enumerate()
    }

    /// Elements with one of the given tag names, in document order.
    #[must_use]
    pub fn elements(&self, tags: &[&str]) -> Vec<(usize, NodeRef<'a>)> {
        self.iter().filter(|(_, node)| dom::is_tag(node, tags)).collect()
    }

    /// Whether the node at `pos` lies inside the subtree rooted at `ancestor`.
    ///
    /// A node counts as inside its own subtree.
    #[must_use]
    pub fn contains(&self, ancestor: usize, pos: usize) -> bool {
        self.subtree_end
            .get(ancestor)
            .is_some_and(|&end| pos >= ancestor && pos <= end)
    }

    /// Position of the last node inside the subtree rooted at `pos`.
    #[must_use]
    pub fn subtree_end(&self, pos: usize) -> usize {
        self.subtree_end.get(pos).copied().unwrap_or(pos)
    }

    /// Scan backward from just before `pos` for the first node satisfying `pred`.
    ///
    /// The scan never goes below `floor` (exclusive), when given.
    pub fn nearest_before<F>(&self, pos: usize, floor: Option<usize>, mut pred: F) -> Option<NodeRef<'a>>
    where
        F: FnMut(&NodeRef<'a>) -> bool,
    {
        let stop = floor.map_or(0, |f| f + 1);
        (stop..pos.min(self.nodes.len()))
            .rev()
            .map(|p| self.nodes[p])
            .find(|node| pred(node))
    }

    /// Scan forward from just after `pos` for the first node satisfying `pred`.
    pub fn first_after<F>(&self, pos: usize, mut pred: F) -> Option<(usize, NodeRef<'a>)>
    where
        F: FnMut(&NodeRef<'a>) -> bool,
    {
        self.nodes
            .iter()
            .copied()
            .enumerate()
            .skip(pos + 1)
            .find(|(_, node)| pred(node))
    }
}
