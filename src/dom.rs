//! Document Model Adapter
//!
//! Thin function layer over `dom_query`. Parsing goes through html5ever, so
//! unclosed tags, stray end tags and bare entities are recovered the way a
//! browser would; nothing here can fail.
//!
//! Functions take `NodeRef` rather than `Selection` because every extractor
//! works on single nodes pulled out of the document-order index.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse a markup string into a document.
///
/// Fragments are wrapped in the synthetic `<html><body>` structure, so an
/// empty string still yields a root with an empty `<body>`.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase), `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether the node is an element with one of the given tag names.
#[must_use]
pub fn is_tag(node: &NodeRef, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|t| tags.contains(&t.as_str()))
}

/// Check whether the node is a text node holding only whitespace.
#[must_use]
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Check whether the `class` attribute lists `class` as one of its tokens.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    node.attr("class")
        .is_some_and(|value| value.split_whitespace().any(|token| token == class))
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Text content with leading and trailing whitespace removed.
///
/// Inner whitespace, including line breaks inside `<pre>`, is preserved.
#[must_use]
pub fn normalized_text(node: &NodeRef) -> String {
    text_content(node).trim().to_string()
}

/// Every descendant text fragment, trimmed, empty ones dropped, joined with `sep`.
///
/// `<p><strong>Input:</strong> x</p>` with `" "` gives `"Input: x"`.
#[must_use]
pub fn joined_text(node: &NodeRef, sep: &str) -> String {
    let mut parts = Vec::new();
    collect_text_fragments(node, &mut parts);
    parts.join(sep)
}

fn collect_text_fragments(node: &NodeRef, parts: &mut Vec<String>) {
    if node.is_text() {
        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
        return;
    }
    for child in node.children() {
        collect_text_fragments(&child, parts);
    }
}

// === Tree Navigation ===

/// Direct element children, skipping text and comment nodes.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Next sibling that is not a whitespace-only text node.
///
/// Comments are skipped too; any other node (element or real text) is returned.
#[must_use]
pub fn next_significant_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() || (s.is_text() && !is_blank_text(&s)) {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}
