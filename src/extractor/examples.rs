//! Example Extractor
//!
//! Statements ship examples in two markup shapes:
//!
//! ```html
//! <!-- preformatted: image, if any, somewhere before the block -->
//! <p><strong>Example 1:</strong></p>
//! <img src="tree.png">
//! <pre><strong>Input:</strong> root = [1,2]
//! <strong>Output:</strong> 2</pre>
//!
//! <!-- container: text in paragraphs, images inside -->
//! <div class="example-block">
//!   <p><strong>Input:</strong> root = [1,2]</p>
//!   <p><strong>Output:</strong> 2</p>
//!   <img src="tree.png">
//! </div>
//! ```
//!
//! Strategies are tried in priority order and the first non-empty result wins,
//! so the container shape is only consulted when there is no `<pre>` at all.

use tracing::debug;
use url::Url;

use crate::dom::{self, NodeRef};
use crate::index::DocumentIndex;
use crate::result::Example;
use crate::url_utils::create_absolute_url;
use crate::Options;

use super::tags::{GRAPHIC_TAGS, PARAGRAPH_TAGS, PREFORMATTED_TAGS};

/// Markup shapes examples are recognized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleStrategy {
    /// One `<pre>` per example, paired with the nearest preceding image.
    Preformatted,
    /// One container per example (marked by `Options::example_block_class`),
    /// carrying every image nested inside it.
    ExampleBlock,
}

impl ExampleStrategy {
    /// Strategies in the order they are tried.
    pub const PRIORITY: [ExampleStrategy; 2] = [Self::Preformatted, Self::ExampleBlock];

    /// Run this strategy alone. Examples are numbered from 1.
    #[must_use]
    pub fn extract(self, index: &DocumentIndex, options: &Options) -> Vec<Example> {
        let base = options.parsed_base_url();
        match self {
            Self::Preformatted => preformatted(index, options.bound_image_search, base.as_ref()),
            Self::ExampleBlock => example_blocks(index, &options.example_block_class, base.as_ref()),
        }
    }
}

/// Examples from the first strategy that finds any, with the strategy used.
///
/// Returns `(vec![], None)` when neither shape is present.
#[must_use]
pub fn extract_examples_with_strategy(
    index: &DocumentIndex,
    options: &Options,
) -> (Vec<Example>, Option<ExampleStrategy>) {
    for strategy in ExampleStrategy::PRIORITY {
        let examples = strategy.extract(index, options);
        if !examples.is_empty() {
            if strategy != ExampleStrategy::PRIORITY[0] {
                debug!(?strategy, count = examples.len(), "fallback example strategy matched");
            }
            return (examples, Some(strategy));
        }
    }
    debug!("no examples found");
    (Vec::new(), None)
}

/// Examples from the first strategy that finds any.
#[must_use]
pub fn extract_examples(index: &DocumentIndex, options: &Options) -> Vec<Example> {
    extract_examples_with_strategy(index, options).0
}

fn preformatted(index: &DocumentIndex, bounded: bool, base: Option<&Url>) -> Vec<Example> {
    let blocks = index.elements(&PREFORMATTED_TAGS);

    blocks
        .iter()
        .enumerate()
        .map(|(i, (pos, block))| {
            // Floor: last node of the previous block.
            let floor = if bounded && i > 0 {
                Some(index.subtree_end(blocks[i - 1].0))
            } else {
                None
            };
            let images = index
                .nearest_before(*pos, floor, |node| image_source(node).is_some())
                .and_then(|img| image_source(&img))
                .map(|src| resolve(&src, base))
                .into_iter()
                .collect();

            Example {
                index: i + 1,
                text: dom::normalized_text(block),
                images,
            }
        })
        .collect()
}

fn example_blocks(index: &DocumentIndex, class: &str, base: Option<&Url>) -> Vec<Example> {
    let mut containers: Vec<(usize, NodeRef)> = Vec::new();
    for (pos, node) in index.iter() {
        if !node.is_element() || !dom::has_class(&node, class) {
            continue;
        }
        // A marked container inside another one belongs to the outer example.
        if containers.last().is_some_and(|(outer, _)| index.contains(*outer, pos)) {
            continue;
        }
        containers.push((pos, node));
    }

    containers
        .iter()
        .enumerate()
        .map(|(i, (pos, _))| {
            let inside = (*pos + 1..=index.subtree_end(*pos)).filter_map(|p| index.node(p));

            let mut paragraphs = Vec::new();
            let mut images = Vec::new();
            for node in inside {
                if dom::is_tag(&node, &PARAGRAPH_TAGS) {
                    let text = dom::joined_text(&node, " ");
                    if !text.is_empty() {
                        paragraphs.push(text);
                    }
                } else if let Some(src) = image_source(&node) {
                    images.push(resolve(&src, base));
                }
            }

            Example {
                index: i + 1,
                text: paragraphs.join("\n"),
                images,
            }
        })
        .collect()
}

/// Source of an `<img>` carrying a non-empty `src`.
fn image_source(node: &NodeRef) -> Option<String> {
    if !dom::is_tag(node, &GRAPHIC_TAGS) {
        return None;
    }
    dom::get_attribute(node, "src")
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
}

fn resolve(src: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => create_absolute_url(src, base),
        None => src.to_string(),
    }
}
