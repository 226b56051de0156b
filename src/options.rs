//! Configuration options for segmentation and assembly.
//!
//! The `Options` struct controls the few tunable parts of the pipeline:
//! the fallback example marker, image attribution and URL resolution.

/// Configuration options for segmentation and assembly.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_problem_extract::Options;
///
/// let options = Options {
///     base_url: Some("https://leetcode.com/".to_string()),
///     bound_image_search: true,
///     ..Options::default()
/// };
/// assert!(options.include_solution);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Class marker of the container used by the fallback example strategy.
    ///
    /// Only consulted when the document has no `<pre>` blocks.
    ///
    /// Default: `"example-block"`
    pub example_block_class: String,

    /// Stop the backward image search at the previous `<pre>` block.
    ///
    /// With the default, an example with no image of its own inherits the
    /// nearest image anywhere before it, possibly one shown for an earlier
    /// example. Enabling this confines the search to the stretch of markup
    /// between the previous example and this one.
    ///
    /// Default: `false`
    pub bound_image_search: bool,

    /// Base URL for resolving relative image sources.
    ///
    /// Absolute URLs and `data:` URIs are kept as they are.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Keep the plain-text solution write-up in the assembled record.
    ///
    /// Default: `true`
    pub include_solution: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            example_block_class: "example-block".to_string(),
            bound_image_search: false,
            base_url: None,
            include_solution: true,
        }
    }
}

impl Options {
    /// Parsed form of `base_url`, if it is set and valid.
    #[must_use]
    pub(crate) fn parsed_base_url(&self) -> Option<url::Url> {
        self.base_url
            .as_deref()
            .and_then(|base| url::Url::parse(base.trim()).ok())
    }
}
