//! Tag catalogs used by the section extractors.

/// Emphasis tags whose text can open a section: strong, b
pub static EMPHASIS_TAGS: [&str; 2] = ["strong", "b"];

/// Paragraph-level blocks collected as prose.
pub static PARAGRAPH_TAGS: [&str; 1] = ["p"];

/// Preformatted blocks, the canonical container of example text.
pub static PREFORMATTED_TAGS: [&str; 1] = ["pre"];

/// List containers holding constraint items.
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// List items.
pub static ITEM_TAGS: [&str; 1] = ["li"];

/// Graphic tags: img
pub static GRAPHIC_TAGS: [&str; 1] = ["img"];

/// Block-level containers that can enclose an anchor.
pub static BLOCK_TAGS: [&str; 17] = [
    "p", "div", "section", "article", "blockquote", "pre", "li", "ul", "ol", "dd", "dt", "h1",
    "h2", "h3", "h4", "h5", "h6",
];

/// Structural wrappers that never count as an anchor's enclosing block.
pub static ROOT_TAGS: [&str; 2] = ["html", "body"];
