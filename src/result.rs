//! Result types for segmentation and assembly output.
//!
//! `Segments` is what the extractors produce from one document;
//! `ProblemContent` is the assembled record handed to persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One worked example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// 1-based position among the document's examples.
    pub index: usize,

    /// Example body with surrounding whitespace trimmed.
    pub text: String,

    /// Illustrative image sources. At most one under the primary strategy.
    pub images: Vec<String>,
}

/// Sections found in a single problem statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    /// Paragraphs before the first example, newline-joined.
    pub description: String,

    /// Worked examples in document order, indexed from 1.
    pub examples: Vec<Example>,

    /// Constraint list items; empty when the section is absent.
    pub constraints: Vec<String>,

    /// Follow-up notes; empty when the section is absent.
    pub follow_ups: Vec<String>,
}

/// Assembled output for one problem.
///
/// Field names match the JSON documents the scraper writes per slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemContent {
    pub title: Option<String>,

    /// Internal question id.
    pub problem_id: Option<u32>,

    /// Display-facing ("frontend") question number.
    ///
    /// `None` for non-numeric ids; those are kept in `frontend_label`.
    pub frontend_id: Option<u32>,

    /// Display id verbatim when it is not a plain number ("LCP 01").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_label: Option<String>,

    /// "Easy", "Medium" or "Hard" as reported upstream.
    pub difficulty: Option<String>,

    pub problem_slug: Option<String>,

    /// Topic tag names in upstream order.
    pub topics: Vec<String>,

    pub description: String,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub follow_ups: Vec<String>,
    pub hints: Vec<String>,

    /// Starter code keyed by language slug ("cpp", "python3", ...).
    pub code_snippets: BTreeMap<String, String>,

    /// Official solution write-up reduced to plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl ProblemContent {
    /// Output file name used by persistence: `<slug>.json`.
    ///
    /// Falls back to the frontend id or label, then to `"problem"`.
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem = self
            .problem_slug
            .as_deref()
            .filter(|slug| !slug.trim().is_empty())
            .map(str::to_string)
            .or_else(|| self.frontend_id.map(|id| id.to_string()))
            .or_else(|| self.frontend_label.clone())
            .unwrap_or_else(|| "problem".to_string());
        format!("{stem}.json")
    }

    /// Two-space indented JSON, non-ASCII kept as is.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialize` if serialization fails.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(crate::Error::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_prefers_slug() {
        let content = ProblemContent {
            problem_slug: Some("two-sum".to_string()),
            frontend_id: Some(1),
            ..ProblemContent::default()
        };
        assert_eq!(content.file_name(), "two-sum.json");
    }

    #[test]
    fn test_file_name_fallbacks() {
        let by_id = ProblemContent {
            problem_slug: Some("  ".to_string()),
            frontend_id: Some(42),
            ..ProblemContent::default()
        };
        assert_eq!(by_id.file_name(), "42.json");
        assert_eq!(ProblemContent::default().file_name(), "problem.json");

        let by_label = ProblemContent {
            frontend_label: Some("LCP 01".to_string()),
            ..ProblemContent::default()
        };
        assert_eq!(by_label.file_name(), "LCP 01.json");
    }

    #[test]
    fn test_missing_solution_is_omitted() {
        let json = ProblemContent::default().to_json_pretty().unwrap();
        assert!(!json.contains("\"solution\""));
        assert!(json.contains("\"constraints\": []"));
        assert!(json.contains("\"problem_id\": null"));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let content = ProblemContent {
            description: "1 ≤ n".to_string(),
            ..ProblemContent::default()
        };
        assert!(content.to_json_pretty().unwrap().contains("1 ≤ n"));
    }
}
