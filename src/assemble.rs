//! Assembler: merges transport metadata with the segmented statement.

use tracing::debug;

use crate::dom;
use crate::extractor::segment_document;
use crate::patterns::{BLANK_LINES, HORIZONTAL_WHITESPACE};
use crate::result::ProblemContent;
use crate::source::ProblemSource;
use crate::Options;

/// Build the output record for one problem.
///
/// Metadata passes through untouched; only the statement is segmented and
/// the solution reduced to plain text. Missing upstream fields stay empty.
#[must_use]
pub fn assemble_problem(source: ProblemSource, options: &Options) -> ProblemContent {
    let doc = dom::parse(&source.content);
    let segments = segment_document(&doc, options);

    let solution = if options.include_solution {
        source.solution_html.as_deref().and_then(solution_text)
    } else {
        None
    };

    debug!(
        slug = source.slug.as_deref().unwrap_or_default(),
        examples = segments.examples.len(),
        has_solution = solution.is_some(),
        "problem assembled"
    );

    ProblemContent {
        title: source.title,
        problem_id: source.problem_id,
        frontend_id: source.frontend_id,
        frontend_label: source.frontend_label,
        difficulty: source.difficulty,
        problem_slug: source.slug,
        topics: source.topics,
        description: segments.description,
        examples: segments.examples,
        constraints: segments.constraints,
        follow_ups: segments.follow_ups,
        hints: source.hints,
        code_snippets: source.code_snippets,
        solution,
    }
}

/// Solution write-up with markup stripped.
///
/// Line structure survives; runs of spaces collapse and blank-line runs
/// shrink to one. `None` when nothing but whitespace is left.
#[must_use]
pub fn solution_text(markup: &str) -> Option<String> {
    let doc = dom::parse(markup);
    let body = doc.select("body");
    let raw = body.text();

    let lines: Vec<String> = raw
        .lines()
        .map(|line| HORIZONTAL_WHITESPACE.replace_all(line, " ").trim().to_string())
        .collect();
    let text = BLANK_LINES.replace_all(lines.join("\n").trim(), "\n\n").into_owned();

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn source() -> ProblemSource {
        ProblemSource {
            title: Some("Two Sum".to_string()),
            problem_id: Some(1),
            frontend_id: Some(1),
            frontend_label: None,
            slug: Some("two-sum".to_string()),
            difficulty: Some("Easy".to_string()),
            topics: vec!["Array".to_string()],
            content: "<p>Given an array.</p><strong>Example 1:</strong><pre>Input: [1]</pre>".to_string(),
            hints: vec!["Use a map.".to_string()],
            code_snippets: BTreeMap::from([("rust".to_string(), "impl Solution {}".to_string())]),
            solution_html: Some("<h2>Approach</h2>\n<p>Hash   <b>it</b>.</p>".to_string()),
        }
    }

    #[test]
    fn test_metadata_passes_through() {
        let content = assemble_problem(source(), &Options::default());

        assert_eq!(content.title.as_deref(), Some("Two Sum"));
        assert_eq!(content.problem_id, Some(1));
        assert_eq!(content.problem_slug.as_deref(), Some("two-sum"));
        assert_eq!(content.topics, ["Array"]);
        assert_eq!(content.hints, ["Use a map."]);
        assert_eq!(content.code_snippets["rust"], "impl Solution {}");
        assert_eq!(content.description, "Given an array.");
        assert_eq!(content.examples.len(), 1);
    }

    #[test]
    fn test_solution_reduced_to_text() {
        let content = assemble_problem(source(), &Options::default());
        assert_eq!(content.solution.as_deref(), Some("Approach\nHash it."));
    }

    #[test]
    fn test_solution_can_be_dropped() {
        let options = Options {
            include_solution: false,
            ..Options::default()
        };
        assert!(assemble_problem(source(), &options).solution.is_none());
    }

    #[test]
    fn test_empty_source() {
        let content = assemble_problem(ProblemSource::default(), &Options::default());
        assert_eq!(content, ProblemContent::default());
    }

    #[test]
    fn test_solution_text_collapses_blank_lines() {
        let markup = "<p>One</p>\n\n\n\n<p>Two &amp; three</p>";
        assert_eq!(solution_text(markup).as_deref(), Some("One\n\nTwo & three"));
        assert_eq!(solution_text("<p> </p>"), None);
    }
}
