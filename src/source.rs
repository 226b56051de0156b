//! Transport-facing input record.
//!
//! The fetch itself happens elsewhere; this module only describes the request
//! the transport should send and decodes what comes back. Upstream payloads
//! are loose (ids as strings, `null` lists for locked problems), so decoding
//! defaults anything missing instead of failing.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::{Error, Result};

/// GraphQL document fetching everything the assembler needs for one problem.
pub const QUESTION_QUERY: &str = r"query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    title
    titleSlug
    content
    difficulty
    topicTags {
      name
    }
    codeSnippets {
      lang
      langSlug
      code
    }
    hints
    solution {
      content
    }
    exampleTestcases
  }
}";

/// JSON body for a `questionData` request for `slug`.
#[must_use]
pub fn graphql_request_body(slug: &str) -> Value {
    json!({
        "operationName": "questionData",
        "variables": { "titleSlug": slug },
        "query": QUESTION_QUERY,
    })
}

/// Everything the assembler consumes for one problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSource {
    pub title: Option<String>,
    pub problem_id: Option<u32>,
    pub frontend_id: Option<u32>,
    /// Display id as sent upstream when it is not a plain number ("LCP 01").
    pub frontend_label: Option<String>,
    pub slug: Option<String>,
    pub difficulty: Option<String>,
    pub topics: Vec<String>,
    /// Raw statement markup; empty for locked problems.
    pub content: String,
    pub hints: Vec<String>,
    /// Starter code keyed by language slug.
    pub code_snippets: BTreeMap<String, String>,
    /// Raw solution write-up markup, when one is published.
    pub solution_html: Option<String>,
}

impl ProblemSource {
    /// Decode a full GraphQL response: `{"data": {"question": {...}}}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` for malformed JSON and `Error::MissingQuestion`
    /// when the response carries no question (unknown slug).
    pub fn from_graphql_response(json: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(json)?;
        envelope
            .data
            .and_then(|data| data.question)
            .map(Self::from)
            .ok_or(Error::MissingQuestion)
    }

    /// Decode a bare question object.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` for malformed JSON.
    pub fn from_question_json(json: &str) -> Result<Self> {
        let question: RawQuestion = serde_json::from_str(json)?;
        Ok(question.into())
    }

    /// Decode either shape, preferring the response envelope when a `data`
    /// key is present.
    ///
    /// # Errors
    ///
    /// See [`Self::from_graphql_response`] and [`Self::from_question_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if value.get("data").is_some() {
            Self::from_graphql_response(json)
        } else {
            Ok(serde_json::from_value::<RawQuestion>(value)?.into())
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
}

#[derive(Deserialize)]
struct EnvelopeData {
    question: Option<RawQuestion>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawQuestion {
    question_id: Option<RawId>,
    question_frontend_id: Option<RawId>,
    title: Option<String>,
    title_slug: Option<String>,
    content: Option<String>,
    difficulty: Option<String>,
    topic_tags: Option<Vec<RawTopicTag>>,
    code_snippets: Option<Vec<RawCodeSnippet>>,
    hints: Option<Vec<String>>,
    solution: Option<RawSolution>,
}

/// Ids arrive as strings from GraphQL and as numbers from the REST listing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn to_u32(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Trimmed text of an id that does not parse as a number.
    fn label(&self) -> Option<String> {
        match self {
            Self::Text(s) if self.to_u32().is_none() && !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawTopicTag {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCodeSnippet {
    lang: Option<String>,
    lang_slug: Option<String>,
    code: Option<String>,
}

#[derive(Deserialize)]
struct RawSolution {
    content: Option<String>,
}

impl From<RawQuestion> for ProblemSource {
    fn from(raw: RawQuestion) -> Self {
        let code_snippets = raw
            .code_snippets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|snippet| {
                let lang = snippet.lang_slug.or(snippet.lang)?;
                Some((lang, snippet.code.unwrap_or_default()))
            })
            .collect();

        Self {
            title: raw.title,
            problem_id: raw.question_id.as_ref().and_then(RawId::to_u32),
            frontend_id: raw.question_frontend_id.as_ref().and_then(RawId::to_u32),
            frontend_label: raw.question_frontend_id.as_ref().and_then(RawId::label),
            slug: raw.title_slug,
            difficulty: raw.difficulty,
            topics: raw
                .topic_tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|tag| tag.name)
                .collect(),
            content: raw.content.unwrap_or_default(),
            hints: raw.hints.unwrap_or_default(),
            code_snippets,
            solution_html: raw
                .solution
                .and_then(|solution| solution.content)
                .filter(|content| !content.trim().is_empty()),
        }
    }
}
