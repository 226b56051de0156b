//! Error types for rs-problem-extract.
//!
//! Segmentation itself never fails: absent sections come back empty.
//! These errors only arise at the edges where the crate reads a transport
//! payload or writes an assembled record.

/// Error type for payload decoding and output serialization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport payload was not valid JSON or had the wrong shape.
    #[error("Malformed problem payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The GraphQL response carried no question object.
    #[error("No question data in response")]
    MissingQuestion,

    /// Writing the assembled record failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for payload and output operations.
pub type Result<T> = std::result::Result<T, Error>;
