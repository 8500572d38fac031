//! Error types for Wordnik API operations.

use thiserror::Error;

/// Errors that can occur during Wordnik API operations.
#[derive(Debug, Error)]
pub enum WordnikError {
    /// Configuration is missing or incomplete.
    #[error("Wordnik configuration required: {0}")]
    ConfigMissing(String),

    /// A required argument was empty. Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be constructed (bad method, bad URL, bad body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP transport error (timeout, connection failure, DNS).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value could not be rendered as JSON for output.
    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<url::ParseError> for WordnikError {
    fn from(err: url::ParseError) -> Self {
        WordnikError::InvalidRequest(format!("invalid URL: {err}"))
    }
}

/// Result type alias for Wordnik operations.
pub type Result<T> = core::result::Result<T, WordnikError>;

/// Reject an empty required string argument.
pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(WordnikError::InvalidArgument(format!(
            "empty {name} not allowed"
        )));
    }
    Ok(())
}

/// Reject an argument that is empty or cannot stand as one path segment.
///
/// `.` and `..` (escaped or not) are resolved away as dot-segments when the
/// URL is parsed, which would send the request to a different resource.
pub(crate) fn require_segment(name: &str, value: &str) -> Result<()> {
    require(name, value)?;
    if matches!(value, "." | "..") {
        return Err(WordnikError::InvalidArgument(format!(
            "{name} '{value}' is not a valid path segment"
        )));
    }
    Ok(())
}
