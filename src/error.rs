//! Error types for Laer.

use thiserror::Error;

/// Library-level error type for Laer operations.
///
/// Submission failures are tagged by kind (validation, request, transport,
/// parse) so the presentation layer can pick styling or hints per kind
/// without re-deriving it from the message text.
#[derive(Error, Debug)]
pub enum LaerError {
    /// Input rejected before any network activity.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-success status. The message is the
    /// `detail` field of the error body, or a generic fallback.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The service could not be reached, or the connection failed mid-flight.
    #[error("Could not reach the processing service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("Unexpected response from the processing service: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl LaerError {
    /// A follow-up hint for the user, where one exists for this failure.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LaerError::Request { status: 404, .. } => {
                Some("The video may not have captions or subtitles. Try pasting the transcript instead.")
            }
            LaerError::Request { status: 413, .. } => {
                Some("Try a shorter video (under 60 minutes) or trim the transcript.")
            }
            LaerError::Transport(_) => {
                Some("Make sure the processing service is running. Check the base URL with 'laer config show'.")
            }
            _ => None,
        }
    }
}

/// Result type alias for Laer operations.
pub type Result<T> = std::result::Result<T, LaerError>;
