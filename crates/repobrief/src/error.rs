//! Error types for RepoBrief

use thiserror::Error;

/// Errors that can occur while assembling repository documentation
#[derive(Debug, Error)]
pub enum BriefError {
    /// Input matched none of the recognized repository URL shapes
    #[error("Invalid GitHub repository URL")]
    InvalidUrl,

    /// GitHub answered with a non-success HTTP status
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Transport-level failure talking to the API
    #[error("Request failed: {0}")]
    Request(String),

    /// Success response whose JSON body did not match the expected shape
    #[error("Unexpected API response: {0}")]
    MalformedResponse(String),

    /// File content could not be decoded
    #[error("Failed to decode file content: {0}")]
    Decode(String),

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl BriefError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() {
            BriefError::Request(format!("Failed to connect to server: {}", err))
        } else if err.is_decode() {
            BriefError::MalformedResponse(err.to_string())
        } else {
            BriefError::Request(err.to_string())
        }
    }
}
