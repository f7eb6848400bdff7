//! Error types for the run client
//!
//! Every variant is a transport-level failure from the user's point of view:
//! the output pane shows [`CONNECTION_ERROR`](super::CONNECTION_ERROR) for all
//! of them and the detail only goes to the log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint is not an absolute http(s) URL
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Building the underlying HTTP client failed
    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be read to the end
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body is not JSON
    #[error("response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
