//! HTTP client for the remote interpreter
//!
//! The execution API takes one JSON `POST`:
//!
//! ```text
//! → {"program": "...", "stdin": "...", "version": 4}
//! ← {"stdout": "..."}
//! ```
//!
//! Only `stdout` is read from the response.  HTTP status codes are not
//! inspected, so an error payload from the service is shown like any other
//! output.  Anything that prevents getting a JSON body back collapses into
//! [`CONNECTION_ERROR`].

mod errors;

pub use errors::ClientError;

use log::{debug, info, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Text displayed when the round trip fails
pub const CONNECTION_ERROR: &str = "Connection error";

/// Request body for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub program: String,
    pub stdin: String,
    pub version: u8,
}

/// Decoded response body
///
/// `stdout` is `None` when the body is JSON but has no `stdout` field (or is
/// not an object at all).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunResponse {
    pub stdout: Option<serde_json::Value>,
}

impl RunResponse {
    /// Decode a response body, ignoring every field except `stdout`
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let stdout = match value {
            serde_json::Value::Object(mut fields) => fields.remove("stdout"),
            _ => None,
        };
        Ok(RunResponse { stdout })
    }

    /// Text for the output pane
    ///
    /// Strings are shown verbatim, a missing or `null` field renders empty and
    /// any other JSON value is shown in its JSON form.
    pub fn into_output(self) -> String {
        match self.stdout {
            Some(serde_json::Value::String(text)) => text,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Client bound to one API endpoint
#[derive(Debug, Clone)]
pub struct RunClient {
    http: reqwest::Client,
    api_url: Url,
}

impl RunClient {
    /// Create a client for `api_url` using the default HTTP settings
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::Build)?;
        Self::with_http_client(api_url, http)
    }

    /// Create a client for `api_url` on top of a preconfigured `reqwest::Client`
    pub fn with_http_client(api_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        let api_url = parse_api_url(api_url)?;
        Ok(RunClient { http, api_url })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Send one run request and decode the response
    pub async fn run(&self, request: &RunRequest) -> Result<RunResponse, ClientError> {
        debug!(
            "POST {} (version={}, program={} bytes, stdin={} bytes)",
            self.api_url,
            request.version,
            request.program.len(),
            request.stdin.len()
        );

        let response = self
            .http
            .post(self.api_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Body)?;
        debug!("Response {} ({} bytes)", status, body.len());

        Ok(RunResponse::from_slice(&body)?)
    }

    /// Send one run request and produce the text for the output pane
    pub async fn run_to_output(&self, request: &RunRequest) -> String {
        match self.run(request).await {
            Ok(response) => {
                if response.stdout.is_none() {
                    info!("Response has no stdout field");
                }
                response.into_output()
            }
            Err(e) => {
                warn!("Run failed: {}", e);
                CONNECTION_ERROR.to_string()
            }
        }
    }
}

fn parse_api_url(api_url: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: api_url.to_string(),
        reason,
    };

    let url = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = RunRequest {
            program: "func main() {}".to_string(),
            stdin: "1234".to_string(),
            version: 2,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "program": "func main() {}",
                "stdin": "1234",
                "version": 2,
            })
        );
    }

    #[test]
    fn test_response_stdout_verbatim() {
        let response = RunResponse::from_slice(br#"{"stdout": "Hello 1234"}"#).unwrap();
        assert_eq!(response.into_output(), "Hello 1234");
    }

    #[test]
    fn test_response_extra_fields_ignored() {
        let response =
            RunResponse::from_slice(br#"{"stdout": "a\nb", "stderr": "x", "code": 0}"#).unwrap();
        assert_eq!(response.into_output(), "a\nb");
    }

    #[test]
    fn test_response_without_stdout_is_empty() {
        let response = RunResponse::from_slice(br#"{"error": "Unknown version 9"}"#).unwrap();
        assert!(response.stdout.is_none());
        assert_eq!(response.into_output(), "");

        let response = RunResponse::from_slice(b"[1, 2]").unwrap();
        assert_eq!(response.into_output(), "");

        let response = RunResponse::from_slice(br#"{"stdout": null}"#).unwrap();
        assert_eq!(response.into_output(), "");
    }

    #[test]
    fn test_response_non_string_stdout() {
        let response = RunResponse::from_slice(br#"{"stdout": 42}"#).unwrap();
        assert_eq!(response.into_output(), "42");
    }

    #[test]
    fn test_response_not_json() {
        assert!(RunResponse::from_slice(b"<html>502 Bad Gateway</html>").is_err());
        assert!(RunResponse::from_slice(b"").is_err());
    }

    #[test]
    fn test_api_url_validation() {
        assert!(RunClient::new("http://127.0.0.1:8000/api/run").is_ok());
        assert!(matches!(
            RunClient::new("/api/run"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            RunClient::new("ftp://example.com/api/run"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }
}
