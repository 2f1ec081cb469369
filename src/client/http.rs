use std::time::Duration;

use serde_json::{Map, Value};
use ureq::Agent;

use super::{InferenceClient, InferenceError};
use crate::path::CanonicalPath;
use crate::payload::ResultPayload;

/// Body field used when none is configured.
pub const DEFAULT_FIELD: &str = "video_path";

/// Client for a live inference endpoint.
///
/// Sends a single `POST` with a JSON body of the form `{"<field>": "<path>"}`
/// and returns the decoded JSON response unchanged.
pub struct HttpClient {
    agent: Agent,
    endpoint: String,
    field: String,
}

impl HttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            agent: build_agent(None),
            endpoint: endpoint.into(),
            field: DEFAULT_FIELD.into(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Limit the whole request to `timeout`, `None` leaves it to the transport.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, input: &CanonicalPath) -> String {
        let mut body = Map::new();
        body.insert(self.field.clone(), Value::String(input.as_str().to_owned()));
        Value::Object(body).to_string()
    }
}

fn build_agent(timeout: Option<Duration>) -> Agent {
    // Status codes are checked by hand so they map onto `RequestFailed`.
    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(timeout)
        .build()
        .into()
}

impl InferenceClient for HttpClient {
    fn infer(&self, input: &CanonicalPath) -> Result<ResultPayload, InferenceError> {
        let body = self.request_body(input);
        tracing::debug!("POST {} {body}", self.endpoint);

        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .send(body)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Inference endpoint answered with {status}");
            return Err(InferenceError::RequestFailed {
                status: status.as_u16(),
            });
        }

        // Raw bytes, so a body that is not UTF-8 fails as a decode error.
        let bytes = response.body_mut().read_to_vec()?;
        tracing::debug!(
            "Body from inference endpoint: {}",
            String::from_utf8_lossy(&bytes)
        );
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(ResultPayload::new(value))
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_field() {
        let client = HttpClient::new("http://localhost/run").with_field("path");
        let body = client.request_body(&CanonicalPath::new(r"D:\a\b.mp4"));
        assert_eq!(body, r#"{"path":"/mnt/d/a/b.mp4"}"#);
    }

    #[test]
    fn test_default_field() {
        let client = HttpClient::new("http://localhost/run");
        let body = client.request_body(&CanonicalPath::new("/tmp/clip.mp4"));
        assert_eq!(body, r#"{"video_path":"/tmp/clip.mp4"}"#);
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = HttpClient::new("http://127.0.0.1:9/run_inference")
            .with_timeout(Some(Duration::from_secs(5)));
        let err = client.infer(&CanonicalPath::new("x")).unwrap_err();
        assert!(matches!(err, InferenceError::Transport(_)), "{err:?}");
    }
}
