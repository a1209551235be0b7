use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::answer::{Answer, AskRequest};
use crate::error::{AskError, Result};

/// Where the answering service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const ASK_PATH: &str = "/api/v1/ask";

/// The seam to the remote answering service. Production code uses
/// [`HttpAskClient`]; tests substitute scripted implementations.
#[async_trait]
pub trait AskClient: Send + Sync {
    async fn ask(&self, request: AskRequest) -> Result<Answer>;
}

/// `reqwest`-backed client for the answering service. The base URL is fixed
/// at construction and immutable for the client's lifetime.
pub struct HttpAskClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAskClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpAskClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl AskClient for HttpAskClient {
    async fn ask(&self, request: AskRequest) -> Result<Answer> {
        let url = format!("{}{}", self.base_url, ASK_PATH);
        debug!(%url, prompt_type = request.prompt_type.as_str(), "sending ask request");

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}

/// Error body the service sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Partition a raw response into an [`Answer`] or an [`AskError`]. Kept free
/// of I/O so the whole contract is unit-testable.
///
/// Non-2xx bodies are mined for a `detail` string; absent or unparsable
/// bodies simply yield a detail-less rejection. A 2xx body that does not
/// match the answer schema is an [`AskError::Decode`], never a panic.
fn decode_response(status: StatusCode, body: &[u8]) -> Result<Answer> {
    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        return Err(AskError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    let answer: Answer = serde_json::from_slice(body)?;
    Ok(answer.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes_into_an_answer() {
        let body = r#"{
            "answer": "Aplicar presión directa.",
            "sources": [{"source": "first_aid_guide.pdf", "page_start": 12, "page_end": 14}],
            "conversation_id": "conv-9"
        }"#;
        let answer = decode_response(StatusCode::OK, body.as_bytes()).unwrap();
        assert_eq!(answer.text, "Aplicar presión directa.");
        assert_eq!(answer.sources[0].document, "first_aid_guide.pdf");
        assert_eq!(answer.sources[0].page_start, Some(12));
        assert_eq!(answer.conversation_id.as_deref(), Some("conv-9"));
    }

    #[test]
    fn any_2xx_counts_as_success() {
        let answer = decode_response(StatusCode::CREATED, br#"{"answer":"ok"}"#).unwrap();
        assert_eq!(answer.text, "ok");
    }

    #[test]
    fn rejection_detail_is_extracted_from_the_body() {
        let err = decode_response(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Pregunta vacía"}"#.as_bytes(),
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "Pregunta vacía");
    }

    #[test]
    fn unparsable_rejection_body_keeps_the_status_visible() {
        let err = decode_response(StatusCode::BAD_GATEWAY, b"<html>oops</html>").unwrap_err();
        assert!(matches!(
            err,
            AskError::Rejected {
                status: 502,
                detail: None
            }
        ));
        assert_eq!(err.user_message(), "Error 502");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_response(StatusCode::OK, b"not json at all").unwrap_err();
        assert!(matches!(err, AskError::Decode(_)));
    }

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let client = HttpAskClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
