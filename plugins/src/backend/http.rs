use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use gate_core::api::{
    decode_body, ApprovalBackend, ApprovalId, ApprovalRequest, BackendError, CreateResponse,
    StatusResponse,
};
use reqwest::header::CONTENT_TYPE;

const BODY_SNIPPET_CHARS: usize = 200;

/// Approval backend reached over plain HTTP.
pub struct HttpApprovalBackend {
    client: reqwest::Client,
    base_url: reqwest::Url,
    timeout: Duration,
}

impl HttpApprovalBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;
        let base_url: String = base_url.into();
        let base_url = reqwest::Url::parse(&base_url)?;
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Appends `segments` to the base path, percent-encoding each one so an
    /// id can never step outside its own path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BackendError::Transport(anyhow::anyhow!(
                    "backend url cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else {
            BackendError::Transport(e.into())
        }
    }

    async fn read_body(&self, resp: reqwest::Response) -> Result<String, BackendError> {
        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            let body_snippet = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                text.chars().take(BODY_SNIPPET_CHARS).collect()
            };
            return Err(BackendError::HttpStatus {
                status: status.as_u16(),
                body_snippet,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl ApprovalBackend for HttpApprovalBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn create(&self, request: &ApprovalRequest) -> Result<CreateResponse, BackendError> {
        let url = self.endpoint(&["api", "approvals", "create"])?;
        let body = serde_json::to_vec(request).map_err(BackendError::decode)?;
        tracing::debug!(target: "gate.http", %url, bytes = body.len(), "creating approval request");

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let text = self.read_body(resp).await?;
        decode_body(&text)
    }

    async fn status(&self, id: &ApprovalId) -> Result<StatusResponse, BackendError> {
        let url = self.endpoint(&["api", "approvals", id.as_str(), "status"])?;
        tracing::trace!(target: "gate.http", %url, "polling approval status");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let text = self.read_body(resp).await?;
        decode_body(&text)
    }
}
