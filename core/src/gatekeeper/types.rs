use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::errors::BackendError;

/// Body of `POST /api/approvals/create`.
///
/// `tool_name` and `tool_input` are kept as raw JSON so they reach the
/// backend exactly as the caller wrote them. A missing field is sent as
/// `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalRequest {
    pub tool_name: Option<Box<RawValue>>,
    pub tool_input: Option<Box<RawValue>>,
    pub session_id: Box<RawValue>,
}

/// Backend-assigned handle for a created request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalId(String);

impl ApprovalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApprovalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub id: Option<Value>,
}

impl CreateResponse {
    /// Strings and numbers are accepted as ids; empty strings, `null`, and
    /// anything structured are not.
    pub fn approval_id(&self) -> Option<ApprovalId> {
        match self.id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(ApprovalId(s.clone())),
            Value::Number(n) => Some(ApprovalId(n.to_string())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<Value>,

    #[serde(default)]
    pub reason: Option<Value>,
}

impl StatusResponse {
    pub fn reason_text(&self) -> Option<String> {
        match self.reason.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Decodes a backend response body. An empty body counts as `{}`; anything
/// other than a JSON object is rejected.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    let body = if body.is_empty() { "{}" } else { body };
    let value: Value = serde_json::from_str(body).map_err(BackendError::decode)?;
    if !value.is_object() {
        return Err(BackendError::decode(anyhow::anyhow!(
            "expected a JSON object, got `{}`",
            value
        )));
    }
    serde_json::from_value(value).map_err(BackendError::decode)
}
