use std::collections::BTreeMap;

use serde_json::value::{to_raw_value, RawValue};

use crate::errors::PayloadError;
use crate::gatekeeper::ApprovalRequest;

const DEFAULT_SESSION_ID: &str = "unknown";

/// Builds the approval request from the hook payload on stdin.
///
/// Empty input counts as `{}`. The payload must be a JSON object; field
/// values are not interpreted, only carried.
pub fn parse_payload(raw: &str) -> Result<ApprovalRequest, PayloadError> {
    let raw = if raw.is_empty() { "{}" } else { raw };
    let mut fields: BTreeMap<String, Box<RawValue>> = serde_json::from_str(raw)?;

    let session_id = match fields.remove("session_id") {
        Some(v) => v,
        None => to_raw_value(DEFAULT_SESSION_ID)?,
    };

    Ok(ApprovalRequest {
        tool_name: fields.remove("tool_name"),
        tool_input: fields.remove("tool_input"),
        session_id,
    })
}
