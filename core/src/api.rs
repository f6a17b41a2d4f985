//! Stable re-exports for consumers (`cli`, `plugins`, and tests).
//!
//! Prefer importing from `gate_core::api` instead of reaching into internal modules.

pub use crate::config::{load_file, GateConfig, PartialGateConfig};
pub use crate::errors::{BackendError, ConfigError, PayloadError};
pub use crate::gatekeeper::{
    decode_body, run_gate, ApprovalBackend, ApprovalId, ApprovalRequest, ApprovalStatus,
    CreateResponse, Decision, GateOutcome, GateState, StatusResponse,
};
pub use crate::stdio::{decode_stdin_bytes, parse_payload, read_stdin_text};
