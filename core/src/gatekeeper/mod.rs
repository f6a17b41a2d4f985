mod decision;
mod run;
mod state;
mod r#trait;
mod types;

pub use decision::{Decision, HookOutput, HookSpecificOutput, PermissionDecision};
pub use r#trait::ApprovalBackend;
pub use run::run_gate;
pub use state::{timeout_reason, ApprovalStatus, GateOutcome, GateState};
pub use types::{decode_body, ApprovalId, ApprovalRequest, CreateResponse, StatusResponse};
