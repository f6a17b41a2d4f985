//! Core logic for the PreToolUse approval gate.
//!
//! The gate reads a tool-use payload, files an approval request with a local
//! backend, polls until the request resolves, and produces one [`Decision`].
//! Nothing here talks HTTP directly; transports implement [`ApprovalBackend`].
//!
//! [`Decision`]: gatekeeper::Decision
//! [`ApprovalBackend`]: gatekeeper::ApprovalBackend

pub mod api;
pub mod config;
pub mod errors;
pub mod gatekeeper;
pub mod stdio;
