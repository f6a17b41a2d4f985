use async_trait::async_trait;

use super::{ApprovalId, ApprovalRequest, CreateResponse, StatusResponse};
use crate::errors::BackendError;

/// Service of record for approval requests.
///
/// Implementations only move bytes; protocol checks (non-empty id, known
/// status) happen in the gate so every transport is held to the same rules.
#[async_trait]
pub trait ApprovalBackend: Send + Sync {
    fn name(&self) -> &str;

    /// `POST /api/approvals/create`
    async fn create(&self, request: &ApprovalRequest) -> Result<CreateResponse, BackendError>;

    /// `GET /api/approvals/{id}/status`
    async fn status(&self, id: &ApprovalId) -> Result<StatusResponse, BackendError>;
}
