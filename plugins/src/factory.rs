use anyhow::Result;

use gate_core::api::{ApprovalBackend, GateConfig};

use crate::backend::http::HttpApprovalBackend;

pub fn build_backend(cfg: &GateConfig) -> Result<Box<dyn ApprovalBackend>> {
    Ok(Box::new(HttpApprovalBackend::new(
        cfg.base_url(),
        cfg.request_timeout(),
    )?))
}
