//! Transports for the approval gate.

pub mod backend;
pub mod factory;

pub use backend::http::HttpApprovalBackend;
pub use factory::build_backend;
