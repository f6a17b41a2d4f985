mod backend_error;
mod config_error;
mod payload_error;

pub use backend_error::BackendError;
pub use config_error::ConfigError;
pub use payload_error::PayloadError;
