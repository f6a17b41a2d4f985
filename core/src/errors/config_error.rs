// core/src/errors/config_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config parse error: {path}")]
    Parse {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("the following required argument was not provided: {0}")]
    Missing(&'static str),

    #[error("{0}")]
    Validation(String),
}
