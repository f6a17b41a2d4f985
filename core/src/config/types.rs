use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Fixed per-request network timeout, independent of the approval budget.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Validated settings for one gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub timeout_seconds: u64,
    pub poll_interval: u64,
    pub backend_port: u16,
    pub feedback_marker: String,
}

impl GateConfig {
    pub fn new(
        timeout_seconds: i64,
        poll_interval: i64,
        backend_port: u16,
        feedback_marker: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if timeout_seconds <= 0 {
            return Err(ConfigError::Validation(
                "--timeout-seconds must be a positive integer".to_string(),
            ));
        }
        if poll_interval <= 0 {
            return Err(ConfigError::Validation(
                "--poll-interval must be a positive integer".to_string(),
            ));
        }
        if poll_interval > timeout_seconds {
            return Err(ConfigError::Validation(
                "--poll-interval cannot be greater than --timeout-seconds".to_string(),
            ));
        }
        if backend_port == 0 {
            return Err(ConfigError::Validation(
                "--backend-port must be between 1 and 65535".to_string(),
            ));
        }

        Ok(Self {
            timeout_seconds: timeout_seconds as u64,
            poll_interval: poll_interval as u64,
            backend_port,
            feedback_marker: feedback_marker.into(),
        })
    }

    pub fn poll_interval_duration(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    /// The backend is only ever reached over loopback.
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.backend_port)
    }
}

/// Settings as collected from one source (config file or command line).
///
/// Layers are merged with [`PartialGateConfig::overlay`] and then resolved
/// into a [`GateConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialGateConfig {
    #[serde(default)]
    pub timeout_seconds: Option<i64>,

    #[serde(default)]
    pub poll_interval: Option<i64>,

    #[serde(default)]
    pub backend_port: Option<u16>,

    #[serde(default)]
    pub feedback_marker: Option<String>,
}

impl PartialGateConfig {
    /// Values present in `top` win over values in `self`.
    pub fn overlay(self, top: PartialGateConfig) -> PartialGateConfig {
        PartialGateConfig {
            timeout_seconds: top.timeout_seconds.or(self.timeout_seconds),
            poll_interval: top.poll_interval.or(self.poll_interval),
            backend_port: top.backend_port.or(self.backend_port),
            feedback_marker: top.feedback_marker.or(self.feedback_marker),
        }
    }

    pub fn resolve(self) -> Result<GateConfig, ConfigError> {
        let timeout_seconds = self
            .timeout_seconds
            .ok_or(ConfigError::Missing("--timeout-seconds <TIMEOUT_SECONDS>"))?;
        let poll_interval = self
            .poll_interval
            .ok_or(ConfigError::Missing("--poll-interval <POLL_INTERVAL>"))?;
        let backend_port = self
            .backend_port
            .ok_or(ConfigError::Missing("--backend-port <BACKEND_PORT>"))?;
        let feedback_marker = self
            .feedback_marker
            .ok_or(ConfigError::Missing("--feedback-marker <FEEDBACK_MARKER>"))?;

        GateConfig::new(timeout_seconds, poll_interval, backend_port, feedback_marker)
    }
}
