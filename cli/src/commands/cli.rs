use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gate_core::api::{ConfigError, PartialGateConfig};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "PreToolUse approval gate. All parameters are passed via CLI."
)]
pub struct Args {
    /// Maximum time to wait for approval before timing out (seconds).
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub timeout_seconds: Option<i64>,

    /// Seconds between polling the backend for status.
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub poll_interval: Option<i64>,

    /// Port of the approval backend running on 127.0.0.1.
    #[arg(short = 'b', long)]
    pub backend_port: Option<u16>,

    /// Marker prefix for user feedback messages.
    #[arg(short = 'm', long, allow_hyphen_values = true)]
    pub feedback_marker: Option<String>,

    /// TOML file supplying any of the settings above; flags take precedence.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> PartialGateConfig {
        PartialGateConfig {
            timeout_seconds: self.timeout_seconds,
            poll_interval: self.poll_interval,
            backend_port: self.backend_port,
            feedback_marker: self.feedback_marker.clone(),
        }
    }
}

/// Reports a configuration problem the way clap reports usage errors and
/// exits with status 2.
pub fn exit_with_config_error(err: ConfigError) -> ! {
    let kind = match &err {
        ConfigError::Missing(_) => ErrorKind::MissingRequiredArgument,
        ConfigError::Validation(_) => ErrorKind::ValueValidation,
        ConfigError::NotFound(_) | ConfigError::Parse { .. } => ErrorKind::Io,
    };
    let message = match &err {
        ConfigError::Parse { source, .. } => format!("{err}: {source}"),
        _ => err.to_string(),
    };
    Args::command().error(kind, message).exit()
}
