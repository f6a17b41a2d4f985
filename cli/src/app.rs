use std::io::Write;

use gate_core::api::{
    load_file, parse_payload, read_stdin_text, run_gate, ConfigError, Decision, GateConfig,
    PartialGateConfig, PayloadError,
};
use gate_plugins::build_backend;

use crate::commands::cli::Args;

/// Written if the decision itself cannot be serialized.
const FALLBACK_DENY: &str =
    r#"{"hookSpecificOutput":{"hookEventName":"PreToolUse","permissionDecision":"deny"}}"#;

/// Merges the optional config file under the command-line flags.
pub fn resolve_config(args: &Args) -> Result<GateConfig, ConfigError> {
    let base = match args.config.as_deref() {
        Some(path) => load_file(path)?,
        None => PartialGateConfig::default(),
    };
    base.overlay(args.overrides()).resolve()
}

pub async fn run_app(cfg: &GateConfig) -> Decision {
    let raw = match read_stdin_text() {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(target: "gate.app", error = %e, "failed to read stdin");
            return Decision::deny(PayloadError::Unreadable(e).to_string());
        }
    };
    decide(&raw, cfg).await
}

/// Everything after stdin has been read. Configuration is already valid.
pub async fn decide(raw: &str, cfg: &GateConfig) -> Decision {
    let request = match parse_payload(raw) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(target: "gate.app", error = ?e, "rejecting malformed payload");
            return Decision::deny(e.to_string());
        }
    };

    let backend = match build_backend(cfg) {
        Ok(backend) => backend,
        Err(e) => {
            return Decision::deny(format!(
                "Failed to create approval request. Backend may be unavailable. ({e})"
            ));
        }
    };

    run_gate(backend.as_ref(), &request, cfg).await
}

pub fn emit(decision: &Decision) {
    let line = decision.to_json().unwrap_or_else(|e| {
        tracing::error!(target: "gate.app", error = %e, "failed to serialize decision");
        FALLBACK_DENY.to_string()
    });

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{line}").and_then(|_| stdout.flush()) {
        tracing::error!(target: "gate.app", error = %e, "failed to write decision");
    }
}
