//! Runs the built `approval-gate` binary against a mockito backend.
use std::io::{ErrorKind, Write};
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn port_of(server: &mockito::ServerGuard) -> String {
    server
        .host_with_port()
        .rsplit(':')
        .next()
        .unwrap()
        .to_string()
}

fn run_gate(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_approval-gate"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn approval-gate");
    // Config errors exit before stdin is read, so the pipe may already be closed.
    if let Err(e) = child.stdin.take().unwrap().write_all(stdin.as_bytes()) {
        assert_eq!(e.kind(), ErrorKind::BrokenPipe, "unexpected stdin error: {e}");
    }
    child.wait_with_output().unwrap()
}

fn decision(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one line, got {stdout:?}");
    serde_json::from_str(lines[0]).unwrap()
}

#[test]
fn test_denied_with_feedback_marker() {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/api/approvals/create")
        .match_body(mockito::Matcher::PartialJson(json!({
            "tool_name": "Bash",
            "session_id": "sess-9"
        })))
        .with_body(r#"{"id":"abc"}"#)
        .expect(1)
        .create();
    let status = server
        .mock("GET", "/api/approvals/abc/status")
        .with_body(r#"{"status":"denied","reason":"not now"}"#)
        .expect(1)
        .create();

    let port = port_of(&server);
    let output = run_gate(
        &["-t", "5", "-p", "5", "-b", &port, "-m", "[FB] "],
        r#"{"tool_name":"Bash","tool_input":{"command":"make deploy"},"session_id":"sess-9"}"#,
    );

    assert!(output.status.success());
    assert_eq!(
        decision(&output),
        json!({
            "hookSpecificOutput": {
                "hookEventName": "PreToolUse",
                "permissionDecision": "deny",
                "permissionDecisionReason": "[FB] not now"
            }
        })
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Approval request created: abc. Waiting for user response..."));
    create.assert();
    status.assert();
}

#[test]
fn test_approved_suppresses_output() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/approvals/create")
        .with_body(r#"{"id":"ok-1"}"#)
        .create();
    server
        .mock("GET", "/api/approvals/ok-1/status")
        .with_body(r#"{"status":"approved"}"#)
        .create();

    let port = port_of(&server);
    let output = run_gate(
        &["--timeout-seconds", "60", "--poll-interval", "1", "--backend-port", &port, "--feedback-marker", "M"],
        r#"{"tool_name":"Read","tool_input":{}}"#,
    );

    assert!(output.status.success());
    assert_eq!(
        decision(&output),
        json!({
            "hookSpecificOutput": {
                "hookEventName": "PreToolUse",
                "permissionDecision": "allow"
            },
            "suppressOutput": true
        })
    );
}

#[test]
fn test_malformed_stdin_never_reaches_backend() {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/api/approvals/create")
        .expect(0)
        .create();

    let port = port_of(&server);
    let output = run_gate(&["-t", "5", "-p", "1", "-b", &port, "-m", "M"], "{not json");

    assert!(output.status.success());
    assert_eq!(
        decision(&output)["hookSpecificOutput"]["permissionDecisionReason"],
        "Invalid JSON payload on stdin"
    );
    create.assert();
}

#[test]
fn test_unreachable_backend_denies_and_exits_zero() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port().to_string()
    };

    let output = run_gate(&["-t", "5", "-p", "1", "-b", &port, "-m", "M"], "{}");

    assert!(output.status.success());
    let reason = decision(&output)["hookSpecificOutput"]["permissionDecisionReason"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(reason.starts_with("Failed to create approval request. Backend may be unavailable. ("));
}

#[test]
fn test_interval_above_timeout_fails_before_network() {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/api/approvals/create")
        .expect(0)
        .create();

    let port = port_of(&server);
    let output = run_gate(&["-t", "5", "-p", "6", "-b", &port, "-m", "M"], "{}");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--poll-interval cannot be greater than --timeout-seconds"));
    create.assert();
}

#[test]
fn test_missing_flag_is_usage_error() {
    let output = run_gate(&["-t", "5", "-p", "1", "-m", "M"], "{}");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_file_with_flag_override() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/approvals/create")
        .with_body(r#"{"id":"cfg"}"#)
        .create();
    server
        .mock("GET", "/api/approvals/cfg/status")
        .with_body(r#"{"status":"denied","reason":"use the staging db"}"#)
        .create();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_seconds = 30").unwrap();
    writeln!(file, "poll_interval = 2").unwrap();
    writeln!(file, "backend_port = {}", port_of(&server)).unwrap();
    writeln!(file, "feedback_marker = \"ignored\"").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = run_gate(&["-c", &path, "-m", ">> "], "{}");

    assert!(output.status.success());
    assert_eq!(
        decision(&output)["hookSpecificOutput"]["permissionDecisionReason"],
        ">> use the staging db"
    );
}
