use super::{ApprovalBackend, ApprovalRequest, Decision, GateOutcome, GateState};
use crate::config::GateConfig;

const INVALID_RESPONSE: &str = "Invalid response from approval backend";

/// Files `request` with the backend and waits for it to resolve.
///
/// Every path ends in a [`Decision`]; backend failures are never retried and
/// never surface as errors.
pub async fn run_gate<B>(backend: &B, request: &ApprovalRequest, cfg: &GateConfig) -> Decision
where
    B: ApprovalBackend + ?Sized,
{
    let outcome = drive(backend, request, cfg).await;
    tracing::info!(
        target: "gate.run",
        backend = backend.name(),
        outcome = outcome.kind(),
        "approval gate finished"
    );
    outcome.into_decision(cfg)
}

async fn drive<B>(backend: &B, request: &ApprovalRequest, cfg: &GateConfig) -> GateOutcome
where
    B: ApprovalBackend + ?Sized,
{
    let id = match backend.create(request).await {
        Ok(resp) => match resp.approval_id() {
            Some(id) => id,
            None => {
                tracing::warn!(target: "gate.run", "create response carried no approval id");
                return GateOutcome::failed(INVALID_RESPONSE);
            }
        },
        Err(e) => {
            tracing::warn!(target: "gate.run", error = %e, "create request failed");
            return GateOutcome::failed(format!(
                "Failed to create approval request. Backend may be unavailable. ({e})"
            ));
        }
    };

    eprintln!("Approval request created: {id}. Waiting for user response...");

    let mut state = GateState::start();
    loop {
        let elapsed = match state.check_budget(cfg) {
            GateState::Finished(outcome) => return outcome,
            GateState::Polling { elapsed } => elapsed,
        };

        let reply = match backend.status(&id).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(target: "gate.run", approval_id = %id, error = %e, "status request failed");
                return GateOutcome::failed(format!("Lost connection to approval backend: {e}"));
            }
        };

        state = GateState::after_poll(elapsed, &reply, cfg);
        tracing::debug!(target: "gate.run", approval_id = %id, elapsed, state = ?state, "polled");

        if let GateState::Polling { .. } = state {
            tokio::time::sleep(cfg.poll_interval_duration()).await;
        }
    }
}
