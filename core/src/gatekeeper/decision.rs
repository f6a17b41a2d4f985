use serde::Serialize;

/// The gate's single externally visible result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: Option<String> },
}

impl Decision {
    pub fn deny(reason: impl Into<String>) -> Self {
        Decision::Deny {
            reason: Some(reason.into()),
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny { reason } => reason.as_deref(),
        }
    }

    pub fn to_hook_output(&self) -> HookOutput {
        match self {
            Decision::Allow => HookOutput {
                hook_specific_output: HookSpecificOutput {
                    hook_event_name: PRE_TOOL_USE,
                    permission_decision: PermissionDecision::Allow,
                    permission_decision_reason: None,
                },
                suppress_output: true,
            },
            Decision::Deny { reason } => HookOutput {
                hook_specific_output: HookSpecificOutput {
                    hook_event_name: PRE_TOOL_USE,
                    permission_decision: PermissionDecision::Deny,
                    permission_decision_reason: reason.clone(),
                },
                suppress_output: false,
            },
        }
    }

    /// One-line JSON form written to stdout.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_hook_output())
    }
}

const PRE_TOOL_USE: &str = "PreToolUse";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
    #[serde(skip_serializing_if = "is_false")]
    pub suppress_output: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: PermissionDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
}

fn is_false(b: &bool) -> bool {
    !*b
}
