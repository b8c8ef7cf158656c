use std::fmt;

use oasis_core::AssessmentId;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Remove,
    Export,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Create => "create",
            Action::Remove => "remove",
            Action::Export => "export",
        })
    }
}

/// A structured audit event for clinical-record actions.
///
/// Logged via `tracing` with `audit.*` fields so a JSON log sink can
/// filter them from ordinary diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: Action,
    pub resource_type: String,
    pub resource_id: String,
    pub operator: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: Action,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            action,
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            operator: operator.into(),
            details: None,
        }
    }

    pub fn assessment(action: Action, id: AssessmentId, operator: impl Into<String>) -> Self {
        Self::new(action, "assessment", id.to_string(), operator)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.operator = %self.operator,
            audit.details = %details,
            "audit event"
        );
    }
}
