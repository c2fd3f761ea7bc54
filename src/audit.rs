// Audit trail for every state-changing request made against the engine

use crate::errors::IrmsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Severity levels for structured log classification.
/// Accepted requests log at `Info`, every rejection at `Warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Info,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Register,
    Authenticate,
    Logout,
    RequestSupervisorAccess,
    SubmitIncident,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditOutcome {
    Accepted,
    Rejected { kind: String },
}

/// One audited request. Never carries passwords or badge IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub who: String,
    pub action: AuditAction,
    pub context: Option<String>,
    pub outcome: AuditOutcome,
    pub severity: LogLevel,
}

impl AuditEvent {
    pub fn accepted(who: &str, action: AuditAction) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            who: who.to_string(),
            action,
            context: None,
            outcome: AuditOutcome::Accepted,
            severity: LogLevel::Info,
        }
    }

    pub fn rejected(who: &str, action: AuditAction, err: &IrmsError) -> Self {
        Self {
            outcome: AuditOutcome::Rejected {
                kind: err.kind().to_string(),
            },
            severity: LogLevel::Warn,
            ..Self::accepted(who, action)
        }
    }

    /// Adds optional context string
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == AuditOutcome::Accepted
    }

    /// Writes the event to the tracing pipeline
    pub fn write_to_log(&self) {
        let context = self.context.as_deref().unwrap_or("");
        match &self.outcome {
            AuditOutcome::Accepted => tracing::info!(
                audit_id = %self.id,
                who = %self.who,
                action = ?self.action,
                "{context}"
            ),
            AuditOutcome::Rejected { kind } => tracing::warn!(
                audit_id = %self.id,
                who = %self.who,
                action = ?self.action,
                kind = %kind,
                "{context}"
            ),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Bounded in-memory trail; oldest events are evicted first
#[derive(Debug, Clone)]
pub struct AuditTrail {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl AuditTrail {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Log the event and retain it if the trail has capacity
    pub fn record(&mut self, event: AuditEvent) {
        event.write_to_log();
        if self.max_events == 0 {
            return;
        }
        if self.events.len() == self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn events(&self) -> impl Iterator<Item = &AuditEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&AuditEvent> {
        self.events.back()
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new(1024)
    }
}
