use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Submit,
    Verify,
    Correct,
    Reject,
    Purge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    Info,
    Warning,
    Critical,
}

/// A structured audit record for one review action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub event_type: String,
    pub action: AuditAction,
    pub severity: AuditSeverity,
    pub actor_id: Uuid,
    pub target_type: String,
    pub target_id: Uuid,
    pub details: Value,
    pub occurred_at: NaiveDateTime,
}

impl AuditEvent {
    /// An audit event targeting a preliminary score.
    pub fn score_review(
        action: AuditAction,
        severity: AuditSeverity,
        actor_id: Uuid,
        target_id: Uuid,
        details: Value,
    ) -> Self {
        Self {
            event_type: "score_review".to_string(),
            action,
            severity,
            actor_id,
            target_type: "preliminary_score".to_string(),
            target_id,
            details,
            occurred_at: Utc::now().naive_utc(),
        }
    }
}

/// Sink for audit events.
///
/// Fire-and-forget from the pipeline's perspective: a sink failure never
/// fails the transition that produced the event, but the pipeline logs it
/// loudly because a dropped audit record breaks compliance traceability.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, event: AuditEvent) -> anyhow::Result<()>;
}

/// Emits audit events as structured `tracing` records under the `audit`
/// target, for deployments where the log pipeline is the audit store.
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: AuditEvent) -> anyhow::Result<()> {
        tracing::info!(
            target: "audit",
            action = ?event.action,
            severity = ?event.severity,
            actor_id = %event.actor_id,
            target_type = %event.target_type,
            target_id = %event.target_id,
            details = %event.details,
            "audit event"
        );
        Ok(())
    }
}

/// Collects audit events in memory. Used by tests to assert on the trail.
#[derive(Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn recorded(&self) -> Vec<AuditEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, event: AuditEvent) -> anyhow::Result<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}
