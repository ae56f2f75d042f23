use chrono::{NaiveDateTime, Utc};
use scoring::{Discipline, DisciplineResult, compute_points};
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::audit::{AuditAction, AuditEvent, AuditSeverity, AuditSink};
use crate::dto::{CorrectScoreRequest, RejectScoreRequest, SubmitScoreRequest};
use crate::error::{Result, VerificationError};
use crate::events::{ScoreUpdate, ScoreUpdates};
use crate::models::{OfficialScore, PreliminaryScore, ScoreStatus, Submitter};
use crate::reference::AgeCategoryProvider;
use crate::repository::ScoreRepository;

/// Orchestrates the preliminary-score lifecycle.
///
/// Each public method is one short-lived unit of work. Promotion is fail
/// closed: points are computed before anything is written, and the single
/// status-guarded repository call makes the official-score write and the
/// status change one atomic step. Of two racing reviews of the same score,
/// exactly one commits; the loser observes the terminal status as a Conflict.
pub struct ReviewService {
    repo: Arc<dyn ScoreRepository>,
    categories: Arc<dyn AgeCategoryProvider>,
    audit: Arc<dyn AuditSink>,
    updates: ScoreUpdates,
}

impl ReviewService {
    pub fn new(
        repo: Arc<dyn ScoreRepository>,
        categories: Arc<dyn AgeCategoryProvider>,
        audit: Arc<dyn AuditSink>,
        updates: ScoreUpdates,
    ) -> Self {
        Self {
            repo,
            categories,
            audit,
            updates,
        }
    }

    /// Records a field submission as a pending preliminary score.
    pub async fn submit(
        &self,
        request: SubmitScoreRequest,
        submitted_by: Submitter,
    ) -> Result<PreliminaryScore> {
        request.validate()?;
        let payload = parse_payload(request.discipline, &request.data)?;

        let score = PreliminaryScore::new(
            request.event_id,
            request.athlete_id,
            request.discipline,
            request.data,
            submitted_by,
        );
        self.repo.create_preliminary(score.clone()).await?;

        tracing::info!(
            score_id = %score.score_id,
            discipline = ?payload.discipline(),
            "preliminary score submitted"
        );
        self.record_audit(AuditEvent::score_review(
            AuditAction::Submit,
            AuditSeverity::Info,
            submitted_by.actor_id(),
            score.score_id,
            json!({ "discipline": score.discipline, "event_id": score.event_id }),
        ))
        .await;

        Ok(score)
    }

    /// Verifies a pending score as submitted, promoting it to an official
    /// score. Conflict if the score has already been reviewed.
    pub async fn verify(&self, score_id: Uuid, reviewer_id: Uuid) -> Result<OfficialScore> {
        let score = self.repo.get_preliminary(score_id).await?;
        if score.status != ScoreStatus::Pending {
            return Err(already_reviewed(&score));
        }

        let payload = parse_payload(score.discipline, &score.data)?;
        self.promote(
            score,
            payload,
            None,
            reviewer_id,
            ScoreStatus::Verified,
            AuditAction::Verify,
            &[ScoreStatus::Pending],
        )
        .await
    }

    /// Promotes a score from an admin-supplied corrected payload instead of
    /// the original submission. Allowed while no official score exists, which
    /// includes overriding an earlier rejection.
    pub async fn correct(
        &self,
        score_id: Uuid,
        request: CorrectScoreRequest,
        reviewer_id: Uuid,
    ) -> Result<OfficialScore> {
        request.validate()?;
        let score = self.repo.get_preliminary(score_id).await?;
        if score.status.is_promoted() {
            return Err(already_reviewed(&score));
        }

        let payload = parse_payload(score.discipline, &request.corrected_data)?;
        self.promote(
            score,
            payload,
            Some(request.corrected_data),
            reviewer_id,
            ScoreStatus::Corrected,
            AuditAction::Correct,
            &[ScoreStatus::Pending, ScoreStatus::Rejected],
        )
        .await
    }

    /// Rejects a pending score with a non-empty reason. No official score is
    /// produced; the record stays as a permanent audit-relevant rejection.
    pub async fn reject(
        &self,
        score_id: Uuid,
        request: RejectScoreRequest,
        reviewer_id: Uuid,
    ) -> Result<PreliminaryScore> {
        request.validate()?;
        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(VerificationError::Validation(
                "rejection reason must not be empty".to_string(),
            ));
        }

        let score = self.repo.get_preliminary(score_id).await?;
        if score.status != ScoreStatus::Pending {
            return Err(already_reviewed(&score));
        }

        let now = Utc::now().naive_utc();
        let mut updated = score.clone();
        updated.status = ScoreStatus::Rejected;
        updated.rejection_reason = Some(reason.to_string());
        updated.verified_at = Some(now);
        updated.verified_by = Some(reviewer_id);

        let stored = self
            .repo
            .commit_review(score_id, &[ScoreStatus::Pending], updated, None)
            .await?;

        tracing::info!(score_id = %score_id, reviewer_id = %reviewer_id, "preliminary score rejected");
        self.record_audit(AuditEvent::score_review(
            AuditAction::Reject,
            AuditSeverity::Info,
            reviewer_id,
            score_id,
            json!({ "reason": reason }),
        ))
        .await;

        Ok(stored)
    }

    /// Data-retention purge of rejected scores submitted before the cutoff.
    /// A sensitive administrative deletion, audited at Critical severity.
    pub async fn purge_rejected_before(
        &self,
        cutoff: NaiveDateTime,
        actor_id: Uuid,
    ) -> Result<u64> {
        let removed = self.repo.purge_rejected_before(cutoff).await?;

        tracing::warn!(removed, %cutoff, "purged rejected preliminary scores");
        self.record_audit(AuditEvent::score_review(
            AuditAction::Purge,
            AuditSeverity::Critical,
            actor_id,
            Uuid::nil(),
            json!({ "removed": removed, "cutoff": cutoff }),
        ))
        .await;

        Ok(removed)
    }

    #[allow(clippy::too_many_arguments)]
    async fn promote(
        &self,
        score: PreliminaryScore,
        payload: DisciplineResult,
        corrected_data: Option<Value>,
        reviewer_id: Uuid,
        status: ScoreStatus,
        action: AuditAction,
        allowed_from: &[ScoreStatus],
    ) -> Result<OfficialScore> {
        // Compute before any write so a failure here leaves no trace.
        let category = self.categories.age_category(score.event_id).await?;
        let points = compute_points(&payload, category);
        let now = Utc::now().naive_utc();

        let official = OfficialScore {
            official_score_id: Uuid::new_v4(),
            event_id: score.event_id,
            athlete_id: score.athlete_id,
            discipline: score.discipline,
            points,
            age_category: category,
            source_score_id: score.score_id,
            computed_at: now,
        };

        let mut updated = score.clone();
        updated.status = status;
        updated.official_score_id = Some(official.official_score_id);
        updated.verified_at = Some(now);
        updated.verified_by = Some(reviewer_id);
        if let Some(corrected) = corrected_data {
            updated.corrected_data = Some(corrected);
            updated.rejection_reason = None;
        }

        self.repo
            .commit_review(score.score_id, allowed_from, updated, Some(official.clone()))
            .await?;

        tracing::info!(
            score_id = %score.score_id,
            official_score_id = %official.official_score_id,
            points,
            status = %status,
            "preliminary score promoted"
        );
        self.record_audit(AuditEvent::score_review(
            action,
            AuditSeverity::Info,
            reviewer_id,
            score.score_id,
            json!({
                "official_score_id": official.official_score_id,
                "points": points,
                "age_category": category,
            }),
        ))
        .await;

        self.updates.publish(ScoreUpdate {
            event_id: score.event_id,
            discipline: score.discipline,
            athlete_ids: vec![score.athlete_id],
            timestamp: now,
        });

        Ok(official)
    }

    /// Audit is best-effort observability, not transactional with domain
    /// state: the transition has already committed when we get here.
    async fn record_audit(&self, event: AuditEvent) {
        if let Err(error) = self.audit.record(event).await {
            tracing::error!(%error, "audit sink failed; event dropped");
        }
    }
}

fn already_reviewed(score: &PreliminaryScore) -> VerificationError {
    VerificationError::Conflict(format!(
        "score {} is already {}",
        score.score_id, score.status
    ))
}

/// Parses a raw JSON payload into the closed discipline-result union and
/// checks it against the declared discipline and strict time parsing.
fn parse_payload(discipline: Discipline, data: &Value) -> Result<DisciplineResult> {
    let payload: DisciplineResult = serde_json::from_value(data.clone())
        .map_err(|error| VerificationError::Validation(format!("invalid payload: {error}")))?;

    if payload.discipline() != discipline {
        return Err(VerificationError::Validation(format!(
            "payload is for {:?}, score is for {:?}",
            payload.discipline(),
            discipline
        )));
    }
    if !payload.times_are_well_formed() {
        return Err(VerificationError::Validation(
            "unparseable time in payload".to_string(),
        ));
    }

    Ok(payload)
}
