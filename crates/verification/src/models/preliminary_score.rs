use chrono::{NaiveDateTime, Utc};
use scoring::Discipline;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use super::Submitter;

/// Review state of a preliminary score.
///
/// Transitions are monotonic: `Pending` moves exactly once to one of the
/// other three states and never out again (a rejection can only be superseded
/// by an administrative correction, never by re-verification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Pending,
    Verified,
    Corrected,
    Rejected,
}

impl ScoreStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ScoreStatus::Pending)
    }

    /// Whether an official score has been produced for this status.
    pub fn is_promoted(self) -> bool {
        matches!(self, ScoreStatus::Verified | ScoreStatus::Corrected)
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreStatus::Pending => "pending",
            ScoreStatus::Verified => "verified",
            ScoreStatus::Corrected => "corrected",
            ScoreStatus::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// A field-submitted, not-yet-authoritative result awaiting review.
///
/// `data` is the raw submitted payload and is never overwritten; a reviewer
/// correction lands in `corrected_data` instead. `official_score_id` is set
/// exactly when the status is `Verified` or `Corrected`. Records are never
/// physically deleted outside the data-retention purge of old rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreliminaryScore {
    pub score_id: Uuid,
    pub event_id: Uuid,
    pub athlete_id: Uuid,
    pub discipline: Discipline,
    pub data: Value,
    pub status: ScoreStatus,
    pub corrected_data: Option<Value>,
    pub rejection_reason: Option<String>,
    pub official_score_id: Option<Uuid>,
    pub submitted_at: NaiveDateTime,
    pub submitted_by: Submitter,
    pub verified_at: Option<NaiveDateTime>,
    pub verified_by: Option<Uuid>,
}

impl PreliminaryScore {
    pub fn new(
        event_id: Uuid,
        athlete_id: Uuid,
        discipline: Discipline,
        data: Value,
        submitted_by: Submitter,
    ) -> Self {
        Self {
            score_id: Uuid::new_v4(),
            event_id,
            athlete_id,
            discipline,
            data,
            status: ScoreStatus::Pending,
            corrected_data: None,
            rejection_reason: None,
            official_score_id: None,
            submitted_at: Utc::now().naive_utc(),
            submitted_by,
            verified_at: None,
            verified_by: None,
        }
    }
}
