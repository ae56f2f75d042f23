use chrono::NaiveDateTime;
use scoring::{AgeCategory, Discipline};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authoritative point value for an athlete's discipline performance.
///
/// Created exactly once per successful promotion and immutable thereafter.
/// Carries the age category that was in effect at computation time and a
/// source reference back to the preliminary score it was promoted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialScore {
    pub official_score_id: Uuid,
    pub event_id: Uuid,
    pub athlete_id: Uuid,
    pub discipline: Discipline,
    pub points: i32,
    pub age_category: AgeCategory,
    pub source_score_id: Uuid,
    pub computed_at: NaiveDateTime,
}
