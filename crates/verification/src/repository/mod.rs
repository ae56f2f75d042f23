use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{OfficialScore, PreliminaryScore, ScoreStatus};

pub mod memory;

pub use memory::InMemoryScoreRepository;

/// Persistence boundary for preliminary and official scores.
///
/// The store behind this trait must support a status-guarded conditional
/// update; everything else is plain CRUD. Promotion safety rests entirely on
/// [`ScoreRepository::commit_review`] being atomic.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn create_preliminary(&self, score: PreliminaryScore) -> Result<()>;

    async fn get_preliminary(&self, score_id: Uuid) -> Result<PreliminaryScore>;

    async fn get_official(&self, official_score_id: Uuid) -> Result<OfficialScore>;

    async fn list_officials(&self, event_id: Uuid) -> Result<Vec<OfficialScore>>;

    /// Applies a review transition if and only if the stored status is still
    /// one of `allowed_from`, writing the official score (when promoting) and
    /// the updated preliminary record in one atomic step. Returns Conflict
    /// when the guard fails, leaving both stores untouched.
    async fn commit_review(
        &self,
        score_id: Uuid,
        allowed_from: &[ScoreStatus],
        updated: PreliminaryScore,
        official: Option<OfficialScore>,
    ) -> Result<PreliminaryScore>;

    /// Deletes rejected preliminary scores submitted before the cutoff.
    /// Returns the number of records removed.
    async fn purge_rejected_before(&self, cutoff: NaiveDateTime) -> Result<u64>;
}
