use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{Result, VerificationError};
use crate::models::{OfficialScore, PreliminaryScore, ScoreStatus};

use super::ScoreRepository;

#[derive(Default)]
struct Inner {
    preliminary: HashMap<Uuid, PreliminaryScore>,
    official: HashMap<Uuid, OfficialScore>,
}

/// In-memory score store.
///
/// Both maps live behind a single mutex, so the status guard and the two
/// writes of `commit_review` are one atomic step, the same contract a SQL
/// store provides with a conditional update inside a transaction.
#[derive(Default)]
pub struct InMemoryScoreRepository {
    inner: Mutex<Inner>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn create_preliminary(&self, score: PreliminaryScore) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.preliminary.contains_key(&score.score_id) {
            return Err(VerificationError::Conflict(format!(
                "preliminary score {} already exists",
                score.score_id
            )));
        }
        inner.preliminary.insert(score.score_id, score);
        Ok(())
    }

    async fn get_preliminary(&self, score_id: Uuid) -> Result<PreliminaryScore> {
        let inner = self.inner.lock().await;
        inner
            .preliminary
            .get(&score_id)
            .cloned()
            .ok_or(VerificationError::NotFound)
    }

    async fn get_official(&self, official_score_id: Uuid) -> Result<OfficialScore> {
        let inner = self.inner.lock().await;
        inner
            .official
            .get(&official_score_id)
            .cloned()
            .ok_or(VerificationError::NotFound)
    }

    async fn list_officials(&self, event_id: Uuid) -> Result<Vec<OfficialScore>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .official
            .values()
            .filter(|score| score.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn commit_review(
        &self,
        score_id: Uuid,
        allowed_from: &[ScoreStatus],
        updated: PreliminaryScore,
        official: Option<OfficialScore>,
    ) -> Result<PreliminaryScore> {
        let mut inner = self.inner.lock().await;

        let current = inner
            .preliminary
            .get(&score_id)
            .ok_or(VerificationError::NotFound)?;
        if !allowed_from.contains(&current.status) {
            return Err(VerificationError::Conflict(format!(
                "score {} is already {}",
                score_id, current.status
            )));
        }

        if let Some(official) = official {
            inner.official.insert(official.official_score_id, official);
        }
        inner.preliminary.insert(score_id, updated.clone());

        Ok(updated)
    }

    async fn purge_rejected_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        let mut inner = self.inner.lock().await;
        let before = inner.preliminary.len();
        inner
            .preliminary
            .retain(|_, score| {
                score.status != ScoreStatus::Rejected || score.submitted_at >= cutoff
            });
        Ok((before - inner.preliminary.len()) as u64)
    }
}
