use chrono::NaiveDateTime;
use scoring::Discipline;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::PipelineConfig;

/// Domain event published after a successful promotion. External dashboards
/// subscribe to refresh standings without polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub event_id: Uuid,
    pub discipline: Discipline,
    pub athlete_ids: Vec<Uuid>,
    pub timestamp: NaiveDateTime,
}

/// Publish/subscribe channel for score updates.
///
/// An explicit collaborator created at process start and handed to the
/// pipeline; subscribers come and go independently. Publishing with no
/// subscribers is a no-op, not an error.
#[derive(Clone)]
pub struct ScoreUpdates {
    sender: broadcast::Sender<ScoreUpdate>,
}

impl ScoreUpdates {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.score_update_capacity)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScoreUpdate> {
        self.sender.subscribe()
    }

    pub fn publish(&self, update: ScoreUpdate) {
        if self.sender.send(update).is_err() {
            tracing::debug!("score update published with no subscribers");
        }
    }
}
