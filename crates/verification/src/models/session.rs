use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity behind a field submission, discriminated by session kind.
///
/// Volunteers and officials act through user sessions; athletes submitting
/// their own results act through athlete sessions. Every consumer matches on
/// the variant explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submitter {
    User { user_id: Uuid },
    Athlete { athlete_id: Uuid },
}

impl Submitter {
    /// The identity recorded as the audit actor for this submission.
    pub fn actor_id(&self) -> Uuid {
        match self {
            Submitter::User { user_id } => *user_id,
            Submitter::Athlete { athlete_id } => *athlete_id,
        }
    }
}
