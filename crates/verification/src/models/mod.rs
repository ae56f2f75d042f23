mod official_score;
mod preliminary_score;
mod session;

pub use official_score::OfficialScore;
pub use preliminary_score::{PreliminaryScore, ScoreStatus};
pub use session::Submitter;
