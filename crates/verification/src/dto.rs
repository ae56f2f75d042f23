use scoring::Discipline;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    pub event_id: uuid::Uuid,
    pub athlete_id: uuid::Uuid,
    pub discipline: Discipline,
    pub data: Value,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CorrectScoreRequest {
    pub corrected_data: Value,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RejectScoreRequest {
    #[validate(length(min = 1, message = "rejection reason must not be empty"))]
    pub reason: String,
}
