use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};

/// Pipeline configuration, loaded from the environment with defaults.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Capacity of the score-update broadcast channel.
    pub score_update_capacity: usize,
    /// Rejected preliminary scores older than this many days are eligible
    /// for the data-retention purge.
    pub rejected_retention_days: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            score_update_capacity: 64,
            rejected_retention_days: 365,
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let score_update_capacity = match std::env::var("SCORE_UPDATE_CAPACITY") {
            Ok(value) => value
                .parse()
                .context("SCORE_UPDATE_CAPACITY must be a number")?,
            Err(_) => defaults.score_update_capacity,
        };

        let rejected_retention_days = match std::env::var("REJECTED_RETENTION_DAYS") {
            Ok(value) => value
                .parse()
                .context("REJECTED_RETENTION_DAYS must be a number")?,
            Err(_) => defaults.rejected_retention_days,
        };

        Ok(Self {
            score_update_capacity,
            rejected_retention_days,
        })
    }

    /// The submission cutoff under the configured retention window: rejected
    /// scores submitted before this instant are eligible for the purge.
    pub fn rejected_cutoff(&self) -> NaiveDateTime {
        Utc::now().naive_utc() - Duration::days(self.rejected_retention_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = PipelineConfig::default();
        assert!(config.score_update_capacity > 0);
        assert!(config.rejected_retention_days > 0);
    }

    #[test]
    fn cutoff_trails_now_by_the_retention_window() {
        let config = PipelineConfig {
            rejected_retention_days: 30,
            ..PipelineConfig::default()
        };
        let age = Utc::now().naive_utc() - config.rejected_cutoff();
        assert_eq!(age.num_days(), 30);
    }
}
