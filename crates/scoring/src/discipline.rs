use serde::{Deserialize, Serialize};

use crate::tables::AgeCategory;
use crate::{fencing, laser_run, obstacle, swimming};

/// The disciplines this pipeline scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    FencingRanking,
    Swimming,
    Obstacle,
    LaserRun,
}

/// A submitted discipline result.
///
/// Closed set of payload shapes, one per discipline, discriminated by the
/// `discipline` tag. Unknown or malformed payloads fail at deserialization
/// instead of reaching a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discipline", rename_all = "snake_case")]
pub enum DisciplineResult {
    FencingRanking {
        victories: i32,
        total_bouts: i32,
    },
    Swimming {
        time: String,
    },
    Obstacle {
        time: String,
        #[serde(default)]
        penalty_seconds: f64,
    },
    LaserRun {
        finish_time: String,
        #[serde(default)]
        penalty_seconds: f64,
        #[serde(default)]
        is_relay: bool,
    },
}

impl DisciplineResult {
    pub fn discipline(&self) -> Discipline {
        match self {
            Self::FencingRanking { .. } => Discipline::FencingRanking,
            Self::Swimming { .. } => Discipline::Swimming,
            Self::Obstacle { .. } => Discipline::Obstacle,
            Self::LaserRun { .. } => Discipline::LaserRun,
        }
    }

    /// Whether every time field parses strictly. Used to reject malformed
    /// submissions up front; the calculators themselves are lenient.
    pub fn times_are_well_formed(&self) -> bool {
        match self {
            Self::FencingRanking { .. } => true,
            Self::Swimming { time } => laser_run::try_parse_time(time).is_some(),
            Self::Obstacle { time, .. } => laser_run::try_parse_time(time).is_some(),
            Self::LaserRun { finish_time, .. } => {
                laser_run::try_parse_time(finish_time).is_some()
            }
        }
    }
}

/// Computes the point value for a discipline result in the context of an
/// event's age category. Total over all in-domain inputs; never negative.
pub fn compute_points(result: &DisciplineResult, category: AgeCategory) -> i32 {
    match result {
        DisciplineResult::FencingRanking {
            victories,
            total_bouts,
        } => fencing::calculate_fencing_ranking(*victories, *total_bouts),
        DisciplineResult::Swimming { time } => {
            swimming::calculate_swimming(laser_run::parse_laser_run_time(time), category)
        }
        DisciplineResult::Obstacle {
            time,
            penalty_seconds,
        } => obstacle::calculate_obstacle(
            laser_run::parse_laser_run_time(time),
            *penalty_seconds,
            category,
        ),
        DisciplineResult::LaserRun {
            finish_time,
            penalty_seconds,
            is_relay,
        } => laser_run::calculate_laser_run(
            laser_run::parse_laser_run_time(finish_time),
            *penalty_seconds,
            category,
            *is_relay,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_deserialize_by_tag() {
        let result: DisciplineResult = serde_json::from_str(
            r#"{"discipline":"fencing_ranking","victories":14,"total_bouts":20}"#,
        )
        .unwrap();
        assert_eq!(result.discipline(), Discipline::FencingRanking);
        assert_eq!(compute_points(&result, AgeCategory::Senior), 250);
    }

    #[test]
    fn optional_fields_default() {
        let result: DisciplineResult =
            serde_json::from_str(r#"{"discipline":"laser_run","finish_time":"13:00"}"#).unwrap();
        assert_eq!(
            result,
            DisciplineResult::LaserRun {
                finish_time: "13:00".to_string(),
                penalty_seconds: 0.0,
                is_relay: false,
            }
        );
        assert_eq!(compute_points(&result, AgeCategory::Senior), 500);
    }

    #[test]
    fn unknown_shapes_fail_to_deserialize() {
        assert!(
            serde_json::from_str::<DisciplineResult>(r#"{"discipline":"riding","faults":4}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<DisciplineResult>(r#"{"discipline":"swimming"}"#).is_err()
        );
    }

    #[test]
    fn malformed_times_are_flagged() {
        let result = DisciplineResult::Swimming {
            time: "2:xx".to_string(),
        };
        assert!(!result.times_are_well_formed());
        // But computation still degrades gracefully instead of panicking.
        assert!(compute_points(&result, AgeCategory::Senior) >= 0);
    }
}
