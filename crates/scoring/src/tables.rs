use serde::{Deserialize, Serialize};

/// Age category of a competition event.
///
/// Determines which target times apply for the timed disciplines. Resolved
/// from the event by the calling layer; the calculators only consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    U17,
    U19,
    Junior,
    Senior,
    Masters,
}

/// One row of the fencing ranking-round table.
///
/// For a ranking round of `total_bouts` bouts, `victories_for_250` victories
/// are worth exactly 250 points and each victory above or below that mark is
/// worth `value_per_victory` points.
#[derive(Debug, Clone, Copy)]
pub struct FencingTableEntry {
    pub total_bouts: i32,
    pub victories_for_250: i32,
    pub value_per_victory: i32,
}

/// Ranking-round parameters for the usual field sizes (16 to 37 competitors).
/// Bout counts outside this range fall back to the derived formula in
/// `fencing::fallback_params`.
pub const FENCING_RANKING_TABLE: &[FencingTableEntry] = &[
    FencingTableEntry { total_bouts: 15, victories_for_250: 11, value_per_victory: 23 },
    FencingTableEntry { total_bouts: 16, victories_for_250: 11, value_per_victory: 23 },
    FencingTableEntry { total_bouts: 17, victories_for_250: 12, value_per_victory: 21 },
    FencingTableEntry { total_bouts: 18, victories_for_250: 13, value_per_victory: 19 },
    FencingTableEntry { total_bouts: 19, victories_for_250: 13, value_per_victory: 19 },
    FencingTableEntry { total_bouts: 20, victories_for_250: 14, value_per_victory: 18 },
    FencingTableEntry { total_bouts: 21, victories_for_250: 15, value_per_victory: 17 },
    FencingTableEntry { total_bouts: 22, victories_for_250: 15, value_per_victory: 17 },
    FencingTableEntry { total_bouts: 23, victories_for_250: 16, value_per_victory: 16 },
    FencingTableEntry { total_bouts: 24, victories_for_250: 17, value_per_victory: 15 },
    FencingTableEntry { total_bouts: 25, victories_for_250: 18, value_per_victory: 14 },
    FencingTableEntry { total_bouts: 26, victories_for_250: 18, value_per_victory: 14 },
    FencingTableEntry { total_bouts: 27, victories_for_250: 19, value_per_victory: 13 },
    FencingTableEntry { total_bouts: 28, victories_for_250: 20, value_per_victory: 13 },
    FencingTableEntry { total_bouts: 29, victories_for_250: 20, value_per_victory: 13 },
    FencingTableEntry { total_bouts: 30, victories_for_250: 21, value_per_victory: 12 },
    FencingTableEntry { total_bouts: 31, victories_for_250: 22, value_per_victory: 11 },
    FencingTableEntry { total_bouts: 32, victories_for_250: 22, value_per_victory: 11 },
    FencingTableEntry { total_bouts: 33, victories_for_250: 23, value_per_victory: 11 },
    FencingTableEntry { total_bouts: 34, victories_for_250: 24, value_per_victory: 10 },
    FencingTableEntry { total_bouts: 35, victories_for_250: 25, value_per_victory: 10 },
    FencingTableEntry { total_bouts: 36, victories_for_250: 25, value_per_victory: 10 },
];

pub fn fencing_table_entry(total_bouts: i32) -> Option<&'static FencingTableEntry> {
    FENCING_RANKING_TABLE
        .iter()
        .find(|entry| entry.total_bouts == total_bouts)
}

/// Laser-run target time in seconds, worth exactly 500 points.
pub fn laser_run_target(category: AgeCategory, is_relay: bool) -> f64 {
    match (category, is_relay) {
        (AgeCategory::U17, false) => 600.0,
        (AgeCategory::U17, true) => 320.0,
        (AgeCategory::U19, false) => 660.0,
        (AgeCategory::U19, true) => 360.0,
        (AgeCategory::Junior, false) => 750.0,
        (AgeCategory::Junior, true) => 410.0,
        (AgeCategory::Senior, false) => 780.0,
        (AgeCategory::Senior, true) => 420.0,
        (AgeCategory::Masters, false) => 840.0,
        (AgeCategory::Masters, true) => 460.0,
    }
}

/// 200 m swim target time in seconds, worth exactly 250 points.
pub fn swimming_target(category: AgeCategory) -> f64 {
    match category {
        AgeCategory::U17 => 170.0,
        AgeCategory::U19 => 160.0,
        AgeCategory::Junior => 155.0,
        AgeCategory::Senior => 150.0,
        AgeCategory::Masters => 170.0,
    }
}

/// Obstacle course target time in seconds, worth exactly 250 points.
pub fn obstacle_target(category: AgeCategory) -> f64 {
    match category {
        AgeCategory::U17 => 40.0,
        AgeCategory::U19 => 35.0,
        AgeCategory::Junior => 30.0,
        AgeCategory::Senior => 30.0,
        AgeCategory::Masters => 45.0,
    }
}
