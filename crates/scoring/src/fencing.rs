use crate::tables;

/// Derived ranking-round parameters for a given field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencingRankingParams {
    pub total_bouts: i32,
    pub victories_for_250: i32,
    pub value_per_victory: i32,
}

/// Points for a fencing ranking round.
///
/// Looks up `(victories_for_250, value_per_victory)` for the bout count,
/// falling back to the derived formula for untabulated rounds. The score is
/// 250 points at `victories_for_250` victories, with each victory above or
/// below worth `value_per_victory`, floored at 0.
pub fn calculate_fencing_ranking(victories: i32, total_bouts: i32) -> i32 {
    if total_bouts <= 0 {
        return 0;
    }

    let (victories_for_250, value_per_victory) = match tables::fencing_table_entry(total_bouts) {
        Some(entry) => (entry.victories_for_250, entry.value_per_victory),
        None => match fallback_params(total_bouts) {
            Some(params) => params,
            // A round so short that no victory count maps to 250 points.
            None => return 0,
        },
    };

    // Victory counts come from field submissions, so the delta math runs in
    // i64 and clamps: no overflow panic, no wrapped score.
    let points = 250_i64
        + (i64::from(victories) - i64::from(victories_for_250)) * i64::from(value_per_victory);
    points.clamp(0, i64::from(i32::MAX)) as i32
}

/// Ranking-round parameters for a field of `num_competitors`, for display and
/// validation. Every competitor fences every other once, so an athlete's bout
/// count is the field size minus one.
pub fn fencing_ranking_params(num_competitors: i32) -> FencingRankingParams {
    let total_bouts = num_competitors.saturating_sub(1);

    if total_bouts <= 0 {
        return FencingRankingParams {
            total_bouts,
            victories_for_250: 0,
            value_per_victory: 0,
        };
    }

    let (victories_for_250, value_per_victory) = tables::fencing_table_entry(total_bouts)
        .map(|entry| (entry.victories_for_250, entry.value_per_victory))
        .or_else(|| fallback_params(total_bouts))
        .unwrap_or((0, 0));

    FencingRankingParams {
        total_bouts,
        victories_for_250,
        value_per_victory,
    }
}

/// Derived parameters for bout counts outside the static table:
/// 70% of bouts won is worth 250 points. Returns `None` when the 70% mark
/// rounds to zero victories, which would make the per-victory value undefined.
fn fallback_params(total_bouts: i32) -> Option<(i32, i32)> {
    let victories_for_250 = (f64::from(total_bouts) * 0.70).round() as i32;
    if victories_for_250 == 0 {
        return None;
    }
    let value_per_victory = (250.0 / f64::from(victories_for_250)).round() as i32;
    Some((victories_for_250, value_per_victory))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulated_par_score_is_exactly_250() {
        for entry in crate::tables::FENCING_RANKING_TABLE {
            assert_eq!(
                calculate_fencing_ranking(entry.victories_for_250, entry.total_bouts),
                250,
                "bouts={}",
                entry.total_bouts
            );
        }
    }

    #[test]
    fn twenty_bout_round_matches_known_values() {
        // 20 bouts: 14 victories for 250, 18 points per victory.
        assert_eq!(calculate_fencing_ranking(14, 20), 250);
        assert_eq!(calculate_fencing_ranking(20, 20), 358);
        assert_eq!(calculate_fencing_ranking(13, 20), 232);
    }

    #[test]
    fn never_negative() {
        for total_bouts in 1..=60 {
            for victories in 0..=total_bouts {
                assert!(calculate_fencing_ranking(victories, total_bouts) >= 0);
            }
        }
        assert_eq!(calculate_fencing_ranking(0, 35), 0);
    }

    #[test]
    fn extreme_victory_counts_saturate_instead_of_wrapping() {
        assert_eq!(calculate_fencing_ranking(i32::MAX, 20), i32::MAX);
        assert_eq!(calculate_fencing_ranking(i32::MIN, 20), 0);
        assert_eq!(calculate_fencing_ranking(i32::MAX, 40), i32::MAX);
    }

    #[test]
    fn no_ranking_round_scores_zero() {
        assert_eq!(calculate_fencing_ranking(5, 0), 0);
        assert_eq!(calculate_fencing_ranking(5, -3), 0);
    }

    #[test]
    fn fallback_used_for_untabulated_bout_counts() {
        // 40 bouts is off the table: round(40 * 0.7) = 28, round(250 / 28) = 9.
        assert_eq!(calculate_fencing_ranking(28, 40), 250);
        assert_eq!(calculate_fencing_ranking(30, 40), 268);
    }

    #[test]
    fn single_bout_round_has_defined_par() {
        // round(1 * 0.7) = 1 victory for 250, each victory worth 250.
        assert_eq!(calculate_fencing_ranking(1, 1), 250);
        assert_eq!(calculate_fencing_ranking(0, 1), 0);
        let params = fencing_ranking_params(2);
        assert_eq!(params.total_bouts, 1);
        assert_eq!(params.victories_for_250, 1);
        assert_eq!(params.value_per_victory, 250);
    }

    #[test]
    fn params_derive_bouts_from_field_size() {
        let params = fencing_ranking_params(21);
        assert_eq!(params.total_bouts, 20);
        assert_eq!(params.victories_for_250, 14);
        assert_eq!(params.value_per_victory, 18);
    }

    #[test]
    fn params_for_degenerate_field() {
        let params = fencing_ranking_params(1);
        assert_eq!(params.total_bouts, 0);
        assert_eq!(params.victories_for_250, 0);
        assert_eq!(params.value_per_victory, 0);
    }
}
