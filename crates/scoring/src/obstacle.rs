use crate::tables::{self, AgeCategory};

/// Points for the obstacle discipline.
///
/// 250 points at the category's target time, one point per half second.
/// Obstacle penalties are assessed in seconds and combined with the elapsed
/// time before the single rounding at the end. Floored at 0.
pub fn calculate_obstacle(
    finish_time_seconds: f64,
    penalty_seconds: f64,
    category: AgeCategory,
) -> i32 {
    let target = tables::obstacle_target(category);
    let points = 250.0 + (target - finish_time_seconds - penalty_seconds) * 2.0;
    (points.round() as i32).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_target_is_exactly_250() {
        let target = tables::obstacle_target(AgeCategory::Senior);
        assert_eq!(calculate_obstacle(target, 0.0, AgeCategory::Senior), 250);
    }

    #[test]
    fn penalties_count_as_elapsed_time() {
        let target = tables::obstacle_target(AgeCategory::Senior);
        assert_eq!(
            calculate_obstacle(target - 2.0, 2.0, AgeCategory::Senior),
            250
        );
        assert_eq!(
            calculate_obstacle(target, 4.0, AgeCategory::Senior),
            242
        );
    }

    #[test]
    fn floors_at_zero() {
        assert_eq!(calculate_obstacle(400.0, 60.0, AgeCategory::Masters), 0);
    }
}
