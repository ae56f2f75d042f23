use crate::tables::{self, AgeCategory};

/// Points for the 200 m swim.
///
/// 250 points at the category's target time, one point per half second above
/// or below it, rounded once at the end and floored at 0.
pub fn calculate_swimming(finish_time_seconds: f64, category: AgeCategory) -> i32 {
    let target = tables::swimming_target(category);
    let points = 250.0 + (target - finish_time_seconds) * 2.0;
    (points.round() as i32).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_target_is_exactly_250() {
        let target = tables::swimming_target(AgeCategory::Senior);
        assert_eq!(calculate_swimming(target, AgeCategory::Senior), 250);
    }

    #[test]
    fn half_second_is_one_point() {
        let target = tables::swimming_target(AgeCategory::Senior);
        assert_eq!(calculate_swimming(target - 0.5, AgeCategory::Senior), 251);
        assert_eq!(calculate_swimming(target + 5.0, AgeCategory::Senior), 240);
    }

    #[test]
    fn floors_at_zero() {
        assert_eq!(calculate_swimming(900.0, AgeCategory::U17), 0);
    }
}
