use crate::tables::{self, AgeCategory};

/// Points for a laser run.
///
/// 500 points at the category's target time; one second of time is worth one
/// point, and penalty seconds count the same as elapsed seconds. All additive
/// terms are combined in seconds before a single rounding at the end, so no
/// systematic bias accumulates across the terms.
pub fn calculate_laser_run(
    finish_time_seconds: f64,
    penalty_seconds: f64,
    category: AgeCategory,
    is_relay: bool,
) -> i32 {
    let target = tables::laser_run_target(category, is_relay);
    let points = 500.0 + (target - finish_time_seconds) - penalty_seconds;
    (points.round() as i32).max(0)
}

/// Strict parse of a race time: `M:SS`, `MM:SS`, or `MM:SS.ff`, with a plain
/// numeric fallback. `None` when the string is unparseable either way.
pub fn try_parse_time(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some((minutes, seconds)) = value.split_once(':') {
        let minutes: f64 = minutes.parse().ok()?;
        let seconds: f64 = seconds.parse().ok()?;
        if minutes < 0.0 || !(0.0..60.0).contains(&seconds) {
            return None;
        }
        return Some(minutes * 60.0 + seconds);
    }
    value.parse().ok().filter(|secs: &f64| *secs >= 0.0)
}

/// Lenient parse used by the calculators: malformed input is worth 0 seconds
/// rather than an error. Callers that want to surface malformed input use
/// [`try_parse_time`] before getting here.
pub fn parse_laser_run_time(value: &str) -> f64 {
    try_parse_time(value).unwrap_or(0.0)
}

/// Formats a second count as `M:SS` with zero-padded seconds, rounding away
/// any sub-second fraction.
pub fn format_laser_run_time(total_seconds: f64) -> String {
    let total = (total_seconds.max(0.0)).round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_target_is_exactly_500() {
        let target = tables::laser_run_target(AgeCategory::Senior, false);
        assert_eq!(calculate_laser_run(target, 0.0, AgeCategory::Senior, false), 500);
    }

    #[test]
    fn one_second_is_one_point() {
        let target = tables::laser_run_target(AgeCategory::Senior, false);
        assert_eq!(
            calculate_laser_run(target - 30.0, 0.0, AgeCategory::Senior, false),
            530
        );
        assert_eq!(
            calculate_laser_run(target + 12.0, 3.0, AgeCategory::Senior, false),
            485
        );
    }

    #[test]
    fn rounds_once_at_the_end() {
        let target = tables::laser_run_target(AgeCategory::Junior, false);
        // Two half-second terms combine to a full point before rounding.
        assert_eq!(
            calculate_laser_run(target - 0.5, 0.0, AgeCategory::Junior, false),
            501
        );
        assert_eq!(
            calculate_laser_run(target - 0.3, 0.2, AgeCategory::Junior, false),
            500
        );
    }

    #[test]
    fn floors_at_zero() {
        assert_eq!(
            calculate_laser_run(5000.0, 300.0, AgeCategory::U17, false),
            0
        );
    }

    #[test]
    fn relay_uses_relay_target() {
        let relay_target = tables::laser_run_target(AgeCategory::Senior, true);
        assert_eq!(
            calculate_laser_run(relay_target, 0.0, AgeCategory::Senior, true),
            500
        );
        assert!(relay_target < tables::laser_run_target(AgeCategory::Senior, false));
    }

    #[test]
    fn parses_minute_second_formats() {
        assert_eq!(parse_laser_run_time("8:45"), 525.0);
        assert_eq!(parse_laser_run_time("12:03"), 723.0);
        assert_eq!(parse_laser_run_time("12:03.50"), 723.5);
    }

    #[test]
    fn falls_back_to_numeric_then_zero() {
        assert_eq!(parse_laser_run_time("525"), 525.0);
        assert_eq!(parse_laser_run_time("525.5"), 525.5);
        assert_eq!(parse_laser_run_time("not a time"), 0.0);
        assert_eq!(parse_laser_run_time("8:99"), 0.0);
        assert_eq!(parse_laser_run_time("-1:30"), 0.0);
    }

    #[test]
    fn strict_parse_reports_malformed_input() {
        assert_eq!(try_parse_time("8:45"), Some(525.0));
        assert_eq!(try_parse_time("garbage"), None);
        assert_eq!(try_parse_time("-40"), None);
    }

    #[test]
    fn format_round_trips_whole_seconds() {
        assert_eq!(format_laser_run_time(525.0), "8:45");
        assert_eq!(format_laser_run_time(59.0), "0:59");
        assert_eq!(format_laser_run_time(600.0), "10:00");
        for secs in [0.0, 61.0, 525.0, 779.0, 3600.0] {
            assert_eq!(parse_laser_run_time(&format_laser_run_time(secs)), secs);
        }
    }
}
