//! Duration formatting shared by the curriculum and dashboard views.

use qtty::time::Hours;

/// Format a count of minutes as "45m", "2h" or "1h 30m". Zero is "0m".
pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Convert a minute total to hours without rounding.
pub fn minutes_to_hours(minutes: u64) -> Hours {
    Hours::new(minutes as f64 / 60.0)
}

/// Round learning hours for display, e.g. `3.1666` with 2 decimals is "3.17".
pub fn format_learning_hours(hours: Hours, decimals: usize) -> String {
    format!("{:.*}", decimals, hours.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_duration_examples() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(61), "1h 1m");
    }

    #[test]
    fn test_minutes_to_hours() {
        assert_eq!(minutes_to_hours(180).value(), 3.0);
        assert_eq!(minutes_to_hours(0).value(), 0.0);
        assert_eq!(minutes_to_hours(90).value(), 1.5);
    }

    #[test]
    fn test_format_learning_hours() {
        assert_eq!(format_learning_hours(Hours::new(190.0 / 60.0), 2), "3.17");
        assert_eq!(format_learning_hours(Hours::new(3.0), 2), "3.00");
        assert_eq!(format_learning_hours(Hours::new(1.25), 0), "1");
    }

    proptest! {
        #[test]
        fn prop_format_duration_is_consistent(minutes in 0u64..100_000) {
            let formatted = format_duration(minutes);
            if minutes == 0 {
                prop_assert_eq!(formatted, "0m");
            } else if minutes % 60 == 0 {
                prop_assert_eq!(formatted, format!("{}h", minutes / 60));
            } else if minutes < 60 {
                prop_assert_eq!(formatted, format!("{}m", minutes));
            } else {
                prop_assert_eq!(formatted, format!("{}h {}m", minutes / 60, minutes % 60));
            }
        }
    }
}
