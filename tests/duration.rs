#[cfg(test)]
mod tests {
    use laxmi::libs::duration::{compute_duration, format_elapsed};
    use laxmi::libs::error::StoreError;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(compute_duration("09:00:00", "09:05:30").unwrap(), "5:30");
        assert_eq!(compute_duration("09:00:00", "09:00:45").unwrap(), "0:45");
    }

    #[test]
    fn test_long_sessions_stay_in_minutes() {
        assert_eq!(compute_duration("08:00:00", "16:30:09").unwrap(), "510:09");
    }

    #[test]
    fn test_midnight_rollover_is_negative() {
        assert_eq!(compute_duration("23:59:00", "00:01:00").unwrap(), "-1438:00");
    }

    #[test]
    fn test_mixed_clock_formats() {
        assert_eq!(compute_duration("13:00:00", "1:02:03 PM").unwrap(), "2:03");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(61), "1:01");
        assert_eq!(format_elapsed(-60), "-1:00");
    }

    #[test]
    fn test_invalid_time_is_reported() {
        let err = compute_duration("", "09:00:00").unwrap_err();
        assert_eq!(err, StoreError::InvalidTime(String::new()));
        assert_eq!(err.to_string(), "Invalid time of day: \"\"");
    }

    #[test]
    fn test_oversized_readings_are_rejected() {
        let huge = "9000000000000000000:00:00";
        assert_eq!(compute_duration(huge, "09:00:00"), Err(StoreError::InvalidTime(huge.to_string())));

        let negative = "-9000000000000000:00:00";
        assert_eq!(compute_duration("09:00:00", negative), Err(StoreError::InvalidTime(negative.to_string())));
        assert!(matches!(
            compute_duration(negative, "9000000000000000:00:00"),
            Err(StoreError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_elapsed_overflow_is_rejected() {
        let end = "0:0:9223372036854775807";
        let err = compute_duration("0:0:-9223372036854775807", end).unwrap_err();
        assert_eq!(err, StoreError::InvalidTime(end.to_string()));
    }
}
