//! Elapsed time between two wall-clock readings.
//!
//! Both readings are plain time-of-day strings (`H:MM:SS`, optionally followed by
//! `AM`/`PM`). They carry no date, so both are anchored to the same midnight and a
//! reading taken after midnight yields a negative duration.
//!
//! ## Format
//!
//! The result is `"{minutes}:{seconds}"` with seconds zero-padded to two digits.
//! Minutes are floored, the seconds part is the remainder and keeps the sign of
//! the elapsed time:
//!
//! ```rust
//! use laxmi::libs::duration::compute_duration;
//!
//! assert_eq!(compute_duration("09:00:00", "09:05:30").unwrap(), "5:30");
//! assert_eq!(compute_duration("23:59:00", "00:01:00").unwrap(), "-1438:00");
//! ```

use super::error::{StoreError, StoreResult};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Computes the elapsed duration from `start` to `end`.
pub fn compute_duration(start: &str, end: &str) -> StoreResult<String> {
    let elapsed = seconds_since_midnight(end)?
        .checked_sub(seconds_since_midnight(start)?)
        .ok_or_else(|| StoreError::InvalidTime(end.to_string()))?;
    Ok(format_elapsed(elapsed))
}

/// Formats a signed number of seconds as `minutes:seconds`.
pub fn format_elapsed(elapsed: i64) -> String {
    let minutes = elapsed.div_euclid(SECONDS_PER_MINUTE);
    let seconds = elapsed % SECONDS_PER_MINUTE;
    format!("{}:{:02}", minutes, seconds)
}

/// Converts a time-of-day reading into seconds since the anchoring midnight.
///
/// Components are not range checked: `25:00:00` is one hour past the next
/// midnight, `9:75:00` is a quarter past ten. Readings too large to count in
/// seconds are rejected as invalid.
pub fn seconds_since_midnight(time: &str) -> StoreResult<i64> {
    let invalid = || StoreError::InvalidTime(time.to_string());
    let trimmed = time.trim();

    let (clock, meridiem) = match trimmed.rsplit_once(char::is_whitespace) {
        Some((clock, suffix)) => match Meridiem::parse(suffix) {
            Some(meridiem) => (clock.trim_end(), Some(meridiem)),
            None => return Err(invalid()),
        },
        None => (trimmed, None),
    };

    let parts = clock
        .split(':')
        .map(|part| part.trim().parse::<i64>().map_err(|_| invalid()))
        .collect::<StoreResult<Vec<i64>>>()?;

    let &[hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };

    let hours = match meridiem {
        Some(meridiem) => meridiem.to_24h(hours).ok_or_else(invalid)?,
        None => hours,
    };

    hours
        .checked_mul(SECONDS_PER_HOUR)
        .zip(minutes.checked_mul(SECONDS_PER_MINUTE))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(invalid)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn parse(suffix: &str) -> Option<Self> {
        match suffix.trim_matches('.').to_ascii_uppercase().replace('.', "").as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    fn to_24h(self, hours: i64) -> Option<i64> {
        match (self, hours) {
            (Meridiem::Am, 12) => Some(0),
            (Meridiem::Am, h) => Some(h),
            (Meridiem::Pm, 12) => Some(12),
            (Meridiem::Pm, h) => h.checked_add(12),
        }
    }
}
