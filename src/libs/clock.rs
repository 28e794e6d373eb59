use chrono::Local;
use serde::{Deserialize, Serialize};

/// Source of wall-clock time-of-day readings for the entry store.
pub trait Clock {
    /// Current time of day, without a date.
    fn time_of_day(&self) -> String;
}

/// How captured times are written into rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockFormat {
    /// `14:05:09`
    #[default]
    H24,
    /// `2:05:09 PM`
    H12,
}

impl ClockFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            ClockFormat::H24 => "%H:%M:%S",
            ClockFormat::H12 => "%-I:%M:%S %p",
        }
    }
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    format: ClockFormat,
}

impl SystemClock {
    pub fn new(format: ClockFormat) -> Self {
        Self { format }
    }
}

impl Clock for SystemClock {
    fn time_of_day(&self) -> String {
        Local::now().format(self.format.pattern()).to_string()
    }
}
