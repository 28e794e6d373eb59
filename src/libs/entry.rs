//! Row and log record types.
//!
//! An [`InProgressEntry`] is one employee's current work session as typed into the
//! form. When the session ends it is frozen into a [`LogRecord`] that carries the
//! computed duration and never changes afterwards.

use super::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the data entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InProgressEntry {
    pub employee_id: String,
    pub brand: String,
    pub activity: String,
    /// Kept verbatim, numeric or not.
    pub unit_count: String,
    pub start_time: String,
    pub end_time: String,
}

impl InProgressEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        !self.start_time.is_empty()
    }

    pub fn state(&self) -> RowState {
        if self.is_started() {
            RowState::Started
        } else {
            RowState::Empty
        }
    }

    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::EmployeeId => &self.employee_id,
            EntryField::Brand => &self.brand,
            EntryField::Activity => &self.activity,
            EntryField::UnitCount => &self.unit_count,
        }
    }

    pub(crate) fn set(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::EmployeeId => self.employee_id = value,
            EntryField::Brand => self.brand = value,
            EntryField::Activity => self.activity = value,
            EntryField::UnitCount => self.unit_count = value,
        }
    }
}

/// Timer state of a row. `end` always brings a row back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Empty,
    Started,
}

/// Fields a user may edit directly. Start and end times are only set by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    EmployeeId,
    Brand,
    Activity,
    UnitCount,
}

impl EntryField {
    pub const ALL: [EntryField; 4] = [EntryField::EmployeeId, EntryField::Brand, EntryField::Activity, EntryField::UnitCount];

    pub fn label(&self) -> &'static str {
        match self {
            EntryField::EmployeeId => "Employee ID",
            EntryField::Brand => "Brand",
            EntryField::Activity => "Activity",
            EntryField::UnitCount => "Unit Count (on task completion)",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntryField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>().to_lowercase();
        match normalized.as_str() {
            "employeeid" | "empid" | "emp" => Ok(EntryField::EmployeeId),
            "brand" => Ok(EntryField::Brand),
            "activity" => Ok(EntryField::Activity),
            "unitcount" | "units" => Ok(EntryField::UnitCount),
            _ => Err(StoreError::UnknownField(s.to_string())),
        }
    }
}

/// A completed work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    employee_id: String,
    brand: String,
    activity: String,
    start_time: String,
    end_time: String,
    unit_count: String,
    duration: String,
}

impl LogRecord {
    pub(crate) fn from_entry(entry: InProgressEntry, duration: String) -> Self {
        Self {
            employee_id: entry.employee_id,
            brand: entry.brand,
            activity: entry.activity,
            start_time: entry.start_time,
            end_time: entry.end_time,
            unit_count: entry.unit_count,
            duration,
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn unit_count(&self) -> &str {
        &self.unit_count
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }
}
