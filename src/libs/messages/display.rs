//! Display implementation for laxmi application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between the interactive session, the one-off commands and the
//! configuration wizard.
//!
//! Parameterised variants interpolate their values directly. Row numbers are
//! always shown 1-based.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionBanner(title, version) => format!("{} (v{})", title, version),
            Message::SessionTabPrompt => "Choose a tab".to_string(),
            Message::TabDataEntry => "Data Entry".to_string(),
            Message::TabLogs => "Logs".to_string(),
            Message::TabQuit => "Quit".to_string(),
            Message::SessionNotPersisted => "Session log is kept in memory only and is discarded on exit".to_string(),
            Message::SessionUnfinishedRows(count) => format!("{} row(s) still have a running timer and will not be logged", count),
            Message::SessionClosed => "Session closed".to_string(),

            // === ROW MESSAGES ===
            Message::RowsHeader(count) => format!("Employees on the form: {}", count),
            Message::RowSelectPrompt => "Select an employee row".to_string(),
            Message::RowMenuPrompt(row) => format!("Row #{}", row),
            Message::RowAddAnother => "+ Add Another Employee".to_string(),
            Message::RowAdded(row) => format!("Row #{} added", row),
            Message::RowStarted(row, time) => format!("Row #{} started at {}", row, time),
            Message::RowRestarted(row, previous) => format!("Row #{} was already started at {}, timer restarted", row, previous),
            Message::RowEnded(row, employee, duration) => {
                if employee.is_empty() {
                    format!("Row #{} ended, duration {}", row, duration)
                } else {
                    format!("Row #{} ({}) ended, duration {}", row, employee, duration)
                }
            }
            Message::RowStartAction => "Start".to_string(),
            Message::RowEndAction => "End".to_string(),
            Message::RowEditField(label) => format!("Edit {}", label),
            Message::RowFieldUpdated(label, row) => format!("{} updated for row #{}", label, row),
            Message::RowEmptyLabel => "(empty)".to_string(),
            Message::RowStartTime(time) => format!("Start Time: {}", time),
            Message::Back => "Back".to_string(),

            // === LOG MESSAGES ===
            Message::LogHeader(count) => format!("Completed entries: {}", count),
            Message::LogEmpty => "No completed entries yet".to_string(),

            // === DURATION MESSAGES ===
            Message::DurationBetween(start, end, duration) => format!("{} -> {}: {}", start, end, duration),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply".to_string(),
            Message::ConfigFileNotFound => "No configuration file, defaults apply".to_string(),
            Message::ConfigPath(path) => format!("Configuration file: {}", path),
            Message::ConfigModuleSession => "Session settings".to_string(),
            Message::PromptInitialRows => "Rows on the form when a session opens".to_string(),
            Message::PromptClockFormat => "Clock format for captured times".to_string(),
            Message::ClockFormatH24 => "24-hour (14:05:09)".to_string(),
            Message::ClockFormatH12 => "12-hour (2:05:09 PM)".to_string(),
            Message::PromptLogFormat => "Log view format".to_string(),
            Message::InitialRowsRange => "Enter a number between 1 and 100".to_string(),

            // === ERROR MESSAGES ===
            Message::OperationFailed(error) => format!("Operation failed: {}", error),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
        };

        write!(f, "{}", text)
    }
}
