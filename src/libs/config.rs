//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the per-user
//! data directory (see [`DataStorage`]). A missing file is not an error: the
//! defaults below apply until `laxmi init` saves a file.
//!
//! ```json
//! {
//!   "session": {
//!     "initial_rows": 1,
//!     "clock": "h24",
//!     "log_format": "table"
//!   }
//! }
//! ```
//!
//! Only settings live here. Rows and log records are never written to disk.

use super::clock::ClockFormat;
use super::data_storage::DataStorage;
use super::export::LogFormat;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Upper bound for rows opened with a session.
pub const MAX_INITIAL_ROWS: usize = 100;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of empty rows on the form when a session opens.
    pub initial_rows: usize,

    /// Format of the start and end times captured by the timer.
    pub clock: ClockFormat,

    /// How the log tab renders completed entries.
    pub log_format: LogFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            initial_rows: 1,
            clock: ClockFormat::H24,
            log_format: LogFormat::Table,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads the configuration file, or the defaults when none exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Session settings with defaults filled in.
    pub fn session(&self) -> SessionConfig {
        self.session.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.session();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleSession);

        let rows_range_msg = Message::InitialRowsRange.to_string();
        let initial_rows = Input::with_theme(&theme)
            .with_prompt(Message::PromptInitialRows.to_string())
            .default(default.initial_rows)
            .validate_with(|input: &usize| -> Result<(), &str> {
                if (1..=MAX_INITIAL_ROWS).contains(input) {
                    Ok(())
                } else {
                    Err(&rows_range_msg)
                }
            })
            .interact_text()?;

        let clocks = [ClockFormat::H24, ClockFormat::H12];
        let clock_labels = [Message::ClockFormatH24, Message::ClockFormatH12].map(|m| m.to_string());
        let clock = Select::with_theme(&theme)
            .with_prompt(Message::PromptClockFormat.to_string())
            .items(&clock_labels)
            .default(clocks.iter().position(|c| *c == default.clock).unwrap_or(0))
            .interact()?;

        let formats = [LogFormat::Table, LogFormat::Csv, LogFormat::Json];
        let log_format = Select::with_theme(&theme)
            .with_prompt(Message::PromptLogFormat.to_string())
            .items(&formats.iter().map(|f| f.to_string()).collect::<Vec<_>>())
            .default(formats.iter().position(|f| *f == default.log_format).unwrap_or(0))
            .interact()?;

        config.session = Some(SessionConfig {
            initial_rows,
            clock: clocks[clock],
            log_format: formats[log_format],
        });

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_session_section_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "session": { "clock": "h12" } }"#).unwrap();
        let session = config.session();
        assert_eq!(session.clock, ClockFormat::H12);
        assert_eq!(session.initial_rows, 1);
        assert_eq!(session.log_format, LogFormat::Table);
    }

    #[test]
    fn empty_config_serializes_without_session() {
        assert_eq!(serde_json::to_string(&Config::default()).unwrap(), "{}");
    }
}
