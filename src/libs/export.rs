//! Rendering of the session log.
//!
//! The log can be shown as a terminal table, or written as CSV or JSON so it
//! can be copied into a spreadsheet before the session is closed. Every format
//! writes to any [`Write`] target and keeps completion order.

use super::entry::LogRecord;
use super::view::{View, LOG_HEADER};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Aligned terminal table.
    #[default]
    Table,

    /// Comma-separated values with a header line.
    Csv,

    /// Pretty-printed JSON array.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogFormat::Table => "table",
            LogFormat::Csv => "csv",
            LogFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Writes `records` to `out` in the requested format.
pub fn render_log<W: Write>(records: &[LogRecord], format: LogFormat, out: &mut W) -> Result<()> {
    match format {
        LogFormat::Table => {
            View::log_table(records).print(out)?;
        }
        LogFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(LOG_HEADER)?;
            for record in records {
                wtr.write_record([
                    record.employee_id(),
                    record.brand(),
                    record.activity(),
                    record.start_time(),
                    record.end_time(),
                    record.unit_count(),
                    record.duration(),
                ])?;
            }
            wtr.flush()?;
        }
        LogFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
