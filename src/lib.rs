//! # Laxmi - shop-floor activity timer
//!
//! A terminal time-tracking form: record employee ID, brand, activity and unit
//! count, start and stop a timer per employee, and review the session log of
//! completed entries with their durations.
//!
//! ## Features
//!
//! - **Data entry**: any number of employee rows, edited in place
//! - **Timer**: wall-clock start and end capture per row
//! - **Session log**: completed entries with `minutes:seconds` durations
//! - **Log output**: terminal table, CSV or JSON
//!
//! Rows and the log live in memory for the duration of one session.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use laxmi::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
