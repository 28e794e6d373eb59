//! In-memory store for form rows and the session log.
//!
//! The store owns two ordered collections: the rows currently on the data entry
//! form and the log of completed sessions. Rows are addressed by index and are
//! never removed; ending a row's session resets it in place so the slot can be
//! reused for the next activity.
//!
//! ## Row lifecycle
//!
//! ```text
//!   add_row ──▶ Empty ──start──▶ Started ──end──▶ Empty
//!                 ▲                 │
//!                 └── update_field ─┘ (any state, state unchanged)
//! ```
//!
//! Calling [`EntryStore::start`] on an already started row restarts its timer.
//! Calling [`EntryStore::end`] on a row that was never started fails with
//! [`StoreError::NotStarted`] and leaves the store untouched.
//!
//! ## Example
//!
//! ```rust
//! use laxmi::libs::clock::{ClockFormat, SystemClock};
//! use laxmi::libs::entry::EntryField;
//! use laxmi::libs::store::EntryStore;
//!
//! let mut store = EntryStore::new(SystemClock::new(ClockFormat::H24));
//! let row = store.add_row();
//! store.update_field(row, EntryField::EmployeeId, "E-104").unwrap();
//! store.start(row).unwrap();
//! store.end(row).unwrap();
//! assert_eq!(store.log().len(), 1);
//! ```

use super::clock::Clock;
use super::duration::compute_duration;
use super::entry::{EntryField, InProgressEntry, LogRecord, RowState};
use super::error::{StoreError, StoreResult};
use std::mem;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct EntryStore<C: Clock> {
    clock: C,
    rows: Vec<InProgressEntry>,
    log: Vec<LogRecord>,
}

impl<C: Clock> EntryStore<C> {
    /// Creates a store with no rows.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            rows: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Creates a store with `count` empty rows.
    pub fn with_rows(clock: C, count: usize) -> Self {
        let mut store = Self::new(clock);
        store.rows.resize_with(count, InProgressEntry::new);
        store
    }

    /// Appends an empty row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(InProgressEntry::new());
        let index = self.rows.len() - 1;
        debug!(index, "row added");
        index
    }

    /// Overwrites one editable field of a row. The timer state is not touched.
    pub fn update_field(&mut self, index: usize, field: EntryField, value: impl Into<String>) -> StoreResult<()> {
        let row = self.row_mut(index)?;
        row.set(field, value.into());
        debug!(index, ?field, "row field updated");
        Ok(())
    }

    /// Same as [`EntryStore::update_field`] with the field given by name,
    /// e.g. `"empId"` or `"unit_count"`.
    pub fn update_named_field(&mut self, index: usize, name: &str, value: impl Into<String>) -> StoreResult<()> {
        let field: EntryField = name.parse()?;
        self.update_field(index, field, value)
    }

    /// Captures the current time as the row's start time and returns it.
    pub fn start(&mut self, index: usize) -> StoreResult<String> {
        let now = self.clock.time_of_day();
        let row = self.row_mut(index)?;
        if row.is_started() {
            warn!(index, previous = %row.start_time, "restarting an already started row");
        }
        row.start_time = now.clone();
        info!(index, start = %now, "row started");
        Ok(now)
    }

    /// Ends the row's session: records it in the log and resets the row.
    pub fn end(&mut self, index: usize) -> StoreResult<&LogRecord> {
        let now = self.clock.time_of_day();
        let row = self.row_mut(index)?;
        if !row.is_started() {
            return Err(StoreError::NotStarted { index });
        }
        let duration = compute_duration(&row.start_time, &now)?;

        let mut finished = mem::take(row);
        finished.end_time = now;
        info!(index, start = %finished.start_time, end = %finished.end_time, %duration, "row ended");

        self.log.push(LogRecord::from_entry(finished, duration));
        Ok(&self.log[self.log.len() - 1])
    }

    /// Rows on the form, in the order they were added.
    pub fn rows(&self) -> &[InProgressEntry] {
        &self.rows
    }

    /// Row at `index`, or [`StoreError::RowOutOfRange`].
    pub fn row(&self, index: usize) -> StoreResult<&InProgressEntry> {
        self.rows.get(index).ok_or(StoreError::RowOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Timer state of the row at `index`.
    pub fn row_state(&self, index: usize) -> StoreResult<RowState> {
        self.row(index).map(InProgressEntry::state)
    }

    /// Completed sessions in completion order.
    pub fn log(&self) -> &[LogRecord] {
        &self.log
    }

    /// Number of rows whose timer is running.
    pub fn started_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_started()).count()
    }

    fn row_mut(&mut self, index: usize) -> StoreResult<&mut InProgressEntry> {
        let len = self.rows.len();
        self.rows.get_mut(index).ok_or(StoreError::RowOutOfRange { index, len })
    }
}
