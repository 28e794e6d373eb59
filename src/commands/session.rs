//! Interactive time-tracking session.
//!
//! The session mirrors the two tabs of the data entry form: **Data Entry**, where
//! employee rows are edited and their timers started and stopped, and **Logs**,
//! where completed entries are listed. Everything lives in one [`EntryStore`]
//! that is dropped when the session ends.

use crate::{
    libs::{
        clock::{ClockFormat, SystemClock},
        config::{Config, SessionConfig, MAX_INITIAL_ROWS},
        entry::{EntryField, InProgressEntry},
        export::{render_log, LogFormat},
        messages::Message,
        store::EntryStore,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

#[derive(Debug, Default, Args)]
pub struct SessionArgs {
    /// Rows on the form when the session opens
    #[arg(short, long)]
    rows: Option<usize>,

    /// Format of captured start and end times
    #[arg(short, long, value_enum)]
    clock: Option<ClockFormat>,

    /// How the Logs tab renders completed entries
    #[arg(short, long, value_enum)]
    log_format: Option<LogFormat>,
}

impl SessionArgs {
    /// Command-line flags take precedence over the saved configuration.
    fn apply(&self, mut settings: SessionConfig) -> SessionConfig {
        if let Some(rows) = self.rows {
            settings.initial_rows = rows;
        }
        if let Some(clock) = self.clock {
            settings.clock = clock;
        }
        if let Some(log_format) = self.log_format {
            settings.log_format = log_format;
        }
        settings
    }
}

pub fn cmd(args: SessionArgs) -> Result<()> {
    let settings = match Config::read() {
        Ok(config) => config.session(),
        Err(e) => {
            msg_warning!(Message::ConfigReadFailed(e.to_string()));
            SessionConfig::default()
        }
    };
    let settings = args.apply(settings);
    check_initial_rows(settings.initial_rows)?;

    msg_print!(Message::SessionBanner(APP_METADATA_TITLE.to_string(), APP_METADATA_VERSION.to_string()), true);

    let store = EntryStore::with_rows(SystemClock::new(settings.clock), settings.initial_rows);
    Session::new(store, settings.log_format).run()
}

/// Same bounds as the configuration wizard.
fn check_initial_rows(rows: usize) -> Result<()> {
    if !(1..=MAX_INITIAL_ROWS).contains(&rows) {
        msg_bail_anyhow!(Message::InitialRowsRange);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    DataEntry,
    Logs,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Edit(EntryField),
    Start,
    End,
    Back,
}

impl RowAction {
    /// Actions offered for a row. End is only offered once the timer runs.
    fn available(entry: &InProgressEntry) -> Vec<RowAction> {
        let mut actions: Vec<RowAction> = EntryField::ALL.into_iter().map(RowAction::Edit).collect();
        actions.push(RowAction::Start);
        if entry.is_started() {
            actions.push(RowAction::End);
        }
        actions.push(RowAction::Back);
        actions
    }

    fn label(&self, entry: &InProgressEntry) -> String {
        match self {
            RowAction::Edit(field) => {
                let current = entry.get(*field);
                if current.is_empty() {
                    Message::RowEditField(field.to_string()).to_string()
                } else {
                    format!("{} ({})", Message::RowEditField(field.to_string()), current)
                }
            }
            RowAction::Start => Message::RowStartAction.to_string(),
            RowAction::End => Message::RowEndAction.to_string(),
            RowAction::Back => Message::Back.to_string(),
        }
    }
}

struct Session {
    store: EntryStore<SystemClock>,
    log_format: LogFormat,
    theme: ColorfulTheme,
}

impl Session {
    fn new(store: EntryStore<SystemClock>, log_format: LogFormat) -> Self {
        Self {
            store,
            log_format,
            theme: ColorfulTheme::default(),
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            match self.select_tab()? {
                Tab::DataEntry => self.data_entry()?,
                Tab::Logs => self.show_log()?,
                Tab::Quit => break,
            }
        }
        self.close()
    }

    fn select_tab(&self) -> Result<Tab> {
        let tabs = [Tab::DataEntry, Tab::Logs, Tab::Quit];
        let labels = [Message::TabDataEntry, Message::TabLogs, Message::TabQuit].map(|m| m.to_string());
        let selection = Select::with_theme(&self.theme)
            .with_prompt(Message::SessionTabPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(selection.map_or(Tab::Quit, |index| tabs[index]))
    }

    fn data_entry(&mut self) -> Result<()> {
        loop {
            let rows = self.store.rows();
            msg_print!(Message::RowsHeader(rows.len()), true);
            View::rows(rows);

            let mut items: Vec<String> = rows.iter().enumerate().map(|(i, row)| View::row_label(i, row)).collect();
            let add_index = items.len();
            items.push(Message::RowAddAnother.to_string());
            items.push(Message::Back.to_string());

            let selection = Select::with_theme(&self.theme)
                .with_prompt(Message::RowSelectPrompt.to_string())
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(index) if index < add_index => self.row_menu(index)?,
                Some(index) if index == add_index => {
                    let row = self.store.add_row();
                    msg_success!(Message::RowAdded(row + 1));
                }
                _ => return Ok(()),
            }
        }
    }

    fn row_menu(&mut self, index: usize) -> Result<()> {
        loop {
            let entry = self.store.row(index)?.clone();
            let actions = RowAction::available(&entry);
            let labels: Vec<String> = actions.iter().map(|action| action.label(&entry)).collect();

            let selection = Select::with_theme(&self.theme)
                .with_prompt(Message::RowMenuPrompt(index + 1).to_string())
                .items(&labels)
                .default(0)
                .interact_opt()?;

            let action = selection.map_or(RowAction::Back, |i| actions[i]);
            msg_debug!(format!("row {} action {:?}", index, action));

            match action {
                RowAction::Edit(field) => self.edit_field(index, field, entry.get(field))?,
                RowAction::Start => self.start(index, &entry),
                RowAction::End => {
                    self.end(index);
                    return Ok(());
                }
                RowAction::Back => return Ok(()),
            }
        }
    }

    fn edit_field(&mut self, index: usize, field: EntryField, current: &str) -> Result<()> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;

        match self.store.update_field(index, field, value) {
            Ok(()) => msg_debug!(Message::RowFieldUpdated(field.to_string(), index + 1)),
            Err(e) => msg_error!(Message::OperationFailed(e.to_string())),
        }
        Ok(())
    }

    fn start(&mut self, index: usize, entry: &InProgressEntry) {
        if entry.is_started() {
            msg_warning!(Message::RowRestarted(index + 1, entry.start_time.clone()));
        }
        match self.store.start(index) {
            Ok(time) => msg_success!(Message::RowStarted(index + 1, time)),
            Err(e) => msg_error!(Message::OperationFailed(e.to_string())),
        }
    }

    fn end(&mut self, index: usize) {
        match self.store.end(index) {
            Ok(record) => msg_success!(Message::RowEnded(index + 1, record.employee_id().to_string(), record.duration().to_string())),
            Err(e) => msg_error!(Message::OperationFailed(e.to_string())),
        }
    }

    fn show_log(&self) -> Result<()> {
        let log = self.store.log();
        if log.is_empty() {
            msg_info!(Message::LogEmpty, true);
            return Ok(());
        }

        msg_print!(Message::LogHeader(log.len()), true);
        render_log(log, self.log_format, &mut io::stdout().lock())
    }

    fn close(&self) -> Result<()> {
        let unfinished = self.store.started_count();
        if unfinished > 0 {
            msg_warning!(Message::SessionUnfinishedRows(unfinished));
        }
        if !self.store.log().is_empty() {
            self.show_log()?;
        }
        msg_info!(Message::SessionNotPersisted);
        msg_print!(Message::SessionClosed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_offered_only_after_start() {
        let mut entry = InProgressEntry::new();
        assert!(!RowAction::available(&entry).contains(&RowAction::End));

        entry.start_time = "09:00:00".into();
        let actions = RowAction::available(&entry);
        assert!(actions.contains(&RowAction::End));
        assert_eq!(actions.last(), Some(&RowAction::Back));
    }

    #[test]
    fn edit_label_shows_current_value() {
        let mut entry = InProgressEntry::new();
        assert_eq!(RowAction::Edit(EntryField::Brand).label(&entry), "Edit Brand");
        entry.brand = "Acme".into();
        assert_eq!(RowAction::Edit(EntryField::Brand).label(&entry), "Edit Brand (Acme)");
    }

    #[test]
    fn initial_rows_must_be_in_range() {
        assert!(check_initial_rows(1).is_ok());
        assert!(check_initial_rows(MAX_INITIAL_ROWS).is_ok());

        let err = check_initial_rows(0).unwrap_err();
        assert!(err.to_string().contains(&Message::InitialRowsRange.to_string()));
        assert!(check_initial_rows(MAX_INITIAL_ROWS + 1).is_err());
    }

    #[test]
    fn flags_override_saved_settings() {
        let args = SessionArgs {
            rows: Some(3),
            clock: None,
            log_format: Some(LogFormat::Csv),
        };
        let saved = SessionConfig {
            initial_rows: 1,
            clock: ClockFormat::H12,
            log_format: LogFormat::Table,
        };
        let settings = args.apply(saved);
        assert_eq!(settings.initial_rows, 3);
        assert_eq!(settings.clock, ClockFormat::H12);
        assert_eq!(settings.log_format, LogFormat::Csv);
    }
}
