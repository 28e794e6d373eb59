use super::entry::{InProgressEntry, LogRecord};
use super::messages::Message;
use prettytable::{row, Cell, Row, Table};

pub const LOG_HEADER: [&str; 7] = ["EMP ID", "BRAND", "ACTIVITY", "START", "END", "UNITS", "DURATION"];

pub struct View {}

impl View {
    /// Completed entries, one line each, in completion order.
    pub fn log_table(records: &[LogRecord]) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::new(LOG_HEADER.iter().map(|title| Cell::new(title)).collect()));
        for record in records {
            table.add_row(row![
                record.employee_id(),
                record.brand(),
                record.activity(),
                record.start_time(),
                record.end_time(),
                record.unit_count(),
                record.duration()
            ]);
        }

        table
    }

    pub fn rows(rows: &[InProgressEntry]) {
        let mut table = Table::new();

        table.set_titles(row!["#", "EMP ID", "BRAND", "ACTIVITY", "UNITS", "STATUS"]);
        for (index, entry) in rows.iter().enumerate() {
            table.add_row(row![
                index + 1,
                entry.employee_id,
                entry.brand,
                entry.activity,
                entry.unit_count,
                Self::status(entry)
            ]);
        }
        table.printstd();
    }

    /// One-line summary used as a menu item.
    pub fn row_label(index: usize, entry: &InProgressEntry) -> String {
        let fields: Vec<&str> = [&entry.employee_id, &entry.brand, &entry.activity]
            .into_iter()
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .collect();
        let summary = if fields.is_empty() {
            Message::RowEmptyLabel.to_string()
        } else {
            fields.join(" · ")
        };

        match Self::status(entry) {
            status if status.is_empty() => format!("#{} {}", index + 1, summary),
            status => format!("#{} {} [{}]", index + 1, summary, status),
        }
    }

    fn status(entry: &InProgressEntry) -> String {
        if entry.is_started() {
            Message::RowStartTime(entry.start_time.clone()).to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_label_shows_filled_fields_and_start_time() {
        let mut entry = InProgressEntry::new();
        assert_eq!(View::row_label(0, &entry), "#1 (empty)");

        entry.employee_id = "E3".into();
        entry.activity = "Stacking".into();
        entry.start_time = "10:15:00".into();
        assert_eq!(View::row_label(2, &entry), "#3 E3 · Stacking [Start Time: 10:15:00]");
    }

    #[test]
    fn log_table_has_one_row_per_record() {
        assert_eq!(View::log_table(&[]).len(), 0);

        let finished = |employee: &str, start: &str, end: &str, duration: &str| {
            let entry = InProgressEntry {
                employee_id: employee.into(),
                start_time: start.into(),
                end_time: end.into(),
                ..InProgressEntry::new()
            };
            LogRecord::from_entry(entry, duration.into())
        };
        let records = [
            finished("E1", "09:00:00", "09:05:30", "5:30"),
            finished("E2", "09:01:00", "09:01:45", "0:45"),
        ];

        let table = View::log_table(&records);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get_row(1).and_then(|row| row.get_cell(0)).map(|cell| cell.get_content()), Some("E2".to_string()));
    }
}
