#[cfg(test)]
mod tests {
    use laxmi::libs::clock::Clock;
    use laxmi::libs::entry::{EntryField, InProgressEntry, RowState};
    use laxmi::libs::error::StoreError;
    use laxmi::libs::store::EntryStore;
    use std::cell::Cell;

    /// Clock that advances by a fixed step on every reading.
    struct SteppingClock {
        next: Cell<u32>,
        step: u32,
    }

    impl SteppingClock {
        fn new(start: u32, step: u32) -> Self {
            Self { next: Cell::new(start), step }
        }
    }

    impl Clock for SteppingClock {
        fn time_of_day(&self) -> String {
            let now = self.next.get();
            self.next.set(now + self.step);
            format!("{:02}:{:02}:{:02}", now / 3600, (now / 60) % 60, now % 60)
        }
    }

    fn nine_am(step: u32) -> SteppingClock {
        SteppingClock::new(9 * 3600, step)
    }

    fn fill(store: &mut EntryStore<SteppingClock>, row: usize, employee: &str, brand: &str, activity: &str, units: &str) {
        store.update_field(row, EntryField::EmployeeId, employee).unwrap();
        store.update_field(row, EntryField::Brand, brand).unwrap();
        store.update_field(row, EntryField::Activity, activity).unwrap();
        store.update_field(row, EntryField::UnitCount, units).unwrap();
    }

    #[test]
    fn test_add_row_appends_empty_entry() {
        let mut store = EntryStore::new(nine_am(1));
        assert_eq!(store.rows().len(), 0);

        let first = store.add_row();
        let second = store.add_row();

        assert_eq!((first, second), (0, 1));
        assert_eq!(store.rows().len(), 2);
        assert_eq!(store.rows()[1], InProgressEntry::new());
        assert_eq!(store.row_state(1).unwrap(), RowState::Empty);
    }

    #[test]
    fn test_with_rows_opens_empty_form() {
        let store = EntryStore::with_rows(nine_am(1), 3);
        assert_eq!(store.rows().len(), 3);
        assert!(store.rows().iter().all(|row| *row == InProgressEntry::new()));
        assert!(store.log().is_empty());
    }

    #[test]
    fn test_update_field_changes_only_that_field() {
        let mut store = EntryStore::with_rows(nine_am(1), 2);
        store.update_field(1, EntryField::Brand, "Acme").unwrap();

        let row = store.row(1).unwrap();
        assert_eq!(row.brand, "Acme");
        assert_eq!(row.employee_id, "");
        assert_eq!(row.start_time, "");
        assert_eq!(store.rows()[0], InProgressEntry::new());
        assert_eq!(store.row_state(1).unwrap(), RowState::Empty);
    }

    #[test]
    fn test_update_field_out_of_range() {
        let mut store = EntryStore::with_rows(nine_am(1), 1);
        let err = store.update_field(5, EntryField::Activity, "Packing").unwrap_err();
        assert_eq!(err, StoreError::RowOutOfRange { index: 5, len: 1 });
    }

    #[test]
    fn test_start_sets_time_and_keeps_fields() {
        let mut store = EntryStore::with_rows(nine_am(1), 1);
        fill(&mut store, 0, "E-17", "Acme", "Shelving", "40");

        let started = store.start(0).unwrap();

        let row = store.row(0).unwrap();
        assert_eq!(started, "09:00:00");
        assert_eq!(row.start_time, "09:00:00");
        assert_eq!(row.end_time, "");
        assert_eq!(row.employee_id, "E-17");
        assert_eq!(row.unit_count, "40");
        assert_eq!(store.row_state(0).unwrap(), RowState::Started);
    }

    #[test]
    fn test_end_logs_snapshot_and_resets_row() {
        let mut store = EntryStore::with_rows(nine_am(330), 1);
        fill(&mut store, 0, "E-17", "Acme", "Shelving", "40");
        store.start(0).unwrap();

        store.end(0).unwrap();

        assert_eq!(store.log().len(), 1);
        let record = &store.log()[0];
        assert_eq!(record.employee_id(), "E-17");
        assert_eq!(record.brand(), "Acme");
        assert_eq!(record.activity(), "Shelving");
        assert_eq!(record.unit_count(), "40");
        assert_eq!(record.start_time(), "09:00:00");
        assert_eq!(record.end_time(), "09:05:30");
        assert_eq!(record.duration(), "5:30");

        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0], InProgressEntry::new());
        assert_eq!(store.row_state(0).unwrap(), RowState::Empty);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut store = EntryStore::with_rows(nine_am(1), 1);
        fill(&mut store, 0, "E-1", "Acme", "Picking", "");

        assert_eq!(store.end(0).unwrap_err(), StoreError::NotStarted { index: 0 });
        assert!(store.log().is_empty());
        assert_eq!(store.row(0).unwrap().employee_id, "E-1");
    }

    #[test]
    fn test_end_out_of_range() {
        let mut store = EntryStore::with_rows(nine_am(1), 1);
        assert_eq!(store.end(1).unwrap_err(), StoreError::RowOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn test_unvalidated_unit_count_is_logged_verbatim() {
        let mut store = EntryStore::with_rows(nine_am(45), 1);
        store.update_field(0, EntryField::UnitCount, "twelve-ish").unwrap();
        store.start(0).unwrap();
        let record = store.end(0).unwrap();
        assert_eq!(record.unit_count(), "twelve-ish");
        assert_eq!(record.duration(), "0:45");
    }

    #[test]
    fn test_log_keeps_completion_order_across_rows() {
        let mut store = EntryStore::with_rows(nine_am(60), 3);
        fill(&mut store, 0, "A", "Acme", "Picking", "1");
        fill(&mut store, 1, "B", "Bolt", "Packing", "2");
        fill(&mut store, 2, "C", "Core", "Loading", "3");

        store.start(0).unwrap(); // 09:00
        store.start(1).unwrap(); // 09:01
        store.start(2).unwrap(); // 09:02
        store.end(2).unwrap(); // 09:03
        store.end(0).unwrap(); // 09:04
        store.end(1).unwrap(); // 09:05

        let order: Vec<&str> = store.log().iter().map(|r| r.employee_id()).collect();
        assert_eq!(order, ["C", "A", "B"]);
        let durations: Vec<&str> = store.log().iter().map(|r| r.duration()).collect();
        assert_eq!(durations, ["1:00", "4:00", "4:00"]);
        assert_eq!(store.started_count(), 0);
    }

    #[test]
    fn test_row_slot_is_reused_after_end() {
        let mut store = EntryStore::with_rows(nine_am(90), 1);
        fill(&mut store, 0, "A", "Acme", "Picking", "5");
        store.start(0).unwrap();
        store.end(0).unwrap();

        fill(&mut store, 0, "A", "Acme", "Packing", "8");
        store.start(0).unwrap();
        store.end(0).unwrap();

        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.log().len(), 2);
        assert_eq!(store.log()[0].activity(), "Picking");
        assert_eq!(store.log()[1].activity(), "Packing");
        assert_eq!(store.log()[1].start_time(), "09:03:00");
        assert_eq!(store.log()[1].duration(), "1:30");
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut store = EntryStore::with_rows(nine_am(600), 1);
        store.start(0).unwrap(); // 09:00
        store.start(0).unwrap(); // 09:10
        let record = store.end(0).unwrap(); // 09:20
        assert_eq!(record.start_time(), "09:10:00");
        assert_eq!(record.duration(), "10:00");
    }

    #[test]
    fn test_started_count_tracks_running_timers() {
        let mut store = EntryStore::with_rows(nine_am(1), 2);
        store.start(0).unwrap();
        store.start(1).unwrap();
        assert_eq!(store.started_count(), 2);
        store.end(0).unwrap();
        assert_eq!(store.started_count(), 1);
    }
}
