#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionBanner(String, String), // title, version
    SessionTabPrompt,
    TabDataEntry,
    TabLogs,
    TabQuit,
    SessionNotPersisted,
    SessionUnfinishedRows(usize),
    SessionClosed,

    // === ROW MESSAGES ===
    RowsHeader(usize),
    RowSelectPrompt,
    RowMenuPrompt(usize), // 1-based row number
    RowAddAnother,
    RowAdded(usize),
    RowStarted(usize, String),       // row, start time
    RowRestarted(usize, String),     // row, previous start time
    RowEnded(usize, String, String), // row, employee id, duration
    RowStartAction,
    RowEndAction,
    RowEditField(String),
    RowFieldUpdated(String, usize), // field label, row
    RowEmptyLabel,
    RowStartTime(String),
    Back,

    // === LOG MESSAGES ===
    LogHeader(usize),
    LogEmpty,

    // === DURATION MESSAGES ===
    DurationBetween(String, String, String), // start, end, duration

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigPath(String),
    ConfigModuleSession,
    PromptInitialRows,
    PromptClockFormat,
    ClockFormatH24,
    ClockFormatH12,
    PromptLogFormat,
    InitialRowsRange,

    // === ERROR MESSAGES ===
    OperationFailed(String),
    ConfigReadFailed(String),
}
