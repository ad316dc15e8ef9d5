#[derive(Debug, Clone)]
pub enum Message {
    // === SERVER MESSAGES ===
    ServerStarting { name: String, version: String },
    ServerListening(String), // address
    ServerStopped,
    ServerError(String),
    ReceivedSigterm,
    ReceivedSigint,
    ReceivedCtrlC,
    CtrlCListenFailed(String), // error
    SignalHandlerFailed(String), // error

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path
    DatabaseClosed,

    // === GOAL MESSAGES ===
    GoalCreated(i64),

    // === TASK MESSAGES ===
    TaskCreated { id: i64, goal_id: i64 },
    TaskCompletionUpdated { id: i64, completed: bool },

    // === REQUEST MESSAGES ===
    RequestFailed(String),   // error
    InvalidRequest(String),  // rejection text
    BlockingTaskFailed(String),

    // === SCHEDULER MESSAGES ===
    SchedulerStarted(usize), // job count
    SchedulerStopped,
    JobRegistered { title: String, name: String, schedule: String },
    JobNextRun { name: String, at: String },
    JobNoNextRun { name: String, error: String },
    JobStarted { title: String, name: String },
    JobFinished(String),  // name
    JobFailed { name: String, error: String },
    JobPanicked { name: String, error: String },
    ReportDisabled,

    // === REPORT MESSAGES ===
    ReportHeader { generated_at: String, count: usize },
    ReportTaskLine { index: usize, goal_id: i64, title: String, created: String },
    ReportFooter,
    ReportNoIncompleteTasks,
    ReportFetchFailed(String), // error

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String), // path
    ConfigSaved(String),  // path
    ConfigAlreadyExists(String),
    ConfigInvalidOverride { key: String, value: String },

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry { version: u32, name: String, applied_at: String },
}
