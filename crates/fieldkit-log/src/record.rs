//! Owned snapshots of log events.

use std::sync::OnceLock;

use log::Level;
use web_time::Instant;

/// Process-wide epoch for the elapsed-milliseconds field.
static EPOCH: OnceLock<Instant> = OnceLock::new();

fn elapsed_ms() -> u64 {
    let epoch = EPOCH.get_or_init(Instant::now);
    u64::try_from(epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// One buffered log event.
///
/// Snapshots everything the formatting styles can use, so the buffer never
/// borrows from the producing call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity.
    pub level: Level,
    /// Logger target (module path by convention).
    pub target: String,
    /// Formatted message.
    pub message: String,
    /// Name of the producing thread, `?` when unnamed.
    pub thread: String,
    /// Source file, if the producer supplied one.
    pub file: Option<String>,
    /// Source line, if the producer supplied one.
    pub line: Option<u32>,
    /// Milliseconds since the first record was captured.
    pub elapsed_ms: u64,
}

impl LogRecord {
    /// Capture a record on the current thread with the current timestamp.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            target: String::new(),
            message: message.into(),
            thread: std::thread::current().name().unwrap_or("?").to_string(),
            file: None,
            line: None,
            elapsed_ms: elapsed_ms(),
        }
    }

    /// Set the logger target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the source location.
    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Override the elapsed timestamp (deterministic formatting in tests).
    #[must_use]
    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Snapshot a `log` facade record.
    #[must_use]
    pub fn from_record(record: &log::Record<'_>) -> Self {
        Self {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            thread: std::thread::current().name().unwrap_or("?").to_string(),
            file: record.file().map(ToString::to_string),
            line: record.line(),
            elapsed_ms: elapsed_ms(),
        }
    }
}
