//! Built-in rendering styles.
//!
//! Two styles ship with the appender: a single-line `Simple` style and a
//! multi-field `Complex` style carrying timestamp, thread, target, and
//! source-location context. Unrecognized style names fall back to `Simple`.

use crate::record::LogRecord;

/// Name of the single-line style.
pub const SIMPLE_NAME: &str = "Simple";

/// Name of the multi-field style.
pub const COMPLEX_NAME: &str = "Complex";

/// Rendering style for one buffered record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogStyle {
    /// `LEVEL - message`, level padded to five columns.
    #[default]
    Simple,
    /// `elapsed [thread] LEVEL target (file:line) - message`.
    Complex,
}

impl LogStyle {
    /// Resolve a style by name, case-insensitively. Unknown names resolve to
    /// [`LogStyle::Simple`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(COMPLEX_NAME) {
            Self::Complex
        } else {
            Self::Simple
        }
    }

    /// Style name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => SIMPLE_NAME,
            Self::Complex => COMPLEX_NAME,
        }
    }

    /// Render one record, newline-terminated.
    #[must_use]
    pub fn format(self, record: &LogRecord) -> String {
        match self {
            Self::Simple => format!("{:<5} - {}\n", record.level, record.message),
            Self::Complex => {
                let file = record.file.as_deref().unwrap_or("?");
                let line = record.line.unwrap_or(0);
                format!(
                    "{} [{}] {:<5} {} ({}:{}) - {} \n",
                    record.elapsed_ms,
                    record.thread,
                    record.level,
                    record.target,
                    file,
                    line,
                    record.message,
                )
            }
        }
    }
}
