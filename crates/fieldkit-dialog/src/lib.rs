#![forbid(unsafe_code)]

//! Error dialog helper.
//!
//! Presents an already-caught error as a modal-style text block: the error's
//! type name as the title, its display message as the body, and an
//! expandable panel holding the full cause chain — the closest Rust analogue
//! to a stack-trace panel. The helper itself holds no state machine beyond
//! the expanded/collapsed flag; rendering is deterministic and testable
//! without any UI, and presentation is a single posted task.

use std::error::Error;

use fieldkit_surface::{TextPane, UiHandle};
use unicode_width::UnicodeWidthStr;

/// Marker line for the collapsed detail panel.
const COLLAPSED_MARKER: &str = "▸ Details";

/// Marker line for the expanded detail panel.
const EXPANDED_MARKER: &str = "▾ Details";

/// Pure data extracted from an error for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Short type name of the concrete error.
    pub title: String,
    /// The error's display message.
    pub message: String,
    /// The full cause chain, one cause per line.
    pub detail: String,
}

impl ErrorReport {
    /// Build a report from a concrete error.
    ///
    /// The title is the error's unqualified type name; the detail section
    /// lists the error followed by each `source()` in the chain.
    #[must_use]
    pub fn from_error<E: Error>(err: &E) -> Self {
        let mut detail = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            detail.push_str(&format!("\nCaused by: {cause}"));
            source = cause.source();
        }
        Self {
            title: short_type_name::<E>().to_string(),
            message: err.to_string(),
            detail,
        }
    }
}

/// Unqualified name of `E`, without module path or generic arguments.
fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Renders an [`ErrorReport`] with a collapsible detail panel.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    report: ErrorReport,
    expanded: bool,
}

impl ErrorDialog {
    /// Create a dialog with the detail panel collapsed.
    #[must_use]
    pub fn new(report: ErrorReport) -> Self {
        Self {
            report,
            expanded: false,
        }
    }

    /// The underlying report.
    #[must_use]
    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    /// Whether the detail panel is open.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the detail panel open or closed.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Render the dialog body.
    ///
    /// Collapsed, the detail panel is a single marker line; expanded, the
    /// marker is followed by the full cause chain.
    #[must_use]
    pub fn render(&self) -> String {
        let rule = "─".repeat(UnicodeWidthStr::width(self.report.title.as_str()).max(1));
        let mut out = format!("{}\n{}\n{}\n\n", self.report.title, rule, self.report.message);
        if self.expanded {
            out.push_str(EXPANDED_MARKER);
            out.push('\n');
            out.push_str(&self.report.detail);
            out.push('\n');
        } else {
            out.push_str(COLLAPSED_MARKER);
            out.push('\n');
        }
        out
    }

    /// Present the dialog on `pane` via the UI queue. Fire-and-forget.
    pub fn open(&self, pane: &TextPane, ui: &UiHandle) {
        let text = self.render();
        let pane = pane.clone();
        ui.post(move || pane.set_text(&text));
    }
}

/// Convenience: report `err` on `pane` with the detail panel collapsed.
pub fn open_error<E: Error>(err: &E, pane: &TextPane, ui: &UiHandle) {
    ErrorDialog::new(ErrorReport::from_error(err)).open(pane, ui);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_surface::UiQueue;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("could not load settings")]
    struct SettingsError {
        #[source]
        cause: std::io::Error,
    }

    fn sample() -> SettingsError {
        SettingsError {
            cause: std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml missing"),
        }
    }

    #[test]
    fn report_title_is_short_type_name() {
        let report = ErrorReport::from_error(&sample());
        assert_eq!(report.title, "SettingsError");
    }

    #[test]
    fn report_detail_lists_cause_chain() {
        let report = ErrorReport::from_error(&sample());
        assert_eq!(
            report.detail,
            "could not load settings\nCaused by: settings.toml missing"
        );
    }

    #[test]
    fn collapsed_render_hides_detail() {
        let dialog = ErrorDialog::new(ErrorReport::from_error(&sample()));
        let out = dialog.render();
        assert!(out.contains("SettingsError"));
        assert!(out.contains("could not load settings"));
        assert!(out.contains(COLLAPSED_MARKER));
        assert!(!out.contains("Caused by:"));
    }

    #[test]
    fn expanded_render_shows_cause_chain() {
        let mut dialog = ErrorDialog::new(ErrorReport::from_error(&sample()));
        dialog.toggle_expanded();
        let out = dialog.render();
        assert!(out.contains(EXPANDED_MARKER));
        assert!(out.contains("Caused by: settings.toml missing"));
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut dialog = ErrorDialog::new(ErrorReport::from_error(&sample()));
        assert!(!dialog.is_expanded());
        dialog.toggle_expanded();
        assert!(dialog.is_expanded());
        dialog.toggle_expanded();
        assert!(!dialog.is_expanded());
    }

    #[test]
    fn open_presents_on_pane() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        open_error(&sample(), &pane, &queue.handle());
        queue.shutdown();

        let text = pane.text();
        assert!(text.starts_with("SettingsError\n"));
        assert!(text.contains("could not load settings"));
    }

    #[test]
    fn error_without_source_has_single_line_detail() {
        let err = std::io::Error::other("flat");
        let report = ErrorReport::from_error(&err);
        assert_eq!(report.detail, "flat");
        assert_eq!(report.title, "Error");
    }
}
