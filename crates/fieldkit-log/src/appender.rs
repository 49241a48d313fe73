//! The text-pane appender.
//!
//! # Concurrency
//!
//! One mutex guards the buffer, threshold, style, and pane attachment, so
//! concurrent producers serialize on append and a replay never iterates the
//! buffer while another thread is appending to it. Rendered text is computed
//! under the lock; only the finished string travels to the UI queue.

use std::sync::{Mutex, MutexGuard};

use log::{Level, LevelFilter};

use fieldkit_surface::{TextPane, UiHandle};

use crate::record::LogRecord;
use crate::style::LogStyle;

struct AppenderInner {
    records: Vec<LogRecord>,
    threshold: LevelFilter,
    style: LogStyle,
    pane: Option<TextPane>,
    ui: Option<UiHandle>,
}

impl AppenderInner {
    fn passes(&self, level: Level) -> bool {
        level <= self.threshold
    }

    /// The pane, if one is attached and not torn down.
    fn live_pane(&self) -> Option<&TextPane> {
        self.pane.as_ref().filter(|pane| !pane.is_disposed())
    }

    /// Render every buffered record passing the current threshold, in
    /// arrival order, under the current style.
    fn synthesize(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            if self.passes(record.level) {
                out.push_str(&self.style.format(record));
            }
        }
        out
    }

    /// Push the full re-rendering to the pane, replacing its content.
    fn replay(&self) {
        let Some(pane) = self.live_pane() else {
            return;
        };
        let Some(ui) = self.ui.as_ref() else {
            return;
        };
        let text = self.synthesize();
        tracing::debug!(
            buffered = self.records.len(),
            rendered_bytes = text.len(),
            "replaying log buffer onto pane"
        );
        let pane = pane.clone();
        ui.post(move || pane.set_text(&text));
    }
}

/// Buffering appender that renders log records onto a [`TextPane`].
///
/// Every record is buffered regardless of severity; the threshold gates only
/// what gets rendered. Changing the threshold or style replays the entire
/// buffer under the new settings. With no pane attached the appender still
/// buffers, and [`log_text`](Self::log_text) synthesizes the rendering on
/// demand, so log retrieval works with no UI at all.
pub struct TextPaneAppender {
    inner: Mutex<AppenderInner>,
}

impl TextPaneAppender {
    /// Create a detached appender that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AppenderInner {
                records: Vec::new(),
                threshold: LevelFilter::Trace,
                style: LogStyle::Simple,
                pane: None,
                ui: None,
            }),
        }
    }

    /// Create an appender already attached to a pane and UI queue.
    #[must_use]
    pub fn attached(pane: TextPane, ui: UiHandle) -> Self {
        let appender = Self::new();
        appender.attach_pane(pane, ui);
        appender
    }

    fn lock(&self) -> MutexGuard<'_, AppenderInner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Attach (or swap) the display pane and its UI queue handle.
    pub fn attach_pane(&self, pane: TextPane, ui: UiHandle) {
        let mut inner = self.lock();
        inner.pane = Some(pane);
        inner.ui = Some(ui);
    }

    /// Detach the display pane. Buffering continues.
    pub fn detach_pane(&self) {
        let mut inner = self.lock();
        inner.pane = None;
        inner.ui = None;
    }

    /// Buffer a record and, if it passes the current threshold, post its
    /// rendering to the pane.
    ///
    /// The buffer append and the render decision happen under one lock, so
    /// concurrent producers serialize and pane output order matches buffer
    /// order.
    pub fn append(&self, record: LogRecord) {
        let mut inner = self.lock();
        let render = inner.passes(record.level);
        if render
            && let Some(pane) = inner.live_pane()
            && let Some(ui) = inner.ui.as_ref()
        {
            let text = inner.style.format(&record);
            let pane = pane.clone();
            ui.post(move || pane.append(&text));
        }
        inner.records.push(record);
    }

    /// Current threshold.
    #[must_use]
    pub fn threshold(&self) -> LevelFilter {
        self.lock().threshold
    }

    /// Change the severity threshold, then replay the buffer under it.
    pub fn set_threshold(&self, threshold: LevelFilter) {
        let mut inner = self.lock();
        inner.threshold = threshold;
        inner.replay();
    }

    /// Active style.
    #[must_use]
    pub fn style(&self) -> LogStyle {
        self.lock().style
    }

    /// Switch the rendering style, then replay the buffer under it.
    pub fn set_style(&self, style: LogStyle) {
        let mut inner = self.lock();
        inner.style = style;
        inner.replay();
    }

    /// Switch styles by name; unrecognized names select the simple style.
    pub fn set_style_name(&self, name: &str) {
        self.set_style(LogStyle::from_name(name));
    }

    /// Blank the pane and drop every buffered record.
    pub fn clear(&self) {
        let mut inner = self.lock();
        tracing::debug!(dropped = inner.records.len(), "clearing log buffer");
        if let Some(pane) = inner.live_pane()
            && let Some(ui) = inner.ui.as_ref()
        {
            let pane = pane.clone();
            ui.post(move || pane.clear());
        }
        inner.records.clear();
    }

    /// The log under the current threshold and style.
    ///
    /// With a live pane attached this is the pane's current text; otherwise
    /// the string is synthesized from the buffer, so retrieval works with no
    /// UI attached or after the pane is torn down.
    #[must_use]
    pub fn log_text(&self) -> String {
        let inner = self.lock();
        match inner.live_pane() {
            Some(pane) => pane.text(),
            None => inner.synthesize(),
        }
    }

    /// Number of buffered records.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.lock().records.len()
    }
}

impl Default for TextPaneAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextPaneAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("TextPaneAppender")
            .field("buffered", &inner.records.len())
            .field("threshold", &inner.threshold)
            .field("style", &inner.style)
            .field("attached", &inner.pane.is_some())
            .finish()
    }
}

/// `log` facade integration: the framework-level severity check happens in
/// `enabled`, upstream of `append`, matching the buffer-everything policy
/// for records that reach the appender at all.
impl log::Log for TextPaneAppender {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            self.append(LogRecord::from_record(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_surface::UiQueue;
    use std::sync::Arc;

    fn rec(level: Level, message: &str) -> LogRecord {
        LogRecord::new(level, message).with_elapsed_ms(0)
    }

    fn seed(appender: &TextPaneAppender) {
        appender.append(rec(Level::Info, "a"));
        appender.append(rec(Level::Error, "b"));
        appender.append(rec(Level::Info, "c"));
    }

    #[test]
    fn detached_appender_buffers_and_synthesizes() {
        let appender = TextPaneAppender::new();
        seed(&appender);
        assert_eq!(appender.buffered(), 3);
        assert_eq!(
            appender.log_text(),
            "INFO  - a\nERROR - b\nINFO  - c\n"
        );
    }

    #[test]
    fn threshold_filters_synthesized_log() {
        let appender = TextPaneAppender::new();
        seed(&appender);
        appender.set_threshold(LevelFilter::Warn);
        // Only "b" survives a WARN threshold.
        assert_eq!(appender.log_text(), "ERROR - b\n");
        // Nothing was lost from the buffer itself.
        assert_eq!(appender.buffered(), 3);
    }

    #[test]
    fn lowering_threshold_recovers_buffered_records() {
        let appender = TextPaneAppender::new();
        appender.set_threshold(LevelFilter::Error);
        seed(&appender);
        assert_eq!(appender.log_text(), "ERROR - b\n");

        appender.set_threshold(LevelFilter::Trace);
        assert_eq!(
            appender.log_text(),
            "INFO  - a\nERROR - b\nINFO  - c\n"
        );
    }

    #[test]
    fn live_append_renders_onto_pane() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());

        seed(&appender);
        queue.shutdown();
        assert_eq!(pane.text(), "INFO  - a\nERROR - b\nINFO  - c\n");
    }

    #[test]
    fn append_below_threshold_buffers_without_rendering() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());
        appender.set_threshold(LevelFilter::Warn);

        appender.append(rec(Level::Debug, "quiet"));
        queue.shutdown();
        assert_eq!(pane.text(), "");
        assert_eq!(appender.buffered(), 1);
    }

    #[test]
    fn threshold_change_replays_pane() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());

        seed(&appender);
        appender.set_threshold(LevelFilter::Warn);
        queue.shutdown();
        assert_eq!(pane.text(), "ERROR - b\n");
    }

    #[test]
    fn style_change_replays_under_new_style() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());

        let mut record = rec(Level::Warn, "w");
        record.thread = "t".to_string();
        record.target = "app".to_string();
        appender.append(record);
        appender.set_style_name("Complex");
        queue.shutdown();
        assert_eq!(pane.text(), "0 [t] WARN  app (?:0) - w \n");
    }

    #[test]
    fn unknown_style_name_falls_back_to_simple() {
        let appender = TextPaneAppender::new();
        appender.set_style_name("Complex");
        appender.set_style_name("glitter");
        assert_eq!(appender.style(), LogStyle::Simple);
    }

    #[test]
    fn clear_empties_buffer_and_pane() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());

        seed(&appender);
        appender.clear();
        queue.shutdown();
        assert_eq!(pane.text(), "");
        assert_eq!(appender.buffered(), 0);
        assert_eq!(appender.log_text(), "");
    }

    #[test]
    fn log_text_parity_between_pane_and_synthesis() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());

        seed(&appender);
        queue.shutdown();
        let from_pane = appender.log_text();

        appender.detach_pane();
        let synthesized = appender.log_text();
        assert_eq!(from_pane, synthesized);
    }

    #[test]
    fn disposed_pane_falls_back_to_synthesis() {
        let queue = UiQueue::spawn();
        let pane = TextPane::new();
        let appender = TextPaneAppender::attached(pane.clone(), queue.handle());

        seed(&appender);
        queue.shutdown();
        pane.dispose();
        assert_eq!(
            appender.log_text(),
            "INFO  - a\nERROR - b\nINFO  - c\n"
        );
    }

    #[test]
    fn concurrent_producers_keep_buffer_consistent() {
        let appender = Arc::new(TextPaneAppender::new());
        let mut producers = Vec::new();
        for _ in 0..4 {
            let appender = Arc::clone(&appender);
            producers.push(std::thread::spawn(move || {
                for i in 0..100 {
                    appender.append(rec(Level::Info, &format!("m{i}")));
                }
            }));
        }
        for p in producers {
            p.join().unwrap();
        }
        assert_eq!(appender.buffered(), 400);
    }

    #[test]
    fn facade_log_respects_max_level() {
        let appender = TextPaneAppender::new();
        let record = log::Record::builder()
            .level(Level::Info)
            .target("app")
            .args(format_args!("hello"))
            .build();
        log::Log::log(&appender, &record);
        // log::max_level defaults to Off until a logger is installed.
        assert_eq!(appender.buffered(), 0);
    }
}
