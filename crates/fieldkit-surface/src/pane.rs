//! Shared text pane with a disposed flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared interior for [`TextPane`].
struct PaneShared {
    text: Mutex<String>,
    disposed: AtomicBool,
}

/// A cheaply cloneable handle to a shared block of display text.
///
/// Stands in for a toolkit's append-only text widget. All handles cloned from
/// the same pane see the same text. Once [`dispose`](TextPane::dispose) has
/// been called, every mutation becomes a silent no-op and [`text`](TextPane::text)
/// returns an empty string — disposed-widget operations are defensive
/// short-circuits, not errors.
#[derive(Clone)]
pub struct TextPane {
    inner: Arc<PaneShared>,
}

impl TextPane {
    /// Create an empty pane.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PaneShared {
                text: Mutex::new(String::new()),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.inner
            .text
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Append text to the pane. No-op if disposed.
    pub fn append(&self, text: &str) {
        if self.is_disposed() {
            return;
        }
        self.lock().push_str(text);
    }

    /// Replace the entire pane content. No-op if disposed.
    pub fn set_text(&self, text: &str) {
        if self.is_disposed() {
            return;
        }
        let mut current = self.lock();
        current.clear();
        current.push_str(text);
    }

    /// Blank the pane. No-op if disposed.
    pub fn clear(&self) {
        if self.is_disposed() {
            return;
        }
        self.lock().clear();
    }

    /// Current pane content; empty if disposed.
    #[must_use]
    pub fn text(&self) -> String {
        if self.is_disposed() {
            return String::new();
        }
        self.lock().clone()
    }

    /// Tear the pane down. All subsequent mutations are silent no-ops.
    ///
    /// Affects every handle cloned from this pane.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::Release);
    }

    /// Whether the pane has been torn down.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }
}

impl Default for TextPane {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPane")
            .field("disposed", &self.is_disposed())
            .field("len", &self.text().len())
            .finish()
    }
}
