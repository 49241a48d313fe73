#![forbid(unsafe_code)]

//! Log-to-text-pane bridge with a replay buffer.
//!
//! [`TextPaneAppender`] consumes records from the `log` facade (or direct
//! [`append`](TextPaneAppender::append) calls), buffers every record
//! unconditionally in arrival order, and renders onto a
//! [`TextPane`](fieldkit_surface::TextPane) through the UI task queue.
//!
//! The buffer-everything policy is deliberate: severity filtering gates only
//! the *render* decision, never the buffer, so changing the threshold or
//! style later can replay the full history under the new settings without
//! losing anything.
//!
//! # Invariants
//!
//! 1. Buffer order equals arrival order; the buffer is unbounded and cleared
//!    only by [`clear`](TextPaneAppender::clear).
//! 2. After `set_threshold(t)`, the pane shows exactly the records with
//!    severity at-or-above `t`, formatted under the active style, in arrival
//!    order. `set_style` replays identically under the new style.
//! 3. [`log_text`](TextPaneAppender::log_text) with a live pane returns the
//!    pane's text; without one it synthesizes the same string the replay
//!    would produce.
//! 4. All pane mutation is posted to the UI queue, never performed inline.

pub mod appender;
pub mod record;
pub mod style;

pub use appender::TextPaneAppender;
pub use record::LogRecord;
pub use style::{COMPLEX_NAME, LogStyle, SIMPLE_NAME};
