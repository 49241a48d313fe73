#![forbid(unsafe_code)]

//! UI surface model: a shared text pane plus the task queue that owns it.
//!
//! Toolkit text widgets are single-thread-affine, so every mutation must be
//! marshaled onto the thread that owns the widget. This crate models that
//! arrangement without a real toolkit:
//!
//! - [`TextPane`]: a cheaply cloneable handle to a shared text model with a
//!   disposed flag. Mutations on a disposed pane are silent no-ops.
//! - [`UiQueue`]: a dedicated worker thread (the stand-in UI thread) that
//!   consumes boxed tasks over a channel in FIFO order. Its [`UiHandle`] is
//!   the execute-asynchronously-on-owning-thread primitive: `post` is
//!   fire-and-forget, with no completion signal and no cancellation.
//!
//! Core logic elsewhere in the workspace (buffering, filtering, replay) is
//! written against these two types and stays fully testable with no worker
//! running at all: a task posted to a shut-down queue is simply dropped.

pub mod pane;
pub mod queue;

pub use pane::TextPane;
pub use queue::{UiHandle, UiQueue};
