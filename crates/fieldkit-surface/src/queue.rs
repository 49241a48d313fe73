//! Single-consumer UI task queue.
//!
//! [`UiQueue`] spawns one named worker thread that executes posted tasks in
//! FIFO order — the stand-in for a toolkit's UI thread. [`UiHandle`] is the
//! asynchronous post primitive handed to producers.
//!
//! # Delivery rules
//!
//! - Tasks from a single poster run in the order they were posted.
//! - `post` never blocks on task execution and returns no completion signal.
//! - Posting after shutdown is a silent no-op (the disposed-resource policy).
//! - `shutdown` drains every task already enqueued before the worker exits.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

/// A unit of work executed on the queue's worker thread.
type UiTask = Box<dyn FnOnce() + Send>;

enum QueueMsg {
    Run(UiTask),
    Shutdown,
}

/// Cloneable fire-and-forget posting handle for a [`UiQueue`].
#[derive(Clone)]
pub struct UiHandle {
    sender: mpsc::Sender<QueueMsg>,
}

impl UiHandle {
    /// Post a task for asynchronous execution on the owning thread.
    ///
    /// FIFO relative to this poster's earlier tasks. If the queue has shut
    /// down, the task is dropped silently.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        if self.sender.send(QueueMsg::Run(Box::new(task))).is_err() {
            tracing::trace!("ui task dropped: queue has shut down");
        }
    }
}

impl std::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle").finish_non_exhaustive()
    }
}

/// Owner of the worker thread consuming posted tasks.
///
/// Dropping the queue performs a best-effort shutdown; prefer calling
/// [`shutdown`](UiQueue::shutdown) explicitly so pending tasks are known to
/// have drained.
pub struct UiQueue {
    sender: mpsc::Sender<QueueMsg>,
    worker: Option<JoinHandle<()>>,
}

impl UiQueue {
    /// Spawn the worker thread and return the queue owner.
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<QueueMsg>();
        let worker = thread::Builder::new()
            .name("fieldkit-ui".into())
            .spawn(move || worker_loop(&rx))
            .expect("failed to spawn ui queue thread");
        Self {
            sender: tx,
            worker: Some(worker),
        }
    }

    /// A cloneable posting handle.
    #[must_use]
    pub fn handle(&self) -> UiHandle {
        UiHandle {
            sender: self.sender.clone(),
        }
    }

    /// Shut the queue down, draining tasks already enqueued, then join.
    pub fn shutdown(mut self) {
        let _ = self.sender.send(QueueMsg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for UiQueue {
    fn drop(&mut self) {
        let _ = self.sender.send(QueueMsg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl std::fmt::Debug for UiQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiQueue")
            .field("running", &self.worker.is_some())
            .finish()
    }
}

fn worker_loop(rx: &mpsc::Receiver<QueueMsg>) {
    loop {
        match rx.recv() {
            Ok(QueueMsg::Run(task)) => task(),
            Ok(QueueMsg::Shutdown) | Err(_) => {
                // Drain whatever was posted before the shutdown request.
                while let Ok(QueueMsg::Run(task)) = rx.try_recv() {
                    task();
                }
                tracing::debug!("ui queue worker exiting");
                return;
            }
        }
    }
}
