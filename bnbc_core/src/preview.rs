//! # Live Preview Timer
//!
//! Periodic report regeneration as an explicit, cancellable task.
//!
//! [`LivePreview`] owns at most one background [`RepeatingTask`].
//! Enabling it is idempotent: any running task is stopped before the
//! new one starts, so intervals never stack. Disabling joins the worker
//! thread, so no refresh can fire after `disable()` returns.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Auto-refresh period matching the report preview cadence
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Handle to a background task running a closure on a fixed interval.
///
/// Dropping or stopping the handle cancels the task; `stop()` joins the
/// worker so the closure is guaranteed not to run again afterwards.
pub struct RepeatingTask {
    cancel: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl RepeatingTask {
    /// Spawn a task running `tick` every `interval` until stopped.
    ///
    /// The first tick fires after one full interval, not immediately.
    pub fn spawn<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel, cancelled) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match cancelled.recv_timeout(interval) {
                // Cancelled, or the handle was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => tick(),
            }
        });
        RepeatingTask {
            cancel,
            handle: Some(handle),
        }
    }

    /// Stop the task and wait for the worker to exit.
    pub fn stop(mut self) {
        self.stop_inner();
    }

    fn stop_inner(&mut self) {
        // Send may fail if the worker already exited; join regardless
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.stop_inner();
    }
}

/// Toggleable live preview owning an optional repeating task.
#[derive(Default)]
pub struct LivePreview {
    task: Option<RepeatingTask>,
}

impl LivePreview {
    pub fn new() -> Self {
        LivePreview { task: None }
    }

    /// Start refreshing at [`DEFAULT_REFRESH_INTERVAL`].
    pub fn enable<F>(&mut self, refresh: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.enable_with_interval(DEFAULT_REFRESH_INTERVAL, refresh);
    }

    /// Start refreshing at the given interval.
    ///
    /// Idempotent against re-enable: a running task is stopped first,
    /// so at most one refresh loop exists at a time.
    pub fn enable_with_interval<F>(&mut self, interval: Duration, refresh: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.disable();
        self.task = Some(RepeatingTask::spawn(interval, refresh));
    }

    /// Stop the refresh loop.
    ///
    /// Joins the worker thread: once this returns, no further refresh
    /// will fire. Calling it while already disabled is a no-op.
    pub fn disable(&mut self) {
        if let Some(task) = self.task.take() {
            task.stop();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for LivePreview {
    fn drop(&mut self) {
        self.disable();
    }
}
