//! Periodic wellness-break reminder.
//!
//! The reminder runs on its own thread and shares nothing with the entry
//! log. It is stopped explicitly with [`Reminder::stop`] or implicitly when
//! the handle is dropped.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default interval between two reminders.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(8 * 60 * 60);

pub const REMINDER_TEXT: &str =
    "Take a mental wellness break! Log your me-time or screen-free activity.";

pub struct Reminder {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Reminder {
    /// Spawn the reminder thread. With `fire_immediately` the callback runs
    /// once right away, then after every `interval`.
    pub fn start<F>(interval: Duration, fire_immediately: bool, callback: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            if fire_immediately {
                callback();
            }
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => callback(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::debug!("reminder thread stopped");
        });

        log::debug!("reminder started, interval {:?}", interval);

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop rescheduling and wait for the thread. Calling it again is a no-op.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // the thread may already be gone
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("reminder callback panicked");
        }
    }
}

impl Drop for Reminder {
    fn drop(&mut self) {
        self.stop();
    }
}
