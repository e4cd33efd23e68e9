//! Cooperative signal-driven shutdown

use anyhow::Result;
use crossbeam::channel::{bounded, Receiver, Sender};
use log::info;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Shared termination flag with a wake-up channel.
///
/// The loop checks the flag between iterations and parks on the channel
/// while sleeping, so a request made mid-sleep interrupts the wait instead
/// of burning the rest of the interval.
#[derive(Clone)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (wake_tx, wake_rx) = bounded(1);
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            wake_tx,
            wake_rx,
        }
    }

    /// Mark the loop for termination and wake it if it is sleeping.
    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
        // A full buffer means a wake-up is already pending
        let _ = self.wake_tx.try_send(());
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleep for up to `timeout`, returning early when termination has
    /// been requested.
    pub fn wait(&self, timeout: Duration) {
        if self.is_cancelled() {
            return;
        }
        let _ = self.wake_rx.recv_timeout(timeout);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Route SIGINT and SIGTERM to a cooperative shutdown request.
///
/// The handler thread only flips the flag and sends the wake-up; all
/// hardware cleanup stays on the loop thread.
pub fn install_signal_handler(shutdown: Shutdown) -> Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;

    thread::Builder::new()
        .name("signal-handler".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                info!("Received signal {}, shutting down", signal);
                shutdown.request();
            }
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_request_sets_flag() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_cancelled());

        shutdown.request();
        assert!(shutdown.is_cancelled());

        // Requesting again stays cancelled and never blocks
        shutdown.request();
        assert!(shutdown.is_cancelled());
    }

    #[test]
    fn test_wait_expires_without_request() {
        let shutdown = Shutdown::new();
        let start = Instant::now();
        shutdown.wait(Duration::from_millis(20));

        assert!(start.elapsed() >= Duration::from_millis(20));
        assert!(!shutdown.is_cancelled());
    }

    #[test]
    fn test_wait_wakes_on_request_from_other_thread() {
        let shutdown = Shutdown::new();
        let remote = shutdown.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            remote.request();
        });

        let start = Instant::now();
        shutdown.wait(Duration::from_secs(30));
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(shutdown.is_cancelled());

        handle.join().unwrap();
    }

    #[test]
    fn test_wait_returns_immediately_when_already_cancelled() {
        let shutdown = Shutdown::new();
        shutdown.request();

        let start = Instant::now();
        shutdown.wait(Duration::from_secs(30));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
