//! Last-write-wins debouncing on the tokio timer

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the most recent action once no new call arrived for `delay`.
///
/// Every call aborts the pending timer task and bumps a generation counter;
/// a timer that already woke up checks the counter before running, so a
/// superseded action never fires. Once the check passes the action runs on
/// its own task, so later calls and `cancel` cannot interrupt it. Must be
/// used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action`, replacing whatever was scheduled before.
    pub fn call<F, Fut>(&self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // no await between the check and the spawn, so abort cannot land in between
            if latest.load(Ordering::SeqCst) == generation {
                tokio::spawn(action());
            }
        });

        if let Some(previous) = self.slot().replace(handle) {
            previous.abort();
        }
    }

    /// Drop the pending action, if any. An action that already started keeps running.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = self.slot().take() {
            previous.abort();
        }
    }

    /// Whether an action is waiting for its quiet period to end
    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().map_or(false, |h| !h.is_finished())
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn record(debouncer: &Debouncer, log: &Arc<Mutex<Vec<&'static str>>>, value: &'static str) {
        let log = Arc::clone(log);
        debouncer.call(move || async move {
            log.lock().unwrap().push(value);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let log = recorder();

        for value in ["l", "le", "lee"] {
            record(&debouncer, &log, value);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(log.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(*log.lock().unwrap(), vec!["lee"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_separated_by_quiet_period_all_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let log = recorder();

        record(&debouncer, &log, "first");
        tokio::time::sleep(Duration::from_millis(350)).await;
        record(&debouncer, &log, "second");
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_action() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let log = recorder();

        record(&debouncer, &log, "never");
        assert!(debouncer.is_pending());
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(log.lock().unwrap().is_empty());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_action_survives_later_calls() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let log = recorder();

        let slow = Arc::clone(&log);
        debouncer.call(move || async move {
            slow.lock().unwrap().push("started");
            tokio::time::sleep(Duration::from_millis(50)).await;
            slow.lock().unwrap().push("finished");
        });
        tokio::time::sleep(Duration::from_millis(310)).await;
        assert_eq!(*log.lock().unwrap(), vec!["started"]);

        record(&debouncer, &log, "next");
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(*log.lock().unwrap(), vec!["started", "finished"]);
    }
}
