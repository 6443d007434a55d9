//! Search input bound to the `query` URL parameter

use crate::debounce::Debouncer;
use crate::location::{next_location, Location, QUERY_PARAM};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

/// Quiet period used when none is configured
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Boundary to the router that owns the current location.
///
/// `replace` swaps the current history entry; it is fire and forget.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// The location currently displayed
    async fn current(&self) -> Location;

    /// Replace the current location
    async fn replace(&self, location: Location);
}

#[derive(Debug)]
struct NavigationState {
    current: Location,
    history: Vec<Location>,
}

/// In-process navigator that records every replacement
#[derive(Debug)]
pub struct MemoryNavigator {
    state: RwLock<NavigationState>,
}

impl MemoryNavigator {
    pub fn new(initial: Location) -> Self {
        Self {
            state: RwLock::new(NavigationState {
                current: initial,
                history: Vec::new(),
            }),
        }
    }

    /// Every location passed to `replace`, oldest first
    pub async fn history(&self) -> Vec<Location> {
        self.state.read().await.history.clone()
    }
}

#[async_trait]
impl Navigator for MemoryNavigator {
    async fn current(&self) -> Location {
        self.state.read().await.current.clone()
    }

    async fn replace(&self, location: Location) {
        let mut state = self.state.write().await;
        state.history.push(location.clone());
        state.current = location;
    }
}

/// Debounced search field.
///
/// Each keystroke restarts the quiet period; when it ends, the latest term
/// is written to the location through the navigator.
pub struct SearchControl<N: Navigator + 'static> {
    placeholder: String,
    navigator: Arc<N>,
    debouncer: Debouncer,
    pending_term: Arc<Mutex<Option<String>>>,
}

impl<N: Navigator + 'static> SearchControl<N> {
    pub fn new(placeholder: impl Into<String>, navigator: Arc<N>) -> Self {
        Self::with_delay(placeholder, navigator, DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(placeholder: impl Into<String>, navigator: Arc<N>, delay: Duration) -> Self {
        Self {
            placeholder: placeholder.into(),
            navigator,
            debouncer: Debouncer::new(delay),
            pending_term: Arc::new(Mutex::new(None)),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Initial field value: the current `query` parameter, or empty
    pub async fn default_value(&self) -> String {
        self.navigator
            .current()
            .await
            .params
            .get(QUERY_PARAM)
            .unwrap_or("")
            .to_string()
    }

    /// Handle a change of the field's text.
    pub fn on_input(&self, term: impl Into<String>) {
        let term = term.into();
        *lock(&self.pending_term) = Some(term.clone());

        let navigator = Arc::clone(&self.navigator);
        let pending = Arc::clone(&self.pending_term);
        self.debouncer.call(move || async move {
            {
                let mut slot = lock(&pending);
                if slot.as_deref() == Some(term.as_str()) {
                    slot.take();
                }
            }
            apply_search(navigator.as_ref(), &term).await;
        });
    }

    /// Apply the pending term now instead of waiting for the quiet period.
    pub async fn flush(&self) {
        self.debouncer.cancel();
        let term = lock(&self.pending_term).take();
        if let Some(term) = term {
            apply_search(self.navigator.as_ref(), &term).await;
        }
    }

    /// Drop the pending term without navigating.
    pub fn cancel(&self) {
        self.debouncer.cancel();
        lock(&self.pending_term).take();
    }

    pub fn has_pending(&self) -> bool {
        lock(&self.pending_term).is_some()
    }
}

async fn apply_search<N: Navigator + ?Sized>(navigator: &N, term: &str) {
    let current = navigator.current().await;
    let next = next_location(&current, term);
    log::debug!(target: "dashkit::search", "Search '{}' -> {}", term, next);
    navigator.replace(next).await;
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn control(url: &str) -> (SearchControl<MemoryNavigator>, Arc<MemoryNavigator>) {
        let navigator = Arc::new(MemoryNavigator::new(Location::parse(url).unwrap()));
        let control = SearchControl::new("Search invoices...", Arc::clone(&navigator));
        (control, navigator)
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_navigates_once_with_last_term() {
        let (search, navigator) = control("/dashboard/invoices?page=3");

        for term in ["d", "de", "del"] {
            search.on_input(term);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(navigator.history().await.is_empty());

        tokio::time::sleep(Duration::from_millis(400)).await;
        let history = navigator.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].to_string(), "/dashboard/invoices?page=1&query=del");
        assert!(!search.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_field_removes_query() {
        let (search, navigator) = control("/dashboard/invoices?query=delba&page=2");
        assert_eq!(search.default_value().await, "delba");

        search.on_input("");
        tokio::time::sleep(Duration::from_millis(301)).await;

        assert_eq!(navigator.current().await.to_string(), "/dashboard/invoices?page=1");
        assert_eq!(search.default_value().await, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_applies_immediately() {
        let (search, navigator) = control("/customers");
        search.on_input("evil");
        search.flush().await;

        assert_eq!(navigator.current().await.to_string(), "/customers?page=1&query=evil");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(navigator.history().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_location() {
        let (search, navigator) = control("/customers?page=2");
        search.on_input("amy");
        search.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(navigator.history().await.is_empty());
        assert_eq!(navigator.current().await.page(), Some(2));
    }

    /// Navigator whose `replace` takes a while, counting started and finished calls
    struct SlowNavigator {
        inner: MemoryNavigator,
        started: AtomicUsize,
        completed: AtomicUsize,
    }

    #[async_trait]
    impl Navigator for SlowNavigator {
        async fn current(&self) -> Location {
            self.inner.current().await
        }

        async fn replace(&self, location: Location) {
            self.started.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.inner.replace(location).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_during_navigation_does_not_interrupt_it() {
        let navigator = Arc::new(SlowNavigator {
            inner: MemoryNavigator::new(Location::parse("/inv?page=3").unwrap()),
            started: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        });
        let search = SearchControl::new("Search invoices...", Arc::clone(&navigator));

        search.on_input("paid");
        tokio::time::sleep(Duration::from_millis(310)).await;
        assert_eq!(navigator.started.load(Ordering::SeqCst), 1);

        search.on_input("paid x");
        search.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(navigator.completed.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.current().await.to_string(), "/inv?page=1&query=paid");
        assert_eq!(navigator.inner.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_placeholder() {
        let (search, _) = control("/");
        assert_eq!(search.placeholder(), "Search invoices...");
    }
}
