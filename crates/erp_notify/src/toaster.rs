use crate::reducer::{reduce, ToastAction};
use erp_settings::ErpConfig;
use erp_types::{Toast, ToastUpdate, ToastVariant};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    AutoDismiss,
    Remove,
}

#[derive(Default)]
struct ToasterState {
    toasts: Vec<Toast>,
    // at most one pending timer per toast id
    timers: HashMap<String, (TimerKind, JoinHandle<()>)>,
}

struct ToasterInner {
    state: Mutex<ToasterState>,
    sender: watch::Sender<Vec<Toast>>,
    counter: AtomicU64,
    limit: usize,
    duration: Duration,
    remove_delay: Duration,
}

/// Toast store owned by the application shell. Clones share the same state.
#[derive(Clone)]
pub struct Toaster {
    inner: Arc<ToasterInner>,
}

/// Handle returned for a freshly created toast
#[derive(Clone)]
pub struct ToastHandle {
    pub id: String,
    toaster: Toaster,
}

impl ToastHandle {
    pub fn dismiss(&self) {
        self.toaster.dismiss(Some(&self.id));
    }

    pub fn update(&self, update: ToastUpdate) {
        self.toaster.update(&self.id, update);
    }
}

impl Toaster {
    pub fn new(limit: usize, duration: Duration, remove_delay: Duration) -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(ToasterInner {
                state: Mutex::new(ToasterState::default()),
                sender,
                counter: AtomicU64::new(0),
                limit,
                duration,
                remove_delay,
            }),
        }
    }

    pub fn from_config(config: &ErpConfig) -> Self {
        Self::new(
            config.toast_limit,
            config.toast_duration(),
            config.toast_remove_delay(),
        )
    }

    fn lock(&self) -> MutexGuard<'_, ToasterState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_id(&self) -> String {
        (self.inner.counter.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }

    /// Current toasts, newest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    /// Receive every new toast list
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.sender.subscribe()
    }

    fn dispatch(&self, action: ToastAction) {
        let mut state = self.lock();
        self.apply(&mut state, &action);
    }

    fn apply(&self, state: &mut ToasterState, action: &ToastAction) {
        state.toasts = reduce(&state.toasts, action, self.inner.limit);

        // drop timers of toasts that left the list
        let live: Vec<String> = state.toasts.iter().map(|t| t.id.clone()).collect();
        state.timers.retain(|id, (_, handle)| {
            let keep = live.contains(id);
            if !keep {
                handle.abort();
            }
            keep
        });

        self.inner.sender.send_replace(state.toasts.clone());
    }

    pub fn toast(&self, title: &str, description: Option<&str>, variant: ToastVariant) -> ToastHandle {
        let id = self.next_id();
        let toast = Toast {
            id: id.clone(),
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            variant,
            open: true,
        };

        let mut state = self.lock();
        self.apply(&mut state, &ToastAction::Add(toast));
        if state.toasts.iter().any(|t| t.id == id) {
            self.schedule(&mut state, &id, TimerKind::AutoDismiss, self.inner.duration);
        }
        drop(state);

        debug!("Toast {} added: {}", id, title);
        ToastHandle {
            id,
            toaster: self.clone(),
        }
    }

    pub fn success(&self, title: &str, description: &str) -> ToastHandle {
        self.toast(title, Some(description), ToastVariant::Default)
    }

    pub fn error(&self, title: &str, description: &str) -> ToastHandle {
        self.toast(title, Some(description), ToastVariant::Destructive)
    }

    pub fn update(&self, id: &str, update: ToastUpdate) {
        self.dispatch(ToastAction::Update {
            id: id.to_string(),
            update,
        });
    }

    /// Close one toast (or all with `None`) and queue its removal
    pub fn dismiss(&self, id: Option<&str>) {
        let mut state = self.lock();

        let targets: Vec<String> = match id {
            Some(id) => vec![id.to_string()],
            None => state.toasts.iter().map(|t| t.id.clone()).collect(),
        };

        for target in &targets {
            let already_queued = matches!(
                state.timers.get(target),
                Some((TimerKind::Remove, _))
            );
            if !already_queued {
                self.schedule(&mut state, target, TimerKind::Remove, self.inner.remove_delay);
            }
        }

        self.apply(&mut state, &ToastAction::Dismiss(id.map(|s| s.to_string())));
    }

    /// Drop one toast (or all with `None`) immediately
    pub fn remove(&self, id: Option<&str>) {
        self.dispatch(ToastAction::Remove(id.map(|s| s.to_string())));
    }

    fn schedule(&self, state: &mut ToasterState, id: &str, kind: TimerKind, delay: Duration) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No runtime available, toast {} will not expire", id);
                return;
            }
        };

        let toaster = self.clone();
        let toast_id = id.to_string();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            toaster.fire(&toast_id, kind);
        });

        if let Some((_, previous)) = state.timers.insert(id.to_string(), (kind, handle)) {
            previous.abort();
        }
    }

    fn fire(&self, id: &str, kind: TimerKind) {
        let mut state = self.lock();

        // a newer timer replaced this one
        let current = state.timers.get(id).map(|(current, _)| *current);
        if current != Some(kind) {
            return;
        }
        state.timers.remove(id);

        match kind {
            TimerKind::AutoDismiss => {
                drop(state);
                self.dismiss(Some(id));
            }
            TimerKind::Remove => {
                self.apply(&mut state, &ToastAction::Remove(Some(id.to_string())));
            }
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.lock().timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toaster(limit: usize) -> Toaster {
        Toaster::new(
            limit,
            Duration::from_millis(5000),
            Duration::from_millis(1000),
        )
    }

    #[tokio::test]
    async fn test_limit_holds_with_default_config() {
        let toaster = Toaster::from_config(&ErpConfig::in_memory());
        for i in 0..5 {
            toaster.success("Saved", &format!("record {}", i));
            assert_eq!(toaster.toasts().len(), 1);
        }
        assert_eq!(toaster.toasts()[0].description.as_deref(), Some("record 4"));
        // timers of truncated toasts are cleared
        assert_eq!(toaster.pending_timers(), 1);
    }

    #[tokio::test]
    async fn test_ids_increase() {
        let toaster = toaster(3);
        let a = toaster.success("a", "a");
        let b = toaster.success("b", "b");
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_then_remove_after_delay() {
        let toaster = toaster(1);
        let handle = toaster.error("Error", "Name is required");

        handle.dismiss();
        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert!(!toasts[0].open);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(toaster.toasts().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(toaster.toasts().is_empty());
        assert_eq!(toaster.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_all() {
        let toaster = toaster(3);
        for name in ["a", "b", "c"] {
            toaster.success("Saved", name);
        }
        assert_eq!(toaster.pending_timers(), 3);

        toaster.dismiss(None);
        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 3);
        assert!(toasts.iter().all(|t| !t.open));
        // each auto-dismiss timer was swapped for a removal timer
        assert_eq!(toaster.pending_timers(), 3);

        // dismissing again does not re-arm the removal
        tokio::time::sleep(Duration::from_millis(500)).await;
        toaster.dismiss(None);

        tokio::time::sleep(Duration::from_millis(501)).await;
        tokio::task::yield_now().await;
        assert!(toaster.toasts().is_empty());
        assert_eq!(toaster.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss() {
        let toaster = toaster(1);
        toaster.success("Saved", "Vehicle saved");

        tokio::time::sleep(Duration::from_millis(5001)).await;
        tokio::task::yield_now().await;
        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert!(!toasts[0].open);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        tokio::task::yield_now().await;
        assert!(toaster.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_clears_auto_dismiss() {
        let toaster = toaster(1);
        let handle = toaster.success("Saved", "Vehicle saved");
        handle.dismiss();

        // removal fires at 1000ms, well before the auto-dismiss would have
        tokio::time::sleep(Duration::from_millis(1001)).await;
        tokio::task::yield_now().await;
        assert!(toaster.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_subscribe() {
        let toaster = toaster(1);
        let mut receiver = toaster.subscribe();

        let handle = toaster.success("Processing", "Payroll");
        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update()[0].title, "Processing");

        handle.update(ToastUpdate {
            title: Some("Done".to_string()),
            ..Default::default()
        });
        assert_eq!(receiver.borrow_and_update()[0].title, "Done");

        toaster.remove(None);
        assert!(receiver.borrow_and_update().is_empty());
        assert_eq!(toaster.pending_timers(), 0);
    }

    #[test]
    fn test_without_runtime() {
        let toaster = toaster(1);
        let handle = toaster.success("Saved", "no runtime");
        handle.dismiss();
        assert!(!toaster.toasts()[0].open);
        assert_eq!(toaster.pending_timers(), 0);
    }
}
