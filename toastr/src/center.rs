use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::config::ToastConfig;
use crate::error::ToastResult;
use crate::item::{Toast, ToastId};

/// Shared center of live toasts.
///
/// Cloning is cheap and hands out another handle to the same center, so the
/// producer side (an event system) and the consumer side (a renderer) can
/// each hold one. Dismissal timers hold only a weak reference; a center
/// dropped by every handle takes its pending timers down with it.
#[derive(Debug, Clone)]
pub struct ToastCenter {
    inner: Arc<CenterInner>,
}

#[derive(Debug)]
struct CenterInner {
    config: ToastConfig,
    toasts: Mutex<Vec<Toast>>,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastCenter {
    /// Center with default timing and capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CenterInner {
                config: ToastConfig::default(),
                toasts: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Center with validated custom configuration.
    pub fn with_config(config: ToastConfig) -> ToastResult<Self> {
        config.validate()?;

        Ok(Self {
            inner: Arc::new(CenterInner {
                config,
                toasts: Mutex::new(Vec::new()),
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.inner.config
    }

    /// Adds a toast exactly as given and returns its id.
    ///
    /// Evicts the oldest toast when the visible set is full. When the toast
    /// carries an auto-dismiss duration, a deferred removal is scheduled.
    pub fn push(&self, toast: Toast) -> ToastId {
        let id = toast.id.clone();
        let auto_dismiss = toast.auto_dismiss;

        {
            let mut toasts = self.inner.toasts.lock();

            if toasts.len() >= self.inner.config.max_visible {
                let evicted = toasts.remove(0);
                debug!(id = %evicted.id, "evicted oldest toast to stay within capacity");
            }

            toasts.push(toast);
        }

        trace!(id = %id, "toast pushed");

        if let Some(after) = auto_dismiss {
            self.schedule_dismissal(id.clone(), after);
        }

        id
    }

    /// Adds a toast, applying the configured default lifetime to toasts
    /// that carry none. This is the entry point notification sinks use.
    pub fn notify(&self, mut toast: Toast) -> ToastId {
        if toast.auto_dismiss.is_none() {
            toast.auto_dismiss = Some(self.inner.config.auto_dismiss);
        }

        self.push(toast)
    }

    /// Removes a toast by id. Absent ids are a no-op and return `false`.
    pub fn dismiss(&self, id: &str) -> bool {
        let mut toasts = self.inner.toasts.lock();

        match toasts.iter().position(|toast| toast.id == id) {
            Some(pos) => {
                toasts.remove(pos);
                trace!(id, "toast dismissed");
                true
            }
            None => false,
        }
    }

    /// Synchronous expiry for hosts without an async runtime; returns the
    /// number of toasts removed.
    pub fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let mut toasts = self.inner.toasts.lock();
        let before = toasts.len();

        toasts.retain(|toast| !toast.is_expired(now));

        before - toasts.len()
    }

    /// Point-in-time snapshot of the live toasts, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Toast> {
        self.inner.toasts.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.toasts.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.toasts.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.toasts.lock().clear();
    }

    fn schedule_dismissal(&self, id: ToastId, after: Duration) {
        if !self.inner.config.schedule_dismissal {
            return;
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(id = %id, "no async runtime; toast expiry relies on sweep_expired");
            return;
        };

        let weak: Weak<CenterInner> = Arc::downgrade(&self.inner);

        handle.spawn(async move {
            tokio::time::sleep(after).await;

            // Center may be gone, or the toast already dismissed; both are no-ops.
            if let Some(inner) = weak.upgrade() {
                let mut toasts = inner.toasts.lock();

                if let Some(pos) = toasts.iter().position(|toast| toast.id == id) {
                    toasts.remove(pos);
                    trace!(id = %id, "toast auto-dismissed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ToastLevel;

    #[test]
    fn push_then_dismiss_removes_exactly_one() {
        let center = ToastCenter::new();

        let kept = center.push(Toast::info("Kept", "stays"));
        let dropped = center.push(Toast::info("Dropped", "goes"));

        assert!(center.dismiss(&dropped));
        assert_eq!(center.len(), 1);
        assert_eq!(center.active()[0].id, kept);
    }

    #[test]
    fn dismissing_unknown_id_is_a_noop() {
        let center = ToastCenter::new();
        center.push(Toast::info("Only", "toast"));

        assert!(!center.dismiss("no-such-id"));
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let config = ToastConfig {
            max_visible: 2,
            ..ToastConfig::default()
        };
        let center = ToastCenter::with_config(config).unwrap();

        center.push(Toast::info("A", "first"));
        center.push(Toast::info("B", "second"));
        center.push(Toast::info("C", "third"));

        let titles: Vec<_> = center
            .active()
            .iter()
            .map(|toast| toast.title.clone())
            .collect();

        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn notify_applies_default_lifetime() {
        let config = ToastConfig {
            schedule_dismissal: false,
            ..ToastConfig::default()
        };
        let center = ToastCenter::with_config(config).unwrap();

        center.notify(Toast::new("Hello", "world", ToastLevel::Info));

        let toast = &center.active()[0];
        assert_eq!(toast.auto_dismiss, Some(center.config().auto_dismiss));
    }

    #[test]
    fn sweep_removes_only_expired_toasts() {
        let config = ToastConfig {
            schedule_dismissal: false,
            ..ToastConfig::default()
        };
        let center = ToastCenter::with_config(config).unwrap();

        let mut stale = Toast::info("Old", "expired").with_auto_dismiss(Duration::from_secs(1));
        stale.created_at = Utc::now() - chrono::Duration::seconds(10);
        center.push(stale);
        center.push(Toast::info("Fresh", "sticks around"));

        assert_eq!(center.sweep_expired(), 1);
        assert_eq!(center.active()[0].title, "Fresh");
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_dismissal_fires_after_lifetime() {
        let center = ToastCenter::new();
        center.push(Toast::info("Going", "away").with_auto_dismiss(Duration::from_secs(5)));

        assert_eq!(center.len(), 1);

        tokio::time::sleep(Duration::from_secs(6)).await;

        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismissal_beats_the_timer() {
        let center = ToastCenter::new();
        let id = center.push(Toast::info("Race", "me").with_auto_dismiss(Duration::from_secs(5)));

        assert!(center.dismiss(&id));

        // Late timer must tolerate the toast being gone already.
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert!(center.is_empty());
    }
}
