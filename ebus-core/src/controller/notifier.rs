//! Notifier: trait abstraction for the user-visible acknowledgment path
//!
//! The fallback path and the acknowledgment seed handlers go through this
//! seam, so the dispatch core carries no opinion on how a notification is
//! shown. The toast-backed adapter is the production wiring; the log-only
//! one suits headless hosts.

use std::fmt::Debug;

use tracing::info;

use toastr::{Toast, ToastCenter, ToastConfig};

use crate::error::BusError;

/// Trait for surfacing a transient notification to the user.
pub trait Notifier: Send + Sync + Debug {
    fn notify(&self, toast: Toast);
}

/// Adapter pushing notifications into a [`ToastCenter`].
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    center: ToastCenter,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(center: ToastCenter) -> Self {
        Self { center }
    }

    /// Notifier over a fresh center built from `config`.
    pub fn from_config(config: ToastConfig) -> Result<Self, BusError> {
        Ok(Self {
            center: ToastCenter::with_config(config)?,
        })
    }

    #[must_use]
    pub fn center(&self) -> &ToastCenter {
        &self.center
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        self.center.notify(toast);
    }
}

/// Notifier that only writes a tracing line; for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        info!(
            title = %toast.title,
            level = toast.level.label(),
            "{}",
            toast.body
        );
    }
}
