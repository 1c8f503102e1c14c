use std::time::Duration;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use nanoid::nanoid;
use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a toast when it is created.
pub type ToastId = CompactString;

/// Severity of a toast, drives styling and default timing in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ToastLevel {
    Info = 0,
    Success = 1,
    Warning = 2,
    Error = 3,
}

impl ToastLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub title: CompactString,
    pub body: String,
    pub level: ToastLevel,
    pub created_at: DateTime<Utc>,
    /// `None` means the toast stays until dismissed explicitly (or the
    /// center applies its configured default on `notify`).
    #[serde(with = "humantime_serde")]
    pub auto_dismiss: Option<Duration>,
}

impl Toast {
    pub fn new(
        title: impl Into<CompactString>,
        body: impl Into<String>,
        level: ToastLevel,
    ) -> Self {
        Self {
            id: CompactString::from(nanoid!(12)),
            title: title.into(),
            body: body.into(),
            level,
            created_at: Utc::now(),
            auto_dismiss: None,
        }
    }

    pub fn info(title: impl Into<CompactString>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Info)
    }

    pub fn success(title: impl Into<CompactString>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Success)
    }

    pub fn warning(title: impl Into<CompactString>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Warning)
    }

    pub fn error(title: impl Into<CompactString>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Error)
    }

    #[must_use]
    pub fn with_auto_dismiss(mut self, after: Duration) -> Self {
        self.auto_dismiss = Some(after);
        self
    }

    /// Whether the toast's auto-dismiss window has elapsed at `now`.
    ///
    /// Toasts without an auto-dismiss duration never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.auto_dismiss {
            Some(after) => match chrono::Duration::from_std(after) {
                Ok(after) => now.signed_duration_since(self.created_at) >= after,
                Err(_) => false,
            },
            None => false,
        }
    }
}
