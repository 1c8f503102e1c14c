use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ToastError, ToastResult};

/// Timing and capacity settings for a [`ToastCenter`](crate::ToastCenter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Default lifetime applied by `notify` to toasts that carry none.
    #[serde(with = "humantime_serde")]
    pub auto_dismiss: Duration,

    /// Maximum number of simultaneously live toasts; oldest evicted beyond.
    pub max_visible: usize,

    /// Schedule deferred dismissal tasks when a Tokio runtime is available.
    /// Hosts without a runtime poll `sweep_expired` instead.
    pub schedule_dismissal: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_dismiss: Duration::from_secs(5),
            max_visible: 8,
            schedule_dismissal: true,
        }
    }
}

impl ToastConfig {
    pub fn validate(&self) -> ToastResult<()> {
        if self.max_visible == 0 {
            return Err(ToastError::InvalidConfig(
                "max_visible must be greater than 0".to_string(),
            ));
        }

        if self.auto_dismiss.is_zero() {
            return Err(ToastError::InvalidConfig(
                "auto_dismiss must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
