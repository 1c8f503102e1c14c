//! # toastr - Transient Notification Center
//!
//! A small notification system for terminal front-ends: short-lived,
//! auto-dismissing messages ("toasts") collected in a shared center that a
//! view layer can snapshot and render.
//!
//! ## Key Features
//! - Push/dismiss with stable string identifiers
//! - Deferred auto-dismissal on a Tokio runtime, or synchronous sweeping
//! - Bounded visible set with oldest-first eviction
//! - Configurable timing and capacity
//! - Clean API for event-system integration

pub mod center;
pub mod config;
pub mod error;
pub mod item;

// Re-export main types for easy use
pub use center::ToastCenter;
pub use config::ToastConfig;
pub use error::{ToastError, ToastResult};
pub use item::{Toast, ToastId, ToastLevel};
