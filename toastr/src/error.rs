use thiserror::Error;

pub type ToastResult<T> = Result<T, ToastError>;

/// Errors raised while configuring a notification center.
///
/// The hot path (`push`, `dismiss`, `sweep_expired`) is deliberately
/// infallible; only construction with a bad configuration can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToastError {
    #[error("invalid notification config: {0}")]
    InvalidConfig(String),
}
