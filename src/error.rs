//! Error types reported through installation listeners.
//!
//! [`InstallError`] is the failure value handed to the `on_error` hook. The
//! orchestrator wraps it in an [`Arc`](std::sync::Arc) so a compound fan-out
//! can show the very same error to every child listener and callers can
//! compare verdicts by pointer identity.

use thiserror::Error;

/// # Failures raised while installing, applying, or removing a transformer.
///
/// A listener receiving one of these decides whether the failure is handled
/// (suppressed) or propagated; see
/// [`InstallListener::on_error`](crate::InstallListener::on_error).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum InstallError {
    /// The instrumentation session is gone or cannot accept transformers.
    #[error("instrumentation session unavailable: {reason}")]
    SessionUnavailable {
        /// Why the session refused to cooperate.
        reason: String,
    },

    /// Registering the transformer with the session failed.
    #[error("transformer attach failed: {reason}")]
    Attach {
        /// The underlying attach failure message.
        reason: String,
    },

    /// Re-instrumenting an already-loaded class failed.
    #[error("retransformation failed for {class}")]
    Retransform {
        /// Binary name of the class that could not be retransformed.
        class: String,
        /// The failure reported by the transform pipeline.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Removing the transformer or undoing its instrumentation failed.
    #[error("reset failed: {reason}")]
    Reset {
        /// The underlying reset failure message.
        reason: String,
    },
}

impl InstallError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            InstallError::SessionUnavailable { .. } => "session_unavailable",
            InstallError::Attach { .. } => "attach_failed",
            InstallError::Retransform { .. } => "retransform_failed",
            InstallError::Reset { .. } => "reset_failed",
        }
    }
}
