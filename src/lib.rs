//! # bytevisor
//!
//! **Bytevisor** is the notification core of a bytecode-instrumentation
//! agent: when an orchestrator installs a class-file transformer on a
//! running session, fails while installing or applying it, or resets the
//! instrumentation, it reports the event through an [`InstallListener`].
//!
//! The session handle and the transformer stay opaque. Listeners receive
//! them by shared reference, render them (at most) through their `Display`
//! form, and pass them through untouched.
//!
//! ## Architecture
//! ```text
//!   orchestrator (external)
//!        │ install / error / reset
//!        ▼
//!   InstallListener ──────┬───────────────────┬────────────────┬──────────────────┐
//!                         ▼                   ▼                ▼                  ▼
//!                       NoOp          ErrorSuppressing    Stream(Sink)        Compound
//!                    ignore all       errors → handled    one line per     ordered fan-out,
//!                                                         event + trace    stop at first
//!                                                                          handled error
//! ```
//!
//! ## Error verdicts
//! `on_error` returns `Some(error)` to keep the failure propagating, or
//! `None` once a listener has handled it. A [`Compound`] stops notifying
//! further children as soon as one child returns `None`, so child order
//! decides which diagnostics actually fire.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use bytevisor::{InstallError, InstallListener, ListenerBuilder};
//!
//! let listener = ListenerBuilder::new()
//!     .with(InstallListener::to_stderr())
//!     .with(InstallListener::ErrorSuppressing)
//!     .build();
//!
//! // The orchestrator drives the three hooks:
//! listener.on_install(&"session-7", &"http-tracer");
//!
//! let error = Arc::new(InstallError::Attach {
//!     reason: "duplicate transformer".to_string(),
//! });
//! // Reported on stderr, then handled by the suppressing child.
//! assert!(listener.on_error(&"session-7", &"http-tracer", error).is_none());
//!
//! listener.on_reset(&"session-7", &"http-tracer");
//! ```

mod error;
mod listeners;

// ---- Public re-exports ----

pub use error::InstallError;
pub use listeners::{Compound, InstallListener, ListenerBuilder, SharedWriter, Sink, StreamWriter};
