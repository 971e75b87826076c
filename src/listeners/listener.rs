//! # The installation listener contract and its strategy set.
//!
//! [`InstallListener`] is the value an agent orchestrator notifies when a
//! class-file transformer is installed on a session, fails while being
//! installed or applied, or is reset. The strategy set is closed:
//!
//! - [`InstallListener::NoOp`] ignores every notification
//! - [`InstallListener::ErrorSuppressing`] marks every error as handled
//! - [`InstallListener::Stream`] writes one line per notification
//! - [`InstallListener::Compound`] fans out to an ordered child sequence
//!
//! The session handle and the transformer are opaque to every strategy; they
//! are passed through by shared reference and rendered, at most, via their
//! `Display` form.
//!
//! ## Error verdicts
//! `on_error` returns `Some(error)` to keep the failure alive for the
//! caller's own escalation, or `None` once the error is handled. Suppression
//! is always an explicit decision by a specific listener, auditable by
//! checking which one returned `None`.

use std::fmt::Display;
use std::sync::Arc;

use crate::error::InstallError;

use super::{Compound, Sink, StreamWriter};

/// A notification strategy for transformer installation lifecycle events.
///
/// Values are immutable after construction and cheap to clone; clones of a
/// stream-writing listener keep reporting to the same sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallListener {
    /// Ignores every notification and leaves errors unhandled.
    NoOp,
    /// Ignores install and reset, and marks every error as handled.
    ErrorSuppressing,
    /// Writes one formatted line per notification to a sink.
    Stream(StreamWriter),
    /// Ordered fan-out over child listeners.
    Compound(Compound),
}

impl Default for InstallListener {
    /// Returns [`InstallListener::NoOp`].
    fn default() -> Self {
        InstallListener::NoOp
    }
}

impl InstallListener {
    /// Stream-writing listener bound to the process standard output.
    pub fn to_stdout() -> Self {
        InstallListener::Stream(StreamWriter::stdout())
    }

    /// Stream-writing listener bound to the process standard error.
    pub fn to_stderr() -> Self {
        InstallListener::Stream(StreamWriter::stderr())
    }

    /// Stream-writing listener bound to the given sink.
    pub fn stream(sink: Sink) -> Self {
        InstallListener::Stream(StreamWriter::new(sink))
    }

    /// Ordered fan-out over the given children.
    pub fn compound(listeners: Vec<InstallListener>) -> Self {
        InstallListener::Compound(Compound::new(listeners))
    }

    /// Notifies that the transformer was installed on the session.
    pub fn on_install<I, T>(&self, instrumentation: &I, transformer: &T)
    where
        I: Display,
        T: Display,
    {
        match self {
            InstallListener::NoOp | InstallListener::ErrorSuppressing => {}
            InstallListener::Stream(writer) => writer.on_install(instrumentation, transformer),
            InstallListener::Compound(compound) => {
                compound.on_install(instrumentation, transformer);
            }
        }
    }

    /// Notifies that installing or applying the transformer failed.
    ///
    /// Returns `None` when this listener handled the error; the caller must
    /// then take no further escalation action. A `Some` verdict carries the
    /// error to keep propagating, normally the very value passed in.
    pub fn on_error<I, T>(
        &self,
        instrumentation: &I,
        transformer: &T,
        error: Arc<InstallError>,
    ) -> Option<Arc<InstallError>>
    where
        I: Display,
        T: Display,
    {
        match self {
            InstallListener::NoOp => Some(error),
            InstallListener::ErrorSuppressing => None,
            InstallListener::Stream(writer) => {
                writer.on_error(instrumentation, transformer, error)
            }
            InstallListener::Compound(compound) => {
                compound.on_error(instrumentation, transformer, error)
            }
        }
    }

    /// Notifies that the transformer was deregistered and its effect undone.
    pub fn on_reset<I, T>(&self, instrumentation: &I, transformer: &T)
    where
        I: Display,
        T: Display,
    {
        match self {
            InstallListener::NoOp | InstallListener::ErrorSuppressing => {}
            InstallListener::Stream(writer) => writer.on_reset(instrumentation, transformer),
            InstallListener::Compound(compound) => {
                compound.on_reset(instrumentation, transformer);
            }
        }
    }
}

impl From<StreamWriter> for InstallListener {
    fn from(writer: StreamWriter) -> Self {
        InstallListener::Stream(writer)
    }
}

impl From<Compound> for InstallListener {
    fn from(compound: Compound) -> Self {
        InstallListener::Compound(compound)
    }
}
