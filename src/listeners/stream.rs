//! # Stream-writing listener and its output sink.
//!
//! [`StreamWriter`] renders every notification as one formatted line on a
//! [`Sink`]. It is the diagnostics strategy: place it before any suppressing
//! listener so the line is emitted before the error is declared handled.
//!
//! ## Output format
//! ```text
//! [Byte Buddy] INSTALL <transformer> on <handle>
//! [Byte Buddy] ERROR <transformer> on <handle>
//! <error display>
//! caused by: <source>
//! [Byte Buddy] RESET <transformer> on <handle>
//! ```
//!
//! ## Sink identity
//! [`Sink::Stdout`] and [`Sink::Stderr`] are the canonical process streams;
//! any two listeners bound to the same canonical stream compare equal. A
//! [`Sink::Shared`] writer compares equal only to clones of itself: equality
//! follows the `Arc`, not the bytes behind it.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::InstallError;

/// Caller-owned writer, shared by reference between listeners.
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Line-oriented write target for [`StreamWriter`].
#[derive(Clone)]
pub enum Sink {
    /// The process standard output stream.
    Stdout,
    /// The process standard error stream.
    Stderr,
    /// A caller-owned writer, shared by reference.
    Shared(SharedWriter),
}

impl Sink {
    /// Wraps a writer into a shared sink.
    ///
    /// Clone the returned sink (or the listener holding it) to point several
    /// listeners at the same writer. Wrapping the same writer a second time
    /// yields a distinct identity that compares unequal.
    pub fn shared<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Sink::Shared(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Runs `f` with exclusive access to the underlying writer.
    fn with(&self, f: impl FnOnce(&mut dyn Write)) {
        match self {
            Sink::Stdout => f(&mut io::stdout()),
            Sink::Stderr => f(&mut io::stderr()),
            Sink::Shared(writer) => {
                let mut guard = writer.lock();
                f(&mut **guard);
            }
        }
    }

    /// Writes one newline-terminated line.
    ///
    /// Write failures are discarded: a broken sink must never abort an
    /// installation.
    fn line(&self, args: fmt::Arguments<'_>) {
        self.with(|w| {
            let _ = writeln!(w, "{args}");
        });
    }

    /// Writes the error's display line followed by its cause chain.
    fn trace(&self, error: &InstallError) {
        self.with(|w| {
            let _ = writeln!(w, "{error}");
            let mut cause = std::error::Error::source(error);
            while let Some(source) = cause {
                let _ = writeln!(w, "caused by: {source}");
                cause = source.source();
            }
        });
    }
}

impl PartialEq for Sink {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sink::Stdout, Sink::Stdout) | (Sink::Stderr, Sink::Stderr) => true,
            (Sink::Shared(a), Sink::Shared(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Sink {}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Stderr => f.write_str("Stderr"),
            Sink::Shared(_) => f.write_str("Shared(..)"),
        }
    }
}

/// Listener strategy reporting every notification as a formatted line.
///
/// The transformer and the session handle are rendered through their
/// `Display` form and otherwise left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamWriter {
    sink: Sink,
}

impl StreamWriter {
    /// Creates a writer bound to the given sink.
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }

    /// Canonical writer bound to the process standard output.
    pub fn stdout() -> Self {
        Self::new(Sink::Stdout)
    }

    /// Canonical writer bound to the process standard error.
    pub fn stderr() -> Self {
        Self::new(Sink::Stderr)
    }

    /// Returns the sink this writer reports to.
    #[inline]
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Writes the `INSTALL` line for a freshly installed transformer.
    pub fn on_install<I, T>(&self, instrumentation: &I, transformer: &T)
    where
        I: Display,
        T: Display,
    {
        self.sink.line(format_args!(
            "[Byte Buddy] INSTALL {transformer} on {instrumentation}"
        ));
    }

    /// Writes the `ERROR` line and the error's trace, then hands the error
    /// back unchanged. This strategy never suppresses.
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
        self.sink.line(format_args!(
            "[Byte Buddy] ERROR {transformer} on {instrumentation}"
        ));
        self.sink.trace(&error);
        Some(error)
    }

    /// Writes the `RESET` line after the transformer was deregistered.
    pub fn on_reset<I, T>(&self, instrumentation: &I, transformer: &T)
    where
        I: Display,
        T: Display,
    {
        self.sink.line(format_args!(
            "[Byte Buddy] RESET {transformer} on {instrumentation}"
        ));
    }
}
