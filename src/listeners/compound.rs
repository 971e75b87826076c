//! # Compound listener: ordered fan-out with error short-circuiting.
//!
//! [`Compound`] notifies an ordered child sequence. Install and reset reach
//! every child unconditionally; the error path stops at the first child that
//! declares the error handled. Child order is therefore load-bearing: a
//! stream-writing child placed after a suppressing child never sees the
//! error.
//!
//! ## Error fan-out
//! ```text
//! on_error(h, t, e)
//!   ├─► child[0].on_error(h, t, e) ── Some ─► child[1].on_error(h, t, e) ── Some ─► ...
//!   │            │                                    │
//!   │           None                                 None
//!   │            ▼                                    ▼
//!   │          None                                 None       (later children skipped)
//!   └─ sequence exhausted ─► Some(last child's verdict)
//! ```
//!
//! Every child sees the *original* error, never a prior child's verdict. A
//! panicking child aborts the fan-out; nothing is caught or retried.

use std::fmt::Display;
use std::sync::Arc;

use crate::error::InstallError;

use super::InstallListener;

/// Ordered, immutable sequence of child listeners notified as one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    listeners: Vec<InstallListener>,
}

impl Compound {
    /// Creates a compound over the given children.
    ///
    /// Order is preserved and significant. An empty sequence behaves like a
    /// no-op listener.
    pub fn new(listeners: Vec<InstallListener>) -> Self {
        Self { listeners }
    }

    /// The child sequence, in notification order.
    #[inline]
    pub fn listeners(&self) -> &[InstallListener] {
        &self.listeners
    }

    /// Number of children.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if there are no children.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Notifies every child of the installation, in order, unconditionally.
    pub fn on_install<I, T>(&self, instrumentation: &I, transformer: &T)
    where
        I: Display,
        T: Display,
    {
        for listener in &self.listeners {
            listener.on_install(instrumentation, transformer);
        }
    }

    /// Offers the error to each child, in order, until one handles it.
    ///
    /// Every child receives the original error. The first `None` verdict
    /// ends the fan-out and is returned; otherwise the last child's verdict
    /// wins, or the original error when there are no children.
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
        let mut verdict = Arc::clone(&error);
        for listener in &self.listeners {
            match listener.on_error(instrumentation, transformer, Arc::clone(&error)) {
                Some(unhandled) => verdict = unhandled,
                None => return None,
            }
        }
        Some(verdict)
    }

    /// Notifies every child of the reset, in order, unconditionally.
    pub fn on_reset<I, T>(&self, instrumentation: &I, transformer: &T)
    where
        I: Display,
        T: Display,
    {
        for listener in &self.listeners {
            listener.on_reset(instrumentation, transformer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::capture::CaptureWriter;
    use crate::listeners::Sink;

    use std::io::{self, Write};

    use parking_lot::Mutex;

    type TagLog = Arc<Mutex<Vec<(&'static str, Vec<u8>)>>>;

    /// Writer that records which child produced each chunk of output.
    struct TagWriter {
        tag: &'static str,
        log: TagLog,
    }

    impl Write for TagWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.log.lock().push((self.tag, buf.to_vec()));
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Two stream listeners tagging their writes into one shared log.
    fn tagged_pair() -> (InstallListener, InstallListener, TagLog) {
        let log: TagLog = Arc::new(Mutex::new(Vec::new()));
        let a = InstallListener::stream(Sink::shared(TagWriter {
            tag: "a",
            log: Arc::clone(&log),
        }));
        let b = InstallListener::stream(Sink::shared(TagWriter {
            tag: "b",
            log: Arc::clone(&log),
        }));
        (a, b, log)
    }

    /// Collapses consecutive chunks into the sequence of writing children.
    fn tag_order(log: &TagLog) -> Vec<&'static str> {
        let mut order = Vec::new();
        for (tag, _) in log.lock().iter() {
            if order.last() != Some(tag) {
                order.push(*tag);
            }
        }
        order
    }

    /// Everything one child wrote, reassembled.
    fn text_for(log: &TagLog, wanted: &str) -> String {
        let mut bytes = Vec::new();
        for (tag, chunk) in log.lock().iter() {
            if *tag == wanted {
                bytes.extend_from_slice(chunk);
            }
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn attach_error() -> Arc<InstallError> {
        Arc::new(InstallError::Attach {
            reason: "boom".into(),
        })
    }

    #[test]
    fn test_install_notifies_children_in_order_exactly_once() {
        let (a, b, log) = tagged_pair();
        let compound = Compound::new(vec![a, b]);

        compound.on_install(&"session", &"tracer");

        assert_eq!(tag_order(&log), ["a", "b"]);
        assert_eq!(text_for(&log, "a"), "[Byte Buddy] INSTALL tracer on session\n");
        assert_eq!(text_for(&log, "b"), "[Byte Buddy] INSTALL tracer on session\n");
    }

    #[test]
    fn test_reset_notifies_children_in_order_exactly_once() {
        let (a, b, log) = tagged_pair();
        let compound = Compound::new(vec![a, b]);

        compound.on_reset(&"session", &"tracer");

        assert_eq!(tag_order(&log), ["a", "b"]);
        assert_eq!(text_for(&log, "a"), "[Byte Buddy] RESET tracer on session\n");
        assert_eq!(text_for(&log, "b"), "[Byte Buddy] RESET tracer on session\n");
    }

    #[test]
    fn test_error_reaches_every_child_when_none_handles() {
        let (a, b, log) = tagged_pair();
        let compound = Compound::new(vec![a, b]);
        let error = attach_error();

        let verdict = compound.on_error(&"session", &"tracer", Arc::clone(&error));

        assert!(matches!(verdict, Some(v) if Arc::ptr_eq(&v, &error)));
        assert_eq!(tag_order(&log), ["a", "b"]);
    }

    #[test]
    fn test_error_short_circuits_after_first_handler() {
        let capture = CaptureWriter::new();
        let compound = Compound::new(vec![
            InstallListener::ErrorSuppressing,
            InstallListener::stream(Sink::shared(capture.clone())),
        ]);

        let verdict = compound.on_error(&"session", &"tracer", attach_error());

        assert!(verdict.is_none());
        // The writer sits behind the suppressor and never saw the error.
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn test_writer_before_suppressor_still_reports() {
        let capture = CaptureWriter::new();
        let compound = Compound::new(vec![
            InstallListener::stream(Sink::shared(capture.clone())),
            InstallListener::ErrorSuppressing,
        ]);

        let verdict = compound.on_error(&"session", &"tracer", attach_error());

        assert!(verdict.is_none());
        assert_eq!(
            capture.contents(),
            "[Byte Buddy] ERROR tracer on session\n\
             transformer attach failed: boom\n"
        );
    }

    #[test]
    fn test_empty_compound_returns_the_original_error() {
        let compound = Compound::default();
        assert!(compound.is_empty());
        assert_eq!(compound.len(), 0);

        let error = attach_error();
        let verdict = compound.on_error(&"session", &"tracer", Arc::clone(&error));
        assert!(matches!(verdict, Some(v) if Arc::ptr_eq(&v, &error)));
    }

    #[test]
    fn test_nested_compound_notifies_grandchildren() {
        let capture = CaptureWriter::new();
        let sink = Sink::shared(capture.clone());
        let leaf = InstallListener::stream(sink);
        let nested = InstallListener::compound(vec![
            InstallListener::compound(vec![leaf.clone()]),
            leaf,
        ]);

        nested.on_install(&"session", &"tracer");

        assert_eq!(capture.contents().lines().count(), 2);
    }

    #[test]
    fn test_compounds_compare_by_child_sequence() {
        let sink = Sink::shared(CaptureWriter::new());
        let a = InstallListener::stream(sink.clone());
        let b = InstallListener::to_stderr();

        assert_eq!(
            Compound::new(vec![a.clone(), b.clone()]),
            Compound::new(vec![a.clone(), b.clone()])
        );
        assert_ne!(
            Compound::new(vec![a.clone(), b.clone()]),
            Compound::new(vec![b, a])
        );
    }
}
