//! Shared in-memory writer for inspecting sink output in tests.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable writer appending everything to one shared buffer.
///
/// Clones write to the same buffer, so a test can hand one clone to a
/// [`Sink`](super::Sink) and keep another to read the bytes back.
#[derive(Clone, Default)]
pub(crate) struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
