//! Shared console stream.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle to the process-wide console.
///
/// Every write goes through one mutex, so a block handed to [`Console::emit`]
/// reaches the stream in one piece.
#[derive(Clone)]
pub struct Console {
    out: SharedWriter,
}

impl Console {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Console backed by the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Console backed by an in-memory buffer, plus a handle to read it back.
    pub fn memory() -> (Self, MemorySink) {
        let sink = MemorySink::default();
        (Self::new(sink.clone()), sink)
    }

    /// Write a complete block of text atomically with respect to other emits.
    pub fn emit(&self, block: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(block.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }

    /// Announce the listening address and how to stop the server.
    pub fn banner(&self, address: &str) {
        self.emit(&format!(
            "Starting server on {address}\n\
             Server will log all incoming POST requests...\n\
             Press Ctrl+C to stop the server\n\n"
        ));
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// In-memory console target, readable after the fact.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
