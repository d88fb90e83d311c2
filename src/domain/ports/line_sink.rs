//! Line sink port - where formatted result lines go
//!
//! Implementations own the actual I/O. A sink is used by one writer at a
//! time and does no locking of its own; wrap it in
//! `infrastructure::sinks::SharedLineSink` to share it between threads.

use crate::error::PerflogResult;

/// Abstract line writer
///
/// Implementations:
/// - `FileLineSink` - locked, auto-flushing result file
/// - `WriterLineSink` - any `io::Write` (stdout, memory buffer)
/// - `SharedLineSink` - mutex-guarded wrapper around another sink
pub trait LineSink {
    /// Acquire the underlying resource.
    ///
    /// Opening a sink that is already open fails with
    /// `PerflogError::AlreadyOpen`.
    fn open(&mut self) -> PerflogResult<()>;

    /// Write one line and flush it before returning.
    ///
    /// Opens the sink first if it is not open yet.
    fn write_line(&mut self, line: &str) -> PerflogResult<()>;

    /// Release the underlying resource. No-op on a sink that was never opened.
    fn close(&mut self) -> PerflogResult<()>;
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn open(&mut self) -> PerflogResult<()> {
        (**self).open()
    }

    fn write_line(&mut self, line: &str) -> PerflogResult<()> {
        (**self).write_line(line)
    }

    fn close(&mut self) -> PerflogResult<()> {
        (**self).close()
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn open(&mut self) -> PerflogResult<()> {
        (**self).open()
    }

    fn write_line(&mut self, line: &str) -> PerflogResult<()> {
        (**self).write_line(line)
    }

    fn close(&mut self) -> PerflogResult<()> {
        (**self).close()
    }
}
