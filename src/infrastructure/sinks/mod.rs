//! Line Sink Implementations
//!
//! Provides concrete implementations of LineSink:
//! - FileLineSink: locked, auto-flushing result file
//! - WriterLineSink: stdout or any other `io::Write`
//! - SharedLineSink: mutex-guarded handle for multi-threaded writers

mod file;
mod shared;
mod writer;

pub use file::FileLineSink;
pub use shared::SharedLineSink;
pub use writer::WriterLineSink;
