//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sinks/` - Line sink implementations (file, writer, shared)

pub mod sinks;

pub use sinks::{FileLineSink, SharedLineSink, WriterLineSink};
