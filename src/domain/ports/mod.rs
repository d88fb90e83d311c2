//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod line_sink;
pub mod result_logger;

pub use line_sink::LineSink;
pub use result_logger::ResultLogger;
