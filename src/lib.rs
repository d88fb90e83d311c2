//! perflog - result logging for load-testing tools
//!
//! Formats measurement events (timings, identifiers, success/error status,
//! extra fields) into one quoted, semicolon-delimited line each and writes
//! them to a line sink.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::DefaultResultLogger;
pub use config::{Config, ConfigWarning};
pub use domain::entities::MeasurementEvent;
pub use domain::ports::{LineSink, ResultLogger};
pub use domain::value_objects::{ExtraArg, LoggerContext, TimeInterval};
pub use error::{PerflogError, PerflogResult};
pub use infrastructure::sinks::{FileLineSink, SharedLineSink, WriterLineSink};
