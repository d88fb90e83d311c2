//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//!
//! ## Use Cases
//!
//! - `DefaultResultLogger` - Format a measurement event and write it to a sink

pub mod default_logger;

pub use default_logger::DefaultResultLogger;
