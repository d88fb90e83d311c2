//! Domain Layer
//!
//! Measurement types and the result line format, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `MeasurementEvent`
//! - `value_objects/` - `TimeInterval`, `ExtraArg`, `LoggerContext`
//! - `services/` - Line escaping and timestamp rendering
//! - `ports/` - `LineSink` and `ResultLogger` traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
