//! Domain Services
//!
//! Pure functions over domain types; no I/O.

pub mod line_format;

pub use line_format::{escape_field, format_timestamp, format_timestamp_local, LineBuilder, TIMESTAMP_FORMAT};
