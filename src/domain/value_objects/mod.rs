//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod extra_arg;
mod logger_context;
mod time_interval;

pub use extra_arg::ExtraArg;
pub use logger_context::{LoggerContext, LoggerContextBuilder};
pub use time_interval::{format_millis, TimeInterval};
