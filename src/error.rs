//! Error types for perflog
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for perflog operations
pub type PerflogResult<T> = Result<T, PerflogError>;

/// Main error type for perflog operations
#[derive(Error, Debug)]
pub enum PerflogError {
    /// `open()` called on a sink that is already open
    #[error("sink already open: {sink}")]
    AlreadyOpen { sink: String },

    /// Another writer holds the result file
    #[error("result file {path} is locked by another writer")]
    Locked { path: PathBuf },

    /// A thread panicked while holding a shared sink
    #[error("shared sink lock poisoned")]
    SinkPoisoned,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Local address is not a valid IP address
    #[error("invalid local address '{value}'")]
    InvalidAddress { value: String },

    /// UTC offset is not in `+HHMM` / `-HHMM` form
    #[error("invalid UTC offset '{value}' - expected +HHMM or -HHMM")]
    InvalidOffset { value: String },
}
