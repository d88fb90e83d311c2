//! Configuration module for perflog
//!
//! Configuration hierarchy:
//! 1. Environment variables (PERFLOG_*) (highest priority)
//! 2. Project config (perflog.toml)
//! 3. User config (~/.config/perflog/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{parse_utc_offset, Config, ContextConfig, OutputConfig};
