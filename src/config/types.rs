//! Configuration type definitions

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::domain::ports::LineSink;
use crate::domain::value_objects::LoggerContext;
use crate::error::{PerflogError, PerflogResult};
use crate::infrastructure::sinks::{FileLineSink, WriterLineSink};

use super::loader::{self, ConfigWarning};

/// Static identifiers written into every result line
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContextConfig {
    #[serde(default)]
    pub daemon_id: i32,

    #[serde(default)]
    pub process_id: i32,

    #[serde(default)]
    pub layer: String,

    #[serde(default)]
    pub operation: String,

    #[serde(default)]
    pub target: String,

    /// Host name written before the address; the local host name when
    /// neither this nor `local_address` is set
    #[serde(default)]
    pub host_name: Option<String>,

    /// IP address; resolved from the host name when unset
    #[serde(default)]
    pub local_address: Option<String>,

    /// `+HHMM`, `-HHMM`, `+HH:MM` or `Z`; the local offset when unset
    #[serde(default)]
    pub utc_offset: Option<String>,
}

/// Where result lines are written
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Result file; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    /// Create the configured sink (not opened yet)
    pub fn create_sink(&self) -> Box<dyn LineSink + Send> {
        match &self.path {
            Some(path) => Box::new(FileLineSink::new(path)),
            None => Box::new(WriterLineSink::stdout()),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PerflogResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PerflogResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PERFLOG_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build the logger context for one worker thread
    pub fn context(&self, thread_id: i32) -> PerflogResult<LoggerContext> {
        let ctx = &self.context;
        let mut builder = LoggerContext::builder()
            .daemon_id(ctx.daemon_id)
            .process_id(ctx.process_id)
            .thread_id(thread_id)
            .layer(ctx.layer.as_str())
            .operation(ctx.operation.as_str())
            .target(ctx.target.as_str());

        if let Some(host) = &ctx.host_name {
            builder = builder.host_name(host.trim());
        }

        if let Some(address) = &ctx.local_address {
            let parsed: IpAddr =
                address
                    .trim()
                    .parse()
                    .map_err(|_| PerflogError::InvalidAddress {
                        value: address.clone(),
                    })?;
            builder = builder.local_address(parsed);
        }

        if let Some(offset) = &ctx.utc_offset {
            builder = builder.utc_offset(parse_utc_offset(offset)?);
        }

        Ok(builder.build())
    }
}

/// Parse `Z`, `+HHMM`, `-HHMM` or `+HH:MM` into a fixed offset
pub fn parse_utc_offset(value: &str) -> PerflogResult<FixedOffset> {
    let invalid = || PerflogError::InvalidOffset {
        value: value.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    // HHMM or HH:MM
    let (hh, mm) = match rest.as_bytes() {
        [_, _, _, _] => (rest.get(..2), rest.get(2..)),
        [_, _, b':', _, _] => (rest.get(..2), rest.get(3..)),
        _ => return Err(invalid()),
    };
    let (hh, mm) = hh.zip(mm).ok_or_else(invalid)?;
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = hh.parse().map_err(|_| invalid())?;
    let minutes: i32 = mm.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
