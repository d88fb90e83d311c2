//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PerflogError, PerflogResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "perflog.toml";

/// Non-fatal configuration warning (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PerflogResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PerflogResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PerflogError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            suggestion = warning.suggestion.as_deref().unwrap_or(""),
            "unknown configuration key"
        );
    }

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    load_or_default_with(project_root, |key| std::env::var(key).ok())
}

/// [`load_or_default`] with overrides taken from `lookup`
pub(crate) fn load_or_default_with(
    project_root: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                return apply_overrides(config, lookup);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
            }
        }
    }

    apply_overrides(Config::default(), lookup)
}

/// Apply environment variable overrides (PERFLOG_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`, keyed by PERFLOG_* variable name
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    let ctx = &mut config.context;

    if let Some(id) = lookup("PERFLOG_DAEMON_ID").and_then(|v| parse_id("PERFLOG_DAEMON_ID", &v)) {
        ctx.daemon_id = id;
    }
    if let Some(id) = lookup("PERFLOG_PROCESS_ID").and_then(|v| parse_id("PERFLOG_PROCESS_ID", &v))
    {
        ctx.process_id = id;
    }
    if let Some(layer) = lookup("PERFLOG_LAYER") {
        ctx.layer = layer;
    }
    if let Some(operation) = lookup("PERFLOG_OPERATION") {
        ctx.operation = operation;
    }
    if let Some(target) = lookup("PERFLOG_TARGET") {
        ctx.target = target;
    }
    if let Some(host) = lookup("PERFLOG_HOST_NAME") {
        ctx.host_name = Some(host);
    }
    if let Some(address) = lookup("PERFLOG_LOCAL_ADDRESS") {
        ctx.local_address = Some(address);
    }
    if let Some(offset) = lookup("PERFLOG_UTC_OFFSET") {
        ctx.utc_offset = Some(offset);
    }

    // PERFLOG_OUTPUT: a file path, or "-" / "stdout" for stdout
    if let Some(output) = lookup("PERFLOG_OUTPUT") {
        config.output.path = match output.trim() {
            "" | "-" | "stdout" => None,
            path => Some(PathBuf::from(path)),
        };
    }

    config
}

fn parse_id(key: &str, value: &str) -> Option<i32> {
    match value.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(key, value, "ignoring non-numeric id override");
            None
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("perflog/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "context",
        "daemon_id",
        "process_id",
        "layer",
        "operation",
        "target",
        "host_name",
        "local_address",
        "utc_offset",
        "output",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
