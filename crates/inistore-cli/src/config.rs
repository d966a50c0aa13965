//! TOML configuration for the `inistore` tool itself.
//!
//! Looked up in this order:
//! 1. `--config <PATH>` or `$INISTORE_CONFIG` (the file must exist).
//! 2. The platform config directory (a missing file means "use defaults"):
//!    - Windows:  `%APPDATA%\inistore\config.toml`
//!    - Linux:    `$XDG_CONFIG_HOME/inistore/config.toml` or `~/.config/inistore/config.toml`
//!    - macOS:    `~/Library/Application Support/inistore/config.toml`
//!
//! ```toml
//! [store]
//! comment_chars = "#;"
//! case_sensitive = false
//! search_comments = true
//!
//! [logging]
//! log_level = "warn"
//! ```
//!
//! Every field has a `#[serde(default = ...)]`, so partial files and files
//! written by older versions keep working.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to every document the tool opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Comment characters; the first one is used when commenting lines out.
    #[serde(default = "default_comment_chars")]
    pub comment_chars: String,
    /// Default key matching; `--case-sensitive` / `--case-insensitive` override it.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Let `set` revive commented-out entries (overridable per call).
    #[serde(default = "default_true")]
    pub search_comments: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_comment_chars() -> String {
    inistore_core::document::pattern::DEFAULT_COMMENT_CHARS.to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            comment_chars: default_comment_chars(),
            case_sensitive: false,
            search_comments: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the default config file path.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads the tool configuration.
///
/// An `explicit` path must exist.  Without one, the platform default is used
/// and a missing file (or an undeterminable config directory) yields
/// [`ToolConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return parse_config(&content);
    }

    let Ok(path) = config_file_path() else {
        return Ok(ToolConfig::default());
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ToolConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Parses TOML text into a [`ToolConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed.
pub fn parse_config(content: &str) -> Result<ToolConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Resolves the platform config base directory including the `inistore` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("inistore"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("inistore"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("inistore")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
