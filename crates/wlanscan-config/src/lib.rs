//! Configuration for the wlanscan CLI.
//!
//! TOML file + `WLANSCAN_*` environment, merged with figment, and
//! translation to `wlanscan_core::ScanOptions`. Core never reads config
//! files; it receives a pre-built `ScanOptions`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wlanscan_core::ScanOptions;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Output defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Scan filters.
    #[serde(default)]
    pub scan: ScanSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanSection {
    /// Minimum signal quality (0-100) for a network to be listed.
    ///
    /// Wider than the core type so out-of-range values reach validation.
    #[serde(default)]
    pub min_signal_quality: i64,

    #[serde(default = "default_true")]
    pub include_unconnectable: bool,

    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            min_signal_quality: 0,
            include_unconnectable: true,
            include_hidden: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Translate the scan section into core options.
    pub fn scan_options(&self) -> Result<ScanOptions, ConfigError> {
        let raw = self.scan.min_signal_quality;
        let min = u8::try_from(raw)
            .ok()
            .filter(|q| *q <= 100)
            .ok_or_else(|| ConfigError::Validation {
                field: "scan.min_signal_quality".into(),
                reason: format!("{raw} is outside 0-100"),
            })?;
        Ok(ScanOptions {
            min_signal_quality: min,
            include_unconnectable: self.scan.include_unconnectable,
            include_hidden: self.scan.include_hidden,
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "wlanscan", "wlanscan").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wlanscan");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path` + environment.
///
/// Nested keys use a double underscore in the environment, e.g.
/// `WLANSCAN_SCAN__MIN_SIGNAL_QUALITY=40`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("WLANSCAN_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
