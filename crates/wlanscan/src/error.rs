//! CLI error types with miette diagnostics.
//!
//! Maps core and config failures into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

use wlanscan_config::ConfigError;
use wlanscan_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const DATA: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Snapshot input ───────────────────────────────────────────────
    #[error("Scan snapshot '{path}' not found")]
    #[diagnostic(
        code(wlanscan::snapshot_not_found),
        help("Pass the path of a JSON scan snapshot, or - to read it from stdin.")
    )]
    SnapshotNotFound { path: String },

    #[error("Scan snapshot '{path}' could not be parsed")]
    #[diagnostic(
        code(wlanscan::invalid_snapshot),
        help(
            "The snapshot must be a JSON object with interfaces,\n\
             available_networks and bss_entries."
        )
    )]
    InvalidSnapshot {
        path: String,
        #[source]
        source: CoreError,
    },

    // ── Lookups ──────────────────────────────────────────────────────
    #[error("No network with SSID '{ssid}' in the snapshot")]
    #[diagnostic(
        code(wlanscan::not_found),
        help("Run: wlanscan groups <SNAPSHOT> to see the networks it contains")
    )]
    NetworkNotFound { ssid: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wlanscan::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(wlanscan::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(
        code(wlanscan::config),
        help("Check the file printed by: wlanscan config path")
    )]
    Config(#[from] ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render {format} output: {reason}")]
    #[diagnostic(code(wlanscan::render))]
    Render { format: &'static str, reason: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SnapshotNotFound { .. } | Self::NetworkNotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidSnapshot { .. } => exit_code::DATA,
            Self::Validation { .. }
            | Self::Config(ConfigError::Validation { .. }) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    pub fn invalid_snapshot(path: impl Into<String>, source: CoreError) -> Self {
        Self::InvalidSnapshot {
            path: path.into(),
            source,
        }
    }
}
