//! CLI-side settings resolution.
//!
//! Combines the config file (via `wlanscan-config`) with global flags.
//! Flags win over the file; the file wins over built-in defaults.

use clap::ValueEnum;

use wlanscan_config::Config;
use wlanscan_core::ScanOptions;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use wlanscan_config::{config_path, load_config, save_config};

/// Effective output settings and scan filters for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub scan: ScanOptions,
}

impl Settings {
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(format) => format,
            None => parse_value::<OutputFormat>("defaults.output", &cfg.defaults.output)?,
        };
        let color_mode = match global.color {
            Some(mode) => mode,
            None => parse_value::<ColorMode>("defaults.color", &cfg.defaults.color)?,
        };

        let mut scan = cfg.scan_options()?;
        if let Some(min) = global.min_quality {
            scan.min_signal_quality = min;
        }
        if global.connectable_only {
            scan.include_unconnectable = false;
        }

        Ok(Self {
            output,
            color: crate::output::should_color(color_mode),
            quiet: global.quiet,
            scan,
        })
    }
}

fn parse_value<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
