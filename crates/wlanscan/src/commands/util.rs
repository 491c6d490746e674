//! Shared helpers for command handlers.

use std::io::{self, Read};
use std::path::Path;

use tracing::info;

use wlanscan_core::{NetworkIdentifier, ScanOptions, ScanSnapshot};

use crate::error::CliError;

/// Read and ingest a snapshot from `path`, or from stdin when `path` is `-`.
pub fn load_snapshot(path: &Path, options: &ScanOptions) -> Result<ScanSnapshot, CliError> {
    let shown = path.display().to_string();
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CliError::SnapshotNotFound {
                    path: shown.clone(),
                }
            } else {
                CliError::Io(e)
            }
        })?
    };

    let snapshot = ScanSnapshot::from_json(&json, options)
        .map_err(|source| CliError::invalid_snapshot(shown.as_str(), source))?;
    if snapshot.skipped() > 0 {
        info!(
            path = %shown,
            skipped = snapshot.skipped(),
            "some snapshot records were skipped"
        );
    }
    Ok(snapshot)
}

/// Display form of an SSID for table cells.
pub fn ssid_cell(ssid: &NetworkIdentifier) -> String {
    if ssid.is_hidden() {
        "<hidden>".into()
    } else {
        ssid.to_string()
    }
}

/// Band in GHz, or `-` when unknown.
pub fn band_cell(band: f32) -> String {
    if band > 0.0 {
        format!("{band} GHz")
    } else {
        "-".into()
    }
}

/// Value or `-` when zero.
pub fn nonzero_cell(value: u32) -> String {
    if value == 0 {
        "-".into()
    } else {
        value.to_string()
    }
}
