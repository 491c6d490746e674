// ── Scan options ──
//
// Filters applied when a snapshot is ingested. Built by the CLI from its
// config file and flags; core never reads config files.

use serde::{Deserialize, Serialize};

/// Which available networks to keep from a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Drop networks whose signal quality is below this value (0-100).
    pub min_signal_quality: u8,
    /// Keep networks the driver reports as not connectable.
    pub include_unconnectable: bool,
    /// Keep networks that broadcast an empty SSID.
    pub include_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_signal_quality: 0,
            include_unconnectable: true,
            include_hidden: true,
        }
    }
}

impl ScanOptions {
    pub(crate) fn keeps(&self, signal_quality: u8, connectable: bool, hidden: bool) -> bool {
        signal_quality >= self.min_signal_quality
            && (connectable || self.include_unconnectable)
            && (!hidden || self.include_hidden)
    }
}
