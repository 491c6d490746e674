// ── Raw collaborator records ──
//
// Loosely typed scan data exactly as the platform layer hands it over:
// numeric codes, optional strings, unchecked ranges. Nothing here is
// validated; see `crate::convert`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SSID as reported by the driver: text, or raw bytes when it is not UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSsid {
    Text(String),
    Bytes(Vec<u8>),
}

impl RawSsid {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInterface {
    /// Interface GUID.
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// `WLAN_INTERFACE_STATE` code.
    pub state: u32,
    pub profile_name: Option<String>,
}

/// One entry of the driver's available-network list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAvailableNetwork {
    pub interface_id: String,
    pub ssid: RawSsid,
    /// `DOT11_BSS_TYPE` code.
    pub bss_type: u32,
    pub signal_quality: u32,
    #[serde(default)]
    pub security_enabled: bool,
    pub profile_name: Option<String>,
    #[serde(default = "default_connectable")]
    pub connectable: bool,
    pub not_connectable_reason: Option<String>,
    /// `DOT11_AUTH_ALGORITHM` code.
    pub auth_algorithm: u32,
    /// `DOT11_CIPHER_ALGORITHM` code.
    pub cipher_algorithm: u32,
}

fn default_connectable() -> bool {
    true
}

/// One entry of the driver's BSS list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBssEntry {
    pub interface_id: String,
    pub ssid: RawSsid,
    pub bss_type: u32,
    pub bssid: String,
    /// dBm.
    #[serde(default)]
    pub rssi: i32,
    pub link_quality: u32,
    /// kHz.
    pub frequency: u32,
    /// GHz; derived from the frequency when absent.
    pub band: Option<f32>,
    /// Derived from the frequency when absent.
    pub channel: Option<u32>,
}

/// Security section of a profile descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfileSecurity {
    pub authentication: String,
    pub encryption: String,
    pub key_type: Option<String>,
}

/// Everything the platform layer reported for one scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScanSnapshot {
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub interfaces: Vec<RawInterface>,
    #[serde(default)]
    pub available_networks: Vec<RawAvailableNetwork>,
    #[serde(default)]
    pub bss_entries: Vec<RawBssEntry>,
}
