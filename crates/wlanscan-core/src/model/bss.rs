// ── BSS (physical radio observation) types ──

use serde::Serialize;
use std::sync::Arc;
use strum::{Display, EnumIter};

use super::identity::{Bssid, NetworkIdentifier};
use super::interface::InterfaceConnectionInfo;
use crate::native::codes::{
    DOT11_BSS_TYPE_ANY, DOT11_BSS_TYPE_INDEPENDENT, DOT11_BSS_TYPE_INFRASTRUCTURE,
};

/// BSS network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BssType {
    /// Access-point based network.
    Infrastructure,
    /// Ad hoc (peer-to-peer) network.
    Independent,
    /// Wildcard used by scan filters.
    Any,
}

impl BssType {
    pub fn from_native_code(code: u32) -> Option<Self> {
        match code {
            DOT11_BSS_TYPE_INFRASTRUCTURE => Some(Self::Infrastructure),
            DOT11_BSS_TYPE_INDEPENDENT => Some(Self::Independent),
            DOT11_BSS_TYPE_ANY => Some(Self::Any),
            _ => None,
        }
    }

    pub fn native_code(self) -> u32 {
        match self {
            Self::Infrastructure => DOT11_BSS_TYPE_INFRASTRUCTURE,
            Self::Independent => DOT11_BSS_TYPE_INDEPENDENT,
            Self::Any => DOT11_BSS_TYPE_ANY,
        }
    }
}

/// A single BSS observed during a scan: one access point (or ad hoc cell)
/// on one channel.
///
/// Several observations may share an SSID; `AvailableNetworkGroupPack`
/// collects them under one logical network.
#[derive(Debug, Clone, Serialize)]
pub struct BssNetworkPack {
    #[serde(skip)]
    pub interface: Arc<InterfaceConnectionInfo>,
    pub ssid: NetworkIdentifier,
    pub bss_type: BssType,
    pub bssid: Bssid,
    /// Received signal strength (dBm).
    pub rssi: i32,
    /// Link quality (0-100).
    pub link_quality: u8,
    /// Center frequency (kHz).
    pub frequency: u32,
    /// Frequency band (GHz).
    pub band: f32,
    pub channel: u32,
}
