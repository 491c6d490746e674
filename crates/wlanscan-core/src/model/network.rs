// ── Available network records ──
//
// One record per logical network (SSID + BSS type + profile association).
// Records are built once from validated input and never change afterwards;
// the only live value is `is_connected`, read through the shared interface.

use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::ops::Deref;
use std::sync::Arc;

use super::bss::{BssNetworkPack, BssType};
use super::identity::NetworkIdentifier;
use super::interface::InterfaceConnectionInfo;
use super::security::{AuthenticationMethod, EncryptionType};

/// Whether a network can be connected to, and if not, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectability {
    Connectable,
    NotConnectable { reason: String },
}

impl Connectability {
    pub fn is_connectable(&self) -> bool {
        matches!(self, Self::Connectable)
    }
}

/// Validated input for [`AvailableNetworkPack`].
///
/// Produced by the boundary conversion (see [`crate::convert`]), which is the
/// only place raw driver codes are classified. The record constructors take
/// these values as-is.
#[derive(Debug, Clone)]
pub struct AvailableNetworkInfo {
    pub interface: Arc<InterfaceConnectionInfo>,
    pub ssid: NetworkIdentifier,
    pub bss_type: BssType,
    /// Signal quality (0-100).
    pub signal_quality: u8,
    pub security_enabled: bool,
    pub profile_name: Option<String>,
    pub connectability: Connectability,
    pub authentication: AuthenticationMethod,
    pub encryption: EncryptionType,
}

// ── AvailableNetworkPack ────────────────────────────────────────────

/// A wireless LAN visible to an interface.
#[derive(Debug, Clone)]
pub struct AvailableNetworkPack {
    interface: Arc<InterfaceConnectionInfo>,
    ssid: NetworkIdentifier,
    bss_type: BssType,
    signal_quality: u8,
    security_enabled: bool,
    profile_name: Option<String>,
    connectability: Connectability,
    authentication: AuthenticationMethod,
    encryption: EncryptionType,
}

impl AvailableNetworkPack {
    pub fn new(info: AvailableNetworkInfo) -> Self {
        let AvailableNetworkInfo {
            interface,
            ssid,
            bss_type,
            signal_quality,
            security_enabled,
            profile_name,
            connectability,
            authentication,
            encryption,
        } = info;

        Self {
            interface,
            ssid,
            bss_type,
            signal_quality,
            security_enabled,
            profile_name,
            connectability,
            authentication,
            encryption,
        }
    }

    pub fn interface(&self) -> &Arc<InterfaceConnectionInfo> {
        &self.interface
    }

    pub fn ssid(&self) -> &NetworkIdentifier {
        &self.ssid
    }

    pub fn bss_type(&self) -> BssType {
        self.bss_type
    }

    /// Signal quality (0-100).
    pub fn signal_quality(&self) -> u8 {
        self.signal_quality
    }

    pub fn is_security_enabled(&self) -> bool {
        self.security_enabled
    }

    /// Profile associated with this network, if one exists.
    pub fn profile_name(&self) -> Option<&str> {
        self.profile_name.as_deref()
    }

    pub fn connectability(&self) -> &Connectability {
        &self.connectability
    }

    pub fn network_connectable(&self) -> bool {
        self.connectability.is_connectable()
    }

    /// Why the network cannot be connected to. `None` when it can.
    pub fn not_connectable_reason(&self) -> Option<&str> {
        match &self.connectability {
            Connectability::Connectable => None,
            Connectability::NotConnectable { reason } => Some(reason),
        }
    }

    pub fn authentication(&self) -> AuthenticationMethod {
        self.authentication
    }

    pub fn encryption(&self) -> EncryptionType {
        self.encryption
    }

    /// Whether the interface is currently connected through this network's
    /// profile.
    ///
    /// Read from the interface on every call. A network without a profile is
    /// never reported as connected.
    pub fn is_connected(&self) -> bool {
        self.profile_name
            .as_deref()
            .is_some_and(|name| self.interface.is_connected_to(name))
    }
}

impl From<AvailableNetworkInfo> for AvailableNetworkPack {
    fn from(info: AvailableNetworkInfo) -> Self {
        Self::new(info)
    }
}

impl Serialize for AvailableNetworkPack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            interface_id: uuid::Uuid,
            ssid: &'a NetworkIdentifier,
            bss_type: BssType,
            signal_quality: u8,
            security_enabled: bool,
            profile_name: Option<&'a str>,
            network_connectable: bool,
            not_connectable_reason: Option<&'a str>,
            authentication: AuthenticationMethod,
            encryption: EncryptionType,
            connected: bool,
        }

        View {
            interface_id: self.interface.id(),
            ssid: &self.ssid,
            bss_type: self.bss_type,
            signal_quality: self.signal_quality,
            security_enabled: self.security_enabled,
            profile_name: self.profile_name(),
            network_connectable: self.network_connectable(),
            not_connectable_reason: self.not_connectable_reason(),
            authentication: self.authentication,
            encryption: self.encryption,
            connected: self.is_connected(),
        }
        .serialize(serializer)
    }
}

// ── AvailableNetworkGroupPack ───────────────────────────────────────

/// An available network together with the BSS observations behind it.
///
/// Observations are kept sorted by link quality, strongest first. Ties keep
/// the order they were supplied in. The representative link quality,
/// frequency, band and channel come from the strongest observation and are
/// zero when there are none (e.g. a remembered network that is out of range).
#[derive(Debug, Clone, Serialize)]
pub struct AvailableNetworkGroupPack {
    #[serde(flatten)]
    network: AvailableNetworkPack,
    bss_networks: Arc<[BssNetworkPack]>,
    link_quality: u8,
    frequency: u32,
    band: f32,
    channel: u32,
}

impl AvailableNetworkGroupPack {
    pub fn new(
        info: AvailableNetworkInfo,
        bss_networks: impl IntoIterator<Item = BssNetworkPack>,
    ) -> Self {
        let mut bss_networks: Vec<BssNetworkPack> = bss_networks.into_iter().collect();
        // Stable: equal link qualities keep their input order.
        bss_networks.sort_by_key(|b| Reverse(b.link_quality));

        let (link_quality, frequency, band, channel) = bss_networks
            .first()
            .map_or((0, 0, 0.0, 0), |best| {
                (best.link_quality, best.frequency, best.band, best.channel)
            });

        Self {
            network: AvailableNetworkPack::new(info),
            bss_networks: bss_networks.into(),
            link_quality,
            frequency,
            band,
            channel,
        }
    }

    pub fn network(&self) -> &AvailableNetworkPack {
        &self.network
    }

    /// Associated BSS observations, strongest first.
    pub fn bss_networks(&self) -> &[BssNetworkPack] {
        &self.bss_networks
    }

    /// Link quality of the strongest observation (0-100).
    pub fn link_quality(&self) -> u8 {
        self.link_quality
    }

    /// Frequency (kHz) of the strongest observation.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Band (GHz) of the strongest observation.
    pub fn band(&self) -> f32 {
        self.band
    }

    /// Channel of the strongest observation.
    pub fn channel(&self) -> u32 {
        self.channel
    }
}

impl Deref for AvailableNetworkGroupPack {
    type Target = AvailableNetworkPack;

    fn deref(&self) -> &Self::Target {
        &self.network
    }
}

impl AsRef<AvailableNetworkPack> for AvailableNetworkGroupPack {
    fn as_ref(&self) -> &AvailableNetworkPack {
        &self.network
    }
}
