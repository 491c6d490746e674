// ── Wireless interface types ──
//
// An interface's connection state changes independently of any scan. Records
// built from a scan hold an `Arc<InterfaceConnectionInfo>` and read the live
// state on demand; the collaborator that watches the driver publishes new
// state through `update`. The core itself never writes to it.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Serialize, Serializer};
use strum::{Display, EnumIter};
use uuid::Uuid;

use crate::native::codes::{
    WLAN_INTERFACE_STATE_AD_HOC_NETWORK_FORMED, WLAN_INTERFACE_STATE_ASSOCIATING,
    WLAN_INTERFACE_STATE_AUTHENTICATING, WLAN_INTERFACE_STATE_CONNECTED,
    WLAN_INTERFACE_STATE_DISCONNECTED, WLAN_INTERFACE_STATE_DISCONNECTING,
    WLAN_INTERFACE_STATE_DISCOVERING, WLAN_INTERFACE_STATE_NOT_READY,
};

/// Interface state as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum InterfaceState {
    NotReady,
    Connected,
    AdHocNetworkFormed,
    Disconnecting,
    Disconnected,
    Associating,
    Discovering,
    Authenticating,
}

impl InterfaceState {
    pub fn from_native_code(code: u32) -> Option<Self> {
        match code {
            WLAN_INTERFACE_STATE_NOT_READY => Some(Self::NotReady),
            WLAN_INTERFACE_STATE_CONNECTED => Some(Self::Connected),
            WLAN_INTERFACE_STATE_AD_HOC_NETWORK_FORMED => Some(Self::AdHocNetworkFormed),
            WLAN_INTERFACE_STATE_DISCONNECTING => Some(Self::Disconnecting),
            WLAN_INTERFACE_STATE_DISCONNECTED => Some(Self::Disconnected),
            WLAN_INTERFACE_STATE_ASSOCIATING => Some(Self::Associating),
            WLAN_INTERFACE_STATE_DISCOVERING => Some(Self::Discovering),
            WLAN_INTERFACE_STATE_AUTHENTICATING => Some(Self::Authenticating),
            _ => None,
        }
    }

    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Point-in-time connection state of an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionSnapshot {
    pub state: InterfaceState,
    /// Profile the interface is connected through, if any.
    pub profile_name: Option<String>,
}

impl ConnectionSnapshot {
    pub fn connected(profile_name: impl Into<String>) -> Self {
        Self {
            state: InterfaceState::Connected,
            profile_name: Some(profile_name.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            state: InterfaceState::Disconnected,
            profile_name: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }
}

/// A wireless interface and its live connection state.
pub struct InterfaceConnectionInfo {
    id: Uuid,
    description: String,
    connection: ArcSwap<ConnectionSnapshot>,
}

impl InterfaceConnectionInfo {
    pub fn new(id: Uuid, description: impl Into<String>, connection: ConnectionSnapshot) -> Self {
        Self {
            id,
            description: description.into(),
            connection: ArcSwap::from_pointee(connection),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current connection state (cheap `Arc` clone).
    pub fn connection(&self) -> Arc<ConnectionSnapshot> {
        self.connection.load_full()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.load().is_connected()
    }

    /// Whether the interface is connected through exactly `profile_name`
    /// (ordinal comparison).
    pub fn is_connected_to(&self, profile_name: &str) -> bool {
        let connection = self.connection.load();
        connection.is_connected() && connection.profile_name.as_deref() == Some(profile_name)
    }

    /// Publish a new connection state. Called by whatever tracks the driver.
    pub fn update(&self, connection: ConnectionSnapshot) {
        self.connection.store(Arc::new(connection));
    }
}

impl fmt::Debug for InterfaceConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceConnectionInfo")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("connection", &*self.connection.load())
            .finish()
    }
}

impl Serialize for InterfaceConnectionInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            id: Uuid,
            description: &'a str,
            #[serde(flatten)]
            connection: &'a ConnectionSnapshot,
        }

        let connection = self.connection.load_full();
        View {
            id: self.id,
            description: &self.description,
            connection: &connection,
        }
        .serialize(serializer)
    }
}
