// ── Wireless LAN domain model ──
//
// Every type here is a validated, immutable view of scan data. Raw driver
// records live in `crate::native`; `crate::convert` turns one into the other.

pub mod bss;
pub mod identity;
pub mod interface;
pub mod network;
pub mod security;

// ── Re-exports ──────────────────────────────────────────────────────

pub use bss::{BssNetworkPack, BssType};
pub use identity::{Bssid, NetworkIdentifier};
pub use interface::{ConnectionSnapshot, InterfaceConnectionInfo, InterfaceState};
pub use network::{
    AvailableNetworkGroupPack, AvailableNetworkInfo, AvailableNetworkPack, Connectability,
};
pub use security::{AuthenticationMethod, EncryptionType, KeyType, ProfileSecurity};
