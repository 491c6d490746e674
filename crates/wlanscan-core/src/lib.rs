//! Typed view of wireless LAN scan results.
//!
//! The platform wireless layer reports scans as loosely typed records:
//! numeric authentication and cipher codes, unchecked quality values, one
//! entry per radio cell. This crate turns them into a small immutable domain
//! model:
//!
//! - **Classifiers** ([`model::security`]): pure lookup tables from native
//!   driver codes and profile-descriptor tokens to closed enumerations
//!   ([`AuthenticationMethod`], [`EncryptionType`], [`KeyType`]). Unknown
//!   input classifies to `None`, never to an error.
//!
//! - **Records** ([`model::network`]): [`AvailableNetworkPack`], one per
//!   logical network, and [`AvailableNetworkGroupPack`], which adds the BSS
//!   observations behind a network sorted strongest first together with
//!   representative signal metrics.
//!
//! - **Boundary** ([`convert`], [`ScanSnapshot`]): validates raw records,
//!   runs the classifiers, and groups BSS observations with their networks.
//!
//! Records are immutable once built. The one live value is
//! [`AvailableNetworkPack::is_connected`], which reads the shared
//! [`InterfaceConnectionInfo`] on every call.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod native;
pub mod snapshot;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ScanOptions;
pub use error::CoreError;
pub use snapshot::{ScanSnapshot, group_networks};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AuthenticationMethod, AvailableNetworkGroupPack, AvailableNetworkInfo, AvailableNetworkPack,
    BssNetworkPack, BssType, Bssid, Connectability, ConnectionSnapshot, EncryptionType,
    InterfaceConnectionInfo, InterfaceState, KeyType, NetworkIdentifier, ProfileSecurity,
};
