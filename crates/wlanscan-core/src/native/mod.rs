// ── Platform-facing types ──
//
// Numeric codes and raw records produced by the platform wireless layer.

pub mod codes;
pub mod records;

pub use records::{
    RawAvailableNetwork, RawBssEntry, RawInterface, RawProfileSecurity, RawScanSnapshot, RawSsid,
};
