// ── Core identity types ──
//
// NetworkIdentifier (SSID) and Bssid identify a logical network and a single
// radio cell respectively. Both are immutable value types.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ── NetworkIdentifier ───────────────────────────────────────────────

/// An SSID: up to 32 raw bytes plus the string used to display them.
///
/// SSIDs are not required to be UTF-8. The display string is a lossy UTF-8
/// decoding of the raw bytes; equality and hashing follow the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkIdentifier {
    raw: Vec<u8>,
    display: String,
}

impl NetworkIdentifier {
    /// Maximum SSID length in bytes (IEEE 802.11).
    pub const MAX_LEN: usize = 32;

    pub fn new(raw: impl Into<Vec<u8>>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.len() > Self::MAX_LEN {
            return Err(CoreError::SsidTooLong { len: raw.len() });
        }
        let display = String::from_utf8_lossy(&raw).into_owned();
        Ok(Self { raw, display })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Hidden networks broadcast an empty SSID.
    pub fn is_hidden(&self) -> bool {
        self.raw.is_empty()
    }

    /// Lowercase hex rendering of the raw bytes, for SSIDs that do not
    /// display well.
    pub fn to_hex(&self) -> String {
        self.raw.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for NetworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for NetworkIdentifier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for NetworkIdentifier {
    type Error = CoreError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl Serialize for NetworkIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

// ── Bssid ───────────────────────────────────────────────────────────

/// MAC address of a single BSS, rendered as `aa:bb:cc:dd:ee:ff`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bssid([u8; 6]);

impl Bssid {
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Debug for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bssid({self})")
    }
}

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Accepts colon- or dash-separated hex, in either case.
impl FromStr for Bssid {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidBssid {
            input: s.to_owned(),
        };

        let mut bytes = [0u8; 6];
        let mut parts = s.split([':', '-']);
        for byte in &mut bytes {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Bssid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
