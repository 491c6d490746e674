// ── Raw-to-domain conversions ──
//
// The collaborator boundary. Raw driver records come in with numeric codes
// and unchecked ranges; validated domain input comes out. This is the only
// module that calls the security classifiers, so an unclassified code can
// never reach a record. A classifier returning `None` becomes
// `CoreError::Unclassified` here and the caller decides whether to skip.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::CoreError;
use crate::model::{
    AuthenticationMethod, AvailableNetworkInfo, BssNetworkPack, BssType, Bssid, Connectability,
    ConnectionSnapshot, EncryptionType, InterfaceConnectionInfo, InterfaceState, KeyType,
    NetworkIdentifier, ProfileSecurity,
};
use crate::native::{
    RawAvailableNetwork, RawBssEntry, RawInterface, RawProfileSecurity, RawSsid,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Check a 0-100 quality metric and narrow it.
fn quality(field: &'static str, value: u32) -> Result<u8, CoreError> {
    u8::try_from(value)
        .ok()
        .filter(|q| *q <= 100)
        .ok_or(CoreError::QualityOutOfRange { field, value })
}

/// Drivers report "no profile" as an empty string.
fn profile_name(raw: Option<String>) -> Option<String> {
    raw.filter(|name| !name.is_empty())
}

fn ssid(raw: &RawSsid) -> Result<NetworkIdentifier, CoreError> {
    NetworkIdentifier::new(raw.as_bytes())
}

fn bss_type(code: u32) -> Result<BssType, CoreError> {
    BssType::from_native_code(code).ok_or(CoreError::Unclassified {
        kind: "BSS type",
        code,
    })
}

pub(crate) fn parse_interface_id(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw.trim_matches(['{', '}'])).map_err(|_| CoreError::InvalidInterfaceId {
        input: raw.to_owned(),
    })
}

/// Derive the band (GHz) and channel from a center frequency in kHz.
///
/// Returns `(0.0, 0)` for frequencies outside the 2.4, 5 and 6 GHz bands.
pub fn band_and_channel(frequency_khz: u32) -> (f32, u32) {
    let mhz = frequency_khz / 1_000;
    match mhz {
        2_484 => (2.4, 14),
        2_412..=2_472 => (2.4, (mhz - 2_407) / 5),
        5_170..=5_825 => (5.0, (mhz - 5_000) / 5),
        5_955..=7_115 => (6.0, (mhz - 5_950) / 5),
        _ => (0.0, 0),
    }
}

// ── Interface ──────────────────────────────────────────────────────

impl TryFrom<&RawInterface> for InterfaceConnectionInfo {
    type Error = CoreError;

    fn try_from(raw: &RawInterface) -> Result<Self, Self::Error> {
        let id = parse_interface_id(&raw.id)?;
        let state = InterfaceState::from_native_code(raw.state).ok_or(CoreError::Unclassified {
            kind: "interface state",
            code: raw.state,
        })?;

        Ok(Self::new(
            id,
            raw.description.clone(),
            ConnectionSnapshot {
                state,
                profile_name: profile_name(raw.profile_name.clone()),
            },
        ))
    }
}

// ── Available network ──────────────────────────────────────────────

/// Validate and classify one entry of the available-network list.
pub fn available_network_info(
    raw: RawAvailableNetwork,
    interface: Arc<InterfaceConnectionInfo>,
) -> Result<AvailableNetworkInfo, CoreError> {
    let authentication = AuthenticationMethod::from_native_code(raw.auth_algorithm).ok_or(
        CoreError::Unclassified {
            kind: "authentication",
            code: raw.auth_algorithm,
        },
    )?;
    let encryption =
        EncryptionType::from_native_code(raw.cipher_algorithm).ok_or(CoreError::Unclassified {
            kind: "encryption",
            code: raw.cipher_algorithm,
        })?;

    let connectability = if raw.connectable {
        Connectability::Connectable
    } else {
        Connectability::NotConnectable {
            reason: raw.not_connectable_reason.unwrap_or_default(),
        }
    };

    Ok(AvailableNetworkInfo {
        interface,
        ssid: ssid(&raw.ssid)?,
        bss_type: bss_type(raw.bss_type)?,
        signal_quality: quality("signal quality", raw.signal_quality)?,
        security_enabled: raw.security_enabled,
        profile_name: profile_name(raw.profile_name),
        connectability,
        authentication,
        encryption,
    })
}

// ── BSS entry ──────────────────────────────────────────────────────

/// Validate one entry of the BSS list, filling band and channel from the
/// frequency when the driver did not report them.
pub fn bss_network(
    raw: &RawBssEntry,
    interface: Arc<InterfaceConnectionInfo>,
) -> Result<BssNetworkPack, CoreError> {
    let (derived_band, derived_channel) = band_and_channel(raw.frequency);

    Ok(BssNetworkPack {
        interface,
        ssid: ssid(&raw.ssid)?,
        bss_type: bss_type(raw.bss_type)?,
        bssid: raw.bssid.parse::<Bssid>()?,
        rssi: raw.rssi,
        link_quality: quality("link quality", raw.link_quality)?,
        frequency: raw.frequency,
        band: raw.band.unwrap_or(derived_band),
        channel: raw.channel.unwrap_or(derived_channel),
    })
}

// ── Profile security ───────────────────────────────────────────────

impl TryFrom<&RawProfileSecurity> for ProfileSecurity {
    type Error = CoreError;

    fn try_from(raw: &RawProfileSecurity) -> Result<Self, Self::Error> {
        let authentication = AuthenticationMethod::from_profile_token(&raw.authentication)
            .ok_or_else(|| CoreError::UnrecognizedToken {
                kind: "authentication",
                token: raw.authentication.clone(),
            })?;
        let encryption = EncryptionType::from_profile_token(&raw.encryption).ok_or_else(|| {
            CoreError::UnrecognizedToken {
                kind: "encryption",
                token: raw.encryption.clone(),
            }
        })?;
        // No sharedKey element means no key, which is a valid state.
        let key_type = match raw.key_type.as_deref() {
            None => KeyType::None,
            Some(token) => {
                KeyType::from_profile_token(token).ok_or_else(|| CoreError::UnrecognizedToken {
                    kind: "key type",
                    token: token.to_owned(),
                })?
            }
        };

        Ok(Self {
            authentication,
            encryption,
            key_type,
        })
    }
}
