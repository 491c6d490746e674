// ── Security classification ──
//
// Closed enumerations for authentication, encryption and shared-key type,
// plus the translation tables that classify native driver codes and profile
// descriptor tokens into them.
//
// Numeric codes and profile tokens are two independent tables: the token
// spellings do not line up 1:1 with the code names (`WPA2PSK` vs
// `DOT11_AUTH_ALGO_RSNA_PSK`). Anything outside a table classifies to `None`;
// unknown input is expected (new suites ship before we learn about them) and
// is never an error at this level.

use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::native::codes::{
    DOT11_AUTH_ALGO_80211_OPEN, DOT11_AUTH_ALGO_80211_SHARED_KEY, DOT11_AUTH_ALGO_RSNA,
    DOT11_AUTH_ALGO_RSNA_PSK, DOT11_AUTH_ALGO_WPA, DOT11_AUTH_ALGO_WPA_PSK,
    DOT11_CIPHER_ALGO_CCMP, DOT11_CIPHER_ALGO_NONE, DOT11_CIPHER_ALGO_TKIP,
    DOT11_CIPHER_ALGO_WEP, DOT11_CIPHER_ALGO_WEP40, DOT11_CIPHER_ALGO_WEP104,
};

// ── AuthenticationMethod ────────────────────────────────────────────

/// Authentication method used to connect to a wireless LAN.
///
/// There is deliberately no "none" member: a code or token that does not
/// classify is represented by `Option::None` from the classifiers, so every
/// value of this type is a real method. Compare [`KeyType::None`], which is a
/// legitimate key type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr,
)]
#[non_exhaustive]
pub enum AuthenticationMethod {
    /// Open 802.11 authentication.
    #[strum(serialize = "Open")]
    Open,
    /// Shared-key 802.11 authentication.
    #[strum(serialize = "Shared")]
    Shared,
    /// `WPA` in profile descriptors.
    #[strum(serialize = "WPA-Enterprise")]
    WpaEnterprise,
    /// `WPAPSK` in profile descriptors.
    #[strum(serialize = "WPA-Personal")]
    WpaPersonal,
    /// `WPA2` in profile descriptors.
    #[strum(serialize = "WPA2-Enterprise")]
    Wpa2Enterprise,
    /// `WPA2PSK` in profile descriptors.
    #[strum(serialize = "WPA2-Personal")]
    Wpa2Personal,
}

impl AuthenticationMethod {
    /// Classify a native `DOT11_AUTH_ALGORITHM` code.
    pub fn from_native_code(code: u32) -> Option<Self> {
        match code {
            DOT11_AUTH_ALGO_80211_OPEN => Some(Self::Open),
            DOT11_AUTH_ALGO_80211_SHARED_KEY => Some(Self::Shared),
            DOT11_AUTH_ALGO_WPA => Some(Self::WpaEnterprise),
            DOT11_AUTH_ALGO_WPA_PSK => Some(Self::WpaPersonal),
            DOT11_AUTH_ALGO_RSNA => Some(Self::Wpa2Enterprise),
            DOT11_AUTH_ALGO_RSNA_PSK => Some(Self::Wpa2Personal),
            _ => None,
        }
    }

    /// Classify an `authentication` token from a profile descriptor.
    /// Matching is case-sensitive.
    pub fn from_profile_token(token: &str) -> Option<Self> {
        match token {
            "open" => Some(Self::Open),
            "shared" => Some(Self::Shared),
            "WPA" => Some(Self::WpaEnterprise),
            "WPAPSK" => Some(Self::WpaPersonal),
            "WPA2" => Some(Self::Wpa2Enterprise),
            "WPA2PSK" => Some(Self::Wpa2Personal),
            _ => None,
        }
    }

    /// Canonical native code for this method.
    pub fn native_code(self) -> u32 {
        match self {
            Self::Open => DOT11_AUTH_ALGO_80211_OPEN,
            Self::Shared => DOT11_AUTH_ALGO_80211_SHARED_KEY,
            Self::WpaEnterprise => DOT11_AUTH_ALGO_WPA,
            Self::WpaPersonal => DOT11_AUTH_ALGO_WPA_PSK,
            Self::Wpa2Enterprise => DOT11_AUTH_ALGO_RSNA,
            Self::Wpa2Personal => DOT11_AUTH_ALGO_RSNA_PSK,
        }
    }

    /// Token written to profile descriptors for this method.
    pub fn profile_token(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Shared => "shared",
            Self::WpaEnterprise => "WPA",
            Self::WpaPersonal => "WPAPSK",
            Self::Wpa2Enterprise => "WPA2",
            Self::Wpa2Personal => "WPA2PSK",
        }
    }

    pub fn is_enterprise(self) -> bool {
        matches!(self, Self::WpaEnterprise | Self::Wpa2Enterprise)
    }
}

// ── EncryptionType ──────────────────────────────────────────────────

/// Data encryption (cipher) used by a wireless LAN.
///
/// [`EncryptionType::None`] means the network carries no cipher and is a
/// valid classification; failure to classify is `Option::None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr,
)]
#[non_exhaustive]
pub enum EncryptionType {
    #[strum(serialize = "None")]
    None,
    #[strum(serialize = "WEP")]
    Wep,
    #[strum(serialize = "TKIP")]
    Tkip,
    /// AES-CCMP.
    #[strum(serialize = "AES")]
    Aes,
}

impl EncryptionType {
    /// Classify a native `DOT11_CIPHER_ALGORITHM` code.
    pub fn from_native_code(code: u32) -> Option<Self> {
        match code {
            DOT11_CIPHER_ALGO_NONE => Some(Self::None),
            DOT11_CIPHER_ALGO_WEP40 | DOT11_CIPHER_ALGO_WEP104 | DOT11_CIPHER_ALGO_WEP => {
                Some(Self::Wep)
            }
            DOT11_CIPHER_ALGO_TKIP => Some(Self::Tkip),
            DOT11_CIPHER_ALGO_CCMP => Some(Self::Aes),
            _ => None,
        }
    }

    /// Classify an `encryption` token from a profile descriptor.
    pub fn from_profile_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Self::None),
            "WEP" => Some(Self::Wep),
            "TKIP" => Some(Self::Tkip),
            "AES" => Some(Self::Aes),
            _ => None,
        }
    }

    /// Canonical native code. WEP has three driver codes; the generic one is
    /// canonical.
    pub fn native_code(self) -> u32 {
        match self {
            Self::None => DOT11_CIPHER_ALGO_NONE,
            Self::Wep => DOT11_CIPHER_ALGO_WEP,
            Self::Tkip => DOT11_CIPHER_ALGO_TKIP,
            Self::Aes => DOT11_CIPHER_ALGO_CCMP,
        }
    }

    pub fn profile_token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Wep => "WEP",
            Self::Tkip => "TKIP",
            Self::Aes => "AES",
        }
    }
}

// ── KeyType ─────────────────────────────────────────────────────────

/// Form of the shared key stored in a profile descriptor.
///
/// Unlike [`AuthenticationMethod`], the `None` member here is a valid value
/// (the profile carries no shared key) and is the default. It has no token:
/// [`KeyType::from_profile_token`] only ever yields the other two members.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[non_exhaustive]
pub enum KeyType {
    #[default]
    #[strum(serialize = "None")]
    None,
    #[strum(serialize = "Network key")]
    NetworkKey,
    #[strum(serialize = "Pass phrase")]
    PassPhrase,
}

impl KeyType {
    /// Classify a `keyType` token from a profile descriptor.
    pub fn from_profile_token(token: &str) -> Option<Self> {
        match token {
            "networkKey" => Some(Self::NetworkKey),
            "passPhrase" => Some(Self::PassPhrase),
            _ => None,
        }
    }

    pub fn profile_token(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::NetworkKey => Some("networkKey"),
            Self::PassPhrase => Some("passPhrase"),
        }
    }
}

// ── ProfileSecurity ─────────────────────────────────────────────────

/// Security settings read from a profile descriptor, fully classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileSecurity {
    pub authentication: AuthenticationMethod,
    pub encryption: EncryptionType,
    pub key_type: KeyType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::codes::{
        DOT11_AUTH_ALGO_IHV_START, DOT11_AUTH_ALGO_OWE, DOT11_AUTH_ALGO_WPA3,
        DOT11_AUTH_ALGO_WPA3_ENT, DOT11_AUTH_ALGO_WPA3_SAE, DOT11_AUTH_ALGO_WPA_NONE,
        DOT11_CIPHER_ALGO_BIP, DOT11_CIPHER_ALGO_GCMP, DOT11_CIPHER_ALGO_IHV_START,
        DOT11_CIPHER_ALGO_WPA_USE_GROUP,
    };
    use strum::IntoEnumIterator;

    #[test]
    fn authentication_code_table() {
        assert_eq!(
            AuthenticationMethod::from_native_code(1),
            Some(AuthenticationMethod::Open)
        );
        assert_eq!(
            AuthenticationMethod::from_native_code(2),
            Some(AuthenticationMethod::Shared)
        );
        assert_eq!(
            AuthenticationMethod::from_native_code(3),
            Some(AuthenticationMethod::WpaEnterprise)
        );
        assert_eq!(
            AuthenticationMethod::from_native_code(4),
            Some(AuthenticationMethod::WpaPersonal)
        );
        assert_eq!(
            AuthenticationMethod::from_native_code(6),
            Some(AuthenticationMethod::Wpa2Enterprise)
        );
        assert_eq!(
            AuthenticationMethod::from_native_code(7),
            Some(AuthenticationMethod::Wpa2Personal)
        );
    }

    #[test]
    fn authentication_unknown_codes_fail() {
        for code in [
            0,
            DOT11_AUTH_ALGO_WPA_NONE,
            DOT11_AUTH_ALGO_WPA3,
            DOT11_AUTH_ALGO_WPA3_SAE,
            DOT11_AUTH_ALGO_OWE,
            DOT11_AUTH_ALGO_WPA3_ENT,
            DOT11_AUTH_ALGO_IHV_START,
            u32::MAX,
        ] {
            assert_eq!(AuthenticationMethod::from_native_code(code), None, "{code}");
        }
    }

    #[test]
    fn authentication_token_table() {
        let table = [
            ("open", AuthenticationMethod::Open),
            ("shared", AuthenticationMethod::Shared),
            ("WPA", AuthenticationMethod::WpaEnterprise),
            ("WPAPSK", AuthenticationMethod::WpaPersonal),
            ("WPA2", AuthenticationMethod::Wpa2Enterprise),
            ("WPA2PSK", AuthenticationMethod::Wpa2Personal),
        ];
        for (token, expected) in table {
            assert_eq!(
                AuthenticationMethod::from_profile_token(token),
                Some(expected)
            );
        }
    }

    #[test]
    fn authentication_tokens_are_case_sensitive() {
        assert_eq!(AuthenticationMethod::from_profile_token("Open"), None);
        assert_eq!(AuthenticationMethod::from_profile_token("wpa2psk"), None);
        assert_eq!(AuthenticationMethod::from_profile_token("WPA3SAE"), None);
        assert_eq!(AuthenticationMethod::from_profile_token(""), None);
    }

    #[test]
    fn authentication_round_trips() {
        for method in AuthenticationMethod::iter() {
            assert_eq!(
                AuthenticationMethod::from_profile_token(method.profile_token()),
                Some(method)
            );
            assert_eq!(
                AuthenticationMethod::from_native_code(method.native_code()),
                Some(method)
            );
        }
    }

    #[test]
    fn encryption_code_table() {
        assert_eq!(
            EncryptionType::from_native_code(DOT11_CIPHER_ALGO_NONE),
            Some(EncryptionType::None)
        );
        for wep in [
            DOT11_CIPHER_ALGO_WEP40,
            DOT11_CIPHER_ALGO_WEP104,
            DOT11_CIPHER_ALGO_WEP,
        ] {
            assert_eq!(
                EncryptionType::from_native_code(wep),
                Some(EncryptionType::Wep)
            );
        }
        assert_eq!(
            EncryptionType::from_native_code(DOT11_CIPHER_ALGO_TKIP),
            Some(EncryptionType::Tkip)
        );
        assert_eq!(
            EncryptionType::from_native_code(DOT11_CIPHER_ALGO_CCMP),
            Some(EncryptionType::Aes)
        );
    }

    #[test]
    fn encryption_unknown_codes_fail() {
        for code in [
            DOT11_CIPHER_ALGO_BIP,
            DOT11_CIPHER_ALGO_GCMP,
            DOT11_CIPHER_ALGO_WPA_USE_GROUP,
            DOT11_CIPHER_ALGO_IHV_START,
        ] {
            assert_eq!(EncryptionType::from_native_code(code), None, "{code:#x}");
        }
    }

    #[test]
    fn encryption_round_trips() {
        for cipher in EncryptionType::iter() {
            assert_eq!(
                EncryptionType::from_profile_token(cipher.profile_token()),
                Some(cipher)
            );
            assert_eq!(
                EncryptionType::from_native_code(cipher.native_code()),
                Some(cipher)
            );
        }
        assert_eq!(EncryptionType::from_profile_token("NONE"), None);
    }

    #[test]
    fn key_type_tokens() {
        assert_eq!(
            KeyType::from_profile_token("networkKey"),
            Some(KeyType::NetworkKey)
        );
        assert_eq!(
            KeyType::from_profile_token("passPhrase"),
            Some(KeyType::PassPhrase)
        );
        assert_eq!(KeyType::from_profile_token("passphrase"), None);
        assert_eq!(KeyType::from_profile_token("none"), None);
    }

    #[test]
    fn key_type_none_is_a_valid_default_without_token() {
        assert_eq!(KeyType::default(), KeyType::None);
        assert_eq!(KeyType::None.profile_token(), None);
        for key_type in KeyType::iter().filter(|k| *k != KeyType::None) {
            let token = key_type.profile_token().map(KeyType::from_profile_token);
            assert_eq!(token, Some(Some(key_type)));
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(AuthenticationMethod::Wpa2Personal.to_string(), "WPA2-Personal");
        assert_eq!(EncryptionType::Aes.to_string(), "AES");
        let name: &'static str = KeyType::PassPhrase.into();
        assert_eq!(name, "Pass phrase");
    }
}
