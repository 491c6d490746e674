// ── Native driver codes ──
//
// Numeric values reported by the platform wireless API. Names follow the
// platform headers so they can be matched against driver documentation.

// DOT11_AUTH_ALGORITHM
pub const DOT11_AUTH_ALGO_80211_OPEN: u32 = 1;
pub const DOT11_AUTH_ALGO_80211_SHARED_KEY: u32 = 2;
pub const DOT11_AUTH_ALGO_WPA: u32 = 3;
pub const DOT11_AUTH_ALGO_WPA_PSK: u32 = 4;
pub const DOT11_AUTH_ALGO_WPA_NONE: u32 = 5;
pub const DOT11_AUTH_ALGO_RSNA: u32 = 6;
pub const DOT11_AUTH_ALGO_RSNA_PSK: u32 = 7;
pub const DOT11_AUTH_ALGO_WPA3: u32 = 8;
pub const DOT11_AUTH_ALGO_WPA3_SAE: u32 = 9;
pub const DOT11_AUTH_ALGO_OWE: u32 = 10;
pub const DOT11_AUTH_ALGO_WPA3_ENT: u32 = 11;
pub const DOT11_AUTH_ALGO_IHV_START: u32 = 0x8000_0000;

// DOT11_CIPHER_ALGORITHM
pub const DOT11_CIPHER_ALGO_NONE: u32 = 0x00;
pub const DOT11_CIPHER_ALGO_WEP40: u32 = 0x01;
pub const DOT11_CIPHER_ALGO_TKIP: u32 = 0x02;
pub const DOT11_CIPHER_ALGO_CCMP: u32 = 0x04;
pub const DOT11_CIPHER_ALGO_WEP104: u32 = 0x05;
pub const DOT11_CIPHER_ALGO_BIP: u32 = 0x06;
pub const DOT11_CIPHER_ALGO_GCMP: u32 = 0x08;
pub const DOT11_CIPHER_ALGO_WPA_USE_GROUP: u32 = 0x100;
pub const DOT11_CIPHER_ALGO_WEP: u32 = 0x101;
pub const DOT11_CIPHER_ALGO_IHV_START: u32 = 0x8000_0000;

// DOT11_BSS_TYPE
pub const DOT11_BSS_TYPE_INFRASTRUCTURE: u32 = 1;
pub const DOT11_BSS_TYPE_INDEPENDENT: u32 = 2;
pub const DOT11_BSS_TYPE_ANY: u32 = 3;

// WLAN_INTERFACE_STATE
pub const WLAN_INTERFACE_STATE_NOT_READY: u32 = 0;
pub const WLAN_INTERFACE_STATE_CONNECTED: u32 = 1;
pub const WLAN_INTERFACE_STATE_AD_HOC_NETWORK_FORMED: u32 = 2;
pub const WLAN_INTERFACE_STATE_DISCONNECTING: u32 = 3;
pub const WLAN_INTERFACE_STATE_DISCONNECTED: u32 = 4;
pub const WLAN_INTERFACE_STATE_ASSOCIATING: u32 = 5;
pub const WLAN_INTERFACE_STATE_DISCOVERING: u32 = 6;
pub const WLAN_INTERFACE_STATE_AUTHENTICATING: u32 = 7;
