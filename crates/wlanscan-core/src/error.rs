// ── Core error types ──
//
// Errors raised at the collaborator boundary, where raw scan records are
// validated and classified. Classification itself never errors -- the
// classifiers return `Option` -- and building a domain record from validated
// input is total. These variants describe why a raw record could not be
// turned into validated input.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Identity errors ──────────────────────────────────────────────
    #[error("SSID is {len} bytes long (maximum is 32)")]
    SsidTooLong { len: usize },

    #[error("Invalid BSSID: {input}")]
    InvalidBssid { input: String },

    #[error("Invalid interface id: {input}")]
    InvalidInterfaceId { input: String },

    #[error("Unknown interface: {id}")]
    UnknownInterface { id: String },

    // ── Range errors ─────────────────────────────────────────────────
    #[error("{field} out of range: {value} (expected 0-100)")]
    QualityOutOfRange { field: &'static str, value: u32 },

    // ── Classification failures surfaced at the boundary ─────────────
    #[error("Unrecognized {kind} code: {code:#x}")]
    Unclassified { kind: &'static str, code: u32 },

    #[error("Unrecognized {kind} token: '{token}'")]
    UnrecognizedToken { kind: &'static str, token: String },

    // ── Snapshot errors ──────────────────────────────────────────────
    #[error("Malformed scan snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether this error only means "the driver reported something we do
    /// not recognize yet" rather than a malformed record.
    pub fn is_unclassified(&self) -> bool {
        matches!(
            self,
            Self::Unclassified { .. } | Self::UnrecognizedToken { .. }
        )
    }
}
