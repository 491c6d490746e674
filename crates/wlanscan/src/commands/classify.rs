//! Classification of native codes and profile tokens.
//!
//! Unknown input is reported as unrecognized, not as an error: scan results
//! routinely carry codes newer than the tables here.

use serde::Serialize;

use wlanscan_core::{AuthenticationMethod, EncryptionType, KeyType};

use crate::cli::{ClassifyArgs, ClassifyCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct Classification {
    kind: &'static str,
    input: String,
    source: InputSource,
    /// Display label, or `None` when the input is not recognized.
    label: Option<String>,
    native_code: Option<u32>,
    profile_token: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum InputSource {
    NativeCode,
    ProfileToken,
}

impl InputSource {
    fn describe(self) -> &'static str {
        match self {
            Self::NativeCode => "native code",
            Self::ProfileToken => "profile token",
        }
    }
}

/// Parse a decimal or `0x`-prefixed native code.
fn parse_code(value: &str) -> Option<u32> {
    let value = value.trim();
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

fn classify_auth(input: String) -> Classification {
    let (source, method) = match parse_code(&input) {
        Some(code) => (
            InputSource::NativeCode,
            AuthenticationMethod::from_native_code(code),
        ),
        None => (
            InputSource::ProfileToken,
            AuthenticationMethod::from_profile_token(&input),
        ),
    };
    Classification {
        kind: "authentication",
        input,
        source,
        label: method.map(|m| m.to_string()),
        native_code: method.map(AuthenticationMethod::native_code),
        profile_token: method.map(AuthenticationMethod::profile_token),
    }
}

fn classify_cipher(input: String) -> Classification {
    let (source, encryption) = match parse_code(&input) {
        Some(code) => (
            InputSource::NativeCode,
            EncryptionType::from_native_code(code),
        ),
        None => (
            InputSource::ProfileToken,
            EncryptionType::from_profile_token(&input),
        ),
    };
    Classification {
        kind: "encryption",
        input,
        source,
        label: encryption.map(|e| e.to_string()),
        native_code: encryption.map(EncryptionType::native_code),
        profile_token: encryption.map(EncryptionType::profile_token),
    }
}

fn classify_key(input: String) -> Classification {
    let key = KeyType::from_profile_token(&input);
    Classification {
        kind: "key type",
        input,
        source: InputSource::ProfileToken,
        label: key.map(|k| k.to_string()),
        native_code: None,
        profile_token: key.and_then(KeyType::profile_token),
    }
}

fn detail(c: &Classification, color: bool) -> String {
    let mut lines = vec![
        format!("Input:   {} ({})", c.input, c.source.describe()),
        format!(
            "{:<8} {}",
            format!("{}:", capitalize(c.kind)),
            c.label.clone().unwrap_or_else(|| output::unrecognized(color))
        ),
    ];
    if let Some(code) = c.native_code {
        lines.push(format!("Code:    {code}"));
    }
    if let Some(token) = c.profile_token {
        lines.push(format!("Token:   {token}"));
    }
    lines.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ClassifyArgs, settings: &Settings) -> Result<(), CliError> {
    let classification = match args.command {
        ClassifyCommand::Auth { value } => classify_auth(value),
        ClassifyCommand::Cipher { value } => classify_cipher(value),
        ClassifyCommand::Key { value } => classify_key(value),
    };
    tracing::debug!(?classification, "classified input");

    let out = output::render_single(
        settings.output,
        &classification,
        |c| detail(c, settings.color),
        |c| c.label.clone().unwrap_or_else(|| "unrecognized".into()),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
