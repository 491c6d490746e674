//! Available network listing.

use tabled::Tabled;

use wlanscan_core::AvailableNetworkPack;

use crate::cli::NetworksArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Type")]
    bss_type: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Auth")]
    auth: String,
    #[tabled(rename = "Cipher")]
    cipher: String,
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Connectable")]
    connectable: String,
    #[tabled(rename = "Connected")]
    connected: String,
}

impl NetworkRow {
    fn new(n: &AvailableNetworkPack, color: bool) -> Self {
        Self {
            ssid: util::ssid_cell(n.ssid()),
            interface: n.interface().description().to_owned(),
            bss_type: n.bss_type().to_string(),
            signal: format!("{}%", n.signal_quality()),
            auth: n.authentication().to_string(),
            cipher: n.encryption().to_string(),
            profile: n.profile_name().unwrap_or("-").to_owned(),
            connectable: n
                .not_connectable_reason()
                .map_or_else(|| "yes".into(), |reason| format!("no ({reason})")),
            connected: output::connected_cell(n.is_connected(), color),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &NetworksArgs, settings: &Settings) -> Result<(), CliError> {
    let snapshot = util::load_snapshot(&args.snapshot, &settings.scan)?;
    let networks = snapshot.available_networks();

    let out = output::render_list(
        settings.output,
        &networks,
        |n| NetworkRow::new(n, settings.color),
        |n| n.ssid().to_string(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
