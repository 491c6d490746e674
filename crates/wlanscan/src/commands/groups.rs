//! Network groups: each available network with its BSS observations.

use tabled::Tabled;

use wlanscan_core::{AvailableNetworkGroupPack, BssNetworkPack};

use crate::cli::{GroupsArgs, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Auth")]
    auth: String,
    #[tabled(rename = "Cipher")]
    cipher: String,
    #[tabled(rename = "BSSs")]
    bss_count: usize,
    #[tabled(rename = "Link")]
    link_quality: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Connected")]
    connected: String,
}

impl GroupRow {
    fn new(g: &AvailableNetworkGroupPack, color: bool) -> Self {
        Self {
            ssid: util::ssid_cell(g.ssid()),
            interface: g.interface().description().to_owned(),
            auth: g.authentication().to_string(),
            cipher: g.encryption().to_string(),
            bss_count: g.bss_networks().len(),
            link_quality: format!("{}%", g.link_quality()),
            band: util::band_cell(g.band()),
            channel: util::nonzero_cell(g.channel()),
            connected: output::connected_cell(g.is_connected(), color),
        }
    }
}

#[derive(Tabled)]
struct BssRow {
    #[tabled(rename = "BSSID")]
    bssid: String,
    #[tabled(rename = "RSSI")]
    rssi: String,
    #[tabled(rename = "Link")]
    link_quality: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Channel")]
    channel: String,
}

impl From<&BssNetworkPack> for BssRow {
    fn from(b: &BssNetworkPack) -> Self {
        Self {
            bssid: b.bssid.to_string(),
            rssi: format!("{} dBm", b.rssi),
            link_quality: format!("{}%", b.link_quality),
            frequency: format!("{} MHz", b.frequency / 1000),
            band: util::band_cell(b.band),
            channel: util::nonzero_cell(b.channel),
        }
    }
}

fn detail(g: &AvailableNetworkGroupPack, color: bool) -> String {
    let mut lines = vec![
        format!("SSID:        {}", util::ssid_cell(g.ssid())),
        format!("Interface:   {}", g.interface().description()),
        format!("Type:        {}", g.bss_type()),
        format!("Auth:        {}", g.authentication()),
        format!("Cipher:      {}", g.encryption()),
        format!("Profile:     {}", g.profile_name().unwrap_or("-")),
        format!("Signal:      {}%", g.signal_quality()),
        format!("Link:        {}%", g.link_quality()),
        format!("Band:        {}", util::band_cell(g.band())),
        format!("Channel:     {}", util::nonzero_cell(g.channel())),
    ];
    if g.is_connected() {
        lines.push(format!("Connected:   {}", output::connected_cell(true, color)));
    }
    if let Some(reason) = g.not_connectable_reason() {
        lines.push(format!("Unavailable: {reason}"));
    }
    if !g.bss_networks().is_empty() {
        let rows: Vec<BssRow> = g.bss_networks().iter().map(BssRow::from).collect();
        lines.push(String::new());
        lines.push(output::render_table(&rows));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &GroupsArgs, settings: &Settings) -> Result<(), CliError> {
    let snapshot = util::load_snapshot(&args.snapshot, &settings.scan)?;

    let out = match &args.ssid {
        None => {
            let groups = snapshot.network_groups();
            output::render_list(
                settings.output,
                &groups,
                |g| GroupRow::new(g, settings.color),
                |g| g.ssid().to_string(),
            )?
        }
        Some(ssid) => {
            let groups = snapshot.find_groups(ssid);
            if groups.is_empty() {
                return Err(CliError::NetworkNotFound { ssid: ssid.clone() });
            }
            match settings.output {
                OutputFormat::Table => groups
                    .iter()
                    .map(|g| detail(g, settings.color))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
                // One BSSID per line across the matching groups, strongest first.
                format => output::render_single(
                    format,
                    groups.as_slice(),
                    |_| String::new(),
                    |gs| {
                        gs.iter()
                            .flat_map(|g| g.bss_networks().iter().map(|b| b.bssid.to_string()))
                            .collect::<Vec<_>>()
                            .join("\n")
                    },
                )?,
            }
        }
    };
    output::print_output(&out, settings.quiet);
    Ok(())
}
