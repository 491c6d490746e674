// ── Scan snapshot ──
//
// Ingests everything the platform layer reported for one scan, converts it
// record by record, and matches available networks with the BSS entries seen
// on the same interface for the same SSID and BSS type.
//
// Ingestion never fails as a whole once the JSON parses: a record that does
// not convert is dropped and counted. Unrecognized security codes are routine
// (new suites appear before drivers are classified here) and log at debug;
// malformed records log at warn.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ScanOptions;
use crate::convert::{available_network_info, bss_network, parse_interface_id};
use crate::error::CoreError;
use crate::model::{
    AvailableNetworkGroupPack, AvailableNetworkInfo, AvailableNetworkPack, BssNetworkPack,
    BssType, InterfaceConnectionInfo, NetworkIdentifier,
};
use crate::native::RawScanSnapshot;

type GroupKey = (Uuid, NetworkIdentifier, BssType);

/// Validated contents of one scan.
#[derive(Debug, Clone)]
pub struct ScanSnapshot {
    captured_at: DateTime<Utc>,
    interfaces: Vec<Arc<InterfaceConnectionInfo>>,
    networks: Vec<AvailableNetworkInfo>,
    bss_networks: Vec<BssNetworkPack>,
    skipped: usize,
}

impl ScanSnapshot {
    /// Parse a JSON snapshot and ingest it.
    pub fn from_json(json: &str, options: &ScanOptions) -> Result<Self, CoreError> {
        let raw: RawScanSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw, options))
    }

    pub fn from_raw(raw: RawScanSnapshot, options: &ScanOptions) -> Self {
        let mut skipped = 0usize;

        let mut interfaces: Vec<Arc<InterfaceConnectionInfo>> = Vec::new();
        for raw_iface in &raw.interfaces {
            match InterfaceConnectionInfo::try_from(raw_iface) {
                Ok(iface) if interfaces.iter().any(|known| known.id() == iface.id()) => {
                    warn!(id = %raw_iface.id, "skipping duplicate interface");
                    skipped += 1;
                }
                Ok(iface) => interfaces.push(Arc::new(iface)),
                Err(e) => {
                    warn!(id = %raw_iface.id, error = %e, "skipping interface");
                    skipped += 1;
                }
            }
        }

        let lookup = |raw_id: &str| -> Result<Arc<InterfaceConnectionInfo>, CoreError> {
            let id = parse_interface_id(raw_id)?;
            interfaces
                .iter()
                .find(|iface| iface.id() == id)
                .cloned()
                .ok_or_else(|| CoreError::UnknownInterface {
                    id: raw_id.to_owned(),
                })
        };

        let mut networks = Vec::with_capacity(raw.available_networks.len());
        for raw_network in raw.available_networks {
            let converted = lookup(&raw_network.interface_id)
                .and_then(|iface| available_network_info(raw_network, iface));
            match converted {
                Ok(info) => {
                    if options.keeps(
                        info.signal_quality,
                        info.connectability.is_connectable(),
                        info.ssid.is_hidden(),
                    ) {
                        networks.push(info);
                    } else {
                        debug!(ssid = %info.ssid, "network filtered out");
                    }
                }
                Err(e) if e.is_unclassified() => {
                    debug!(error = %e, "skipping unclassified network");
                    skipped += 1;
                }
                Err(e) => {
                    warn!(error = %e, "skipping malformed network record");
                    skipped += 1;
                }
            }
        }

        let mut bss_networks = Vec::with_capacity(raw.bss_entries.len());
        for raw_bss in &raw.bss_entries {
            match lookup(&raw_bss.interface_id).and_then(|iface| bss_network(raw_bss, iface)) {
                Ok(bss) => bss_networks.push(bss),
                Err(e) => {
                    warn!(bssid = %raw_bss.bssid, error = %e, "skipping BSS entry");
                    skipped += 1;
                }
            }
        }

        debug!(
            interfaces = interfaces.len(),
            networks = networks.len(),
            bss = bss_networks.len(),
            skipped,
            "scan snapshot ingested"
        );

        Self {
            captured_at: raw.captured_at.unwrap_or_else(Utc::now),
            interfaces,
            networks,
            bss_networks,
            skipped,
        }
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn interfaces(&self) -> &[Arc<InterfaceConnectionInfo>] {
        &self.interfaces
    }

    pub fn interface(&self, id: Uuid) -> Option<&Arc<InterfaceConnectionInfo>> {
        self.interfaces.iter().find(|iface| iface.id() == id)
    }

    /// Records dropped during ingestion (unclassified or malformed).
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn available_networks(&self) -> Vec<AvailableNetworkPack> {
        self.networks
            .iter()
            .cloned()
            .map(AvailableNetworkPack::new)
            .collect()
    }

    pub fn bss_networks(&self) -> &[BssNetworkPack] {
        &self.bss_networks
    }

    pub fn network_groups(&self) -> Vec<AvailableNetworkGroupPack> {
        group_networks(self.networks.iter().cloned(), &self.bss_networks)
    }

    /// Groups whose SSID displays as `ssid`.
    pub fn find_groups(&self, ssid: &str) -> Vec<AvailableNetworkGroupPack> {
        group_networks(
            self.networks
                .iter()
                .filter(|info| info.ssid.as_str() == ssid)
                .cloned(),
            &self.bss_networks,
        )
    }
}

/// Build one group per available network from the BSS entries seen on the
/// same interface with the same SSID and BSS type.
///
/// BSS entries keep their relative input order within each group before the
/// group sorts them, so ties resolve in driver order. An entry may land in
/// several groups when the driver lists the same SSID more than once (with
/// and without a profile, for instance).
pub fn group_networks(
    networks: impl IntoIterator<Item = AvailableNetworkInfo>,
    bss_networks: &[BssNetworkPack],
) -> Vec<AvailableNetworkGroupPack> {
    let mut by_key: HashMap<GroupKey, Vec<&BssNetworkPack>> = HashMap::new();
    for bss in bss_networks {
        by_key
            .entry((bss.interface.id(), bss.ssid.clone(), bss.bss_type))
            .or_default()
            .push(bss);
    }

    networks
        .into_iter()
        .map(|info| {
            let key = (info.interface.id(), info.ssid.clone(), info.bss_type);
            let members: Vec<BssNetworkPack> = by_key
                .get(&key)
                .map(|found| found.iter().map(|bss| (*bss).clone()).collect())
                .unwrap_or_default();
            AvailableNetworkGroupPack::new(info, members)
        })
        .collect()
}
