//! Integration tests for the `wlanscan` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! snapshot commands and error handling against a fixture written to a
//! temporary directory.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "captured_at": "2026-10-18T09:30:00Z",
  "interfaces": [
    { "id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "description": "Onboard adapter",
      "state": 1, "profile_name": "HomeNet" }
  ],
  "available_networks": [
    { "interface_id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "ssid": "HomeNet",
      "bss_type": 1, "signal_quality": 88, "security_enabled": true,
      "profile_name": "HomeNet", "connectable": true,
      "auth_algorithm": 7, "cipher_algorithm": 4 },
    { "interface_id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "ssid": "CoffeeShop",
      "bss_type": 1, "signal_quality": 35, "security_enabled": false,
      "connectable": true, "auth_algorithm": 1, "cipher_algorithm": 0 },
    { "interface_id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "ssid": "Legacy",
      "bss_type": 1, "signal_quality": 20, "security_enabled": true,
      "connectable": false, "not_connectable_reason": "The network is not compatible",
      "auth_algorithm": 2, "cipher_algorithm": 257 }
  ],
  "bss_entries": [
    { "interface_id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "ssid": "HomeNet",
      "bss_type": 1, "bssid": "02:00:00:00:00:01", "rssi": -80, "link_quality": 10,
      "frequency": 2412000 },
    { "interface_id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "ssid": "HomeNet",
      "bss_type": 1, "bssid": "02:00:00:00:00:02", "rssi": -45, "link_quality": 90,
      "frequency": 5180000 },
    { "interface_id": "2f3e1c5a-8b7d-4c2e-9f10-0a1b2c3d4e5f", "ssid": "HomeNet",
      "bss_type": 1, "bssid": "02:00:00:00:00:03", "rssi": -65, "link_quality": 50,
      "frequency": 2437000 }
  ]
}"#;

// ── Helpers ─────────────────────────────────────────────────────────

/// Isolated home + config directory holding the snapshot fixture.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scan.json"), SNAPSHOT).unwrap();
        Self { dir }
    }

    fn snapshot(&self) -> PathBuf {
        self.dir.path().join("scan.json")
    }

    fn config_file(&self) -> PathBuf {
        self.dir.path().join("config").join("wlanscan").join("config.toml")
    }

    /// Build a [`Command`] for the `wlanscan` binary with env isolation.
    ///
    /// Points config directories into the sandbox and clears `WLANSCAN_*`
    /// overrides so tests never touch the user's real configuration.
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("wlanscan");
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("WLANSCAN_DEFAULTS__OUTPUT")
            .env_remove("WLANSCAN_DEFAULTS__COLOR")
            .env_remove("WLANSCAN_SCAN__MIN_SIGNAL_QUALITY")
            .env_remove("WLANSCAN_SCAN__INCLUDE_UNCONNECTABLE")
            .env_remove("WLANSCAN_SCAN__INCLUDE_HIDDEN");
        cmd
    }
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let sandbox = Sandbox::new();
    let output = sandbox.cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected 'Usage' in output:\n{stderr}");
}

#[test]
fn test_help_flag() {
    Sandbox::new().cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("networks")
            .and(predicate::str::contains("groups"))
            .and(predicate::str::contains("classify")),
    );
}

#[test]
fn test_version_flag() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wlanscan"));
}

#[test]
fn test_completions_zsh() {
    Sandbox::new()
        .cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── networks ────────────────────────────────────────────────────────

#[test]
fn test_networks_table() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["networks", path_arg(&sandbox.snapshot())])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("HomeNet")
                .and(predicate::str::contains("WPA2-Personal"))
                .and(predicate::str::contains("Onboard adapter"))
                .and(predicate::str::contains("no (The network is not compatible)")),
        );
}

#[test]
fn test_networks_json_reports_live_connection() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["networks", "-o", "json", path_arg(&sandbox.snapshot())])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let networks = json.as_array().unwrap();
    assert_eq!(networks.len(), 3);

    let home = networks.iter().find(|n| n["ssid"] == "HomeNet").unwrap();
    assert_eq!(home["connected"], true);
    assert_eq!(home["encryption"], "Aes");

    let coffee = networks.iter().find(|n| n["ssid"] == "CoffeeShop").unwrap();
    assert_eq!(coffee["connected"], false);
    assert!(coffee["profile_name"].is_null());
}

#[test]
fn test_networks_filters() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args([
            "networks",
            "-o",
            "plain",
            "--min-quality",
            "30",
            "--connectable-only",
            path_arg(&sandbox.snapshot()),
        ])
        .assert()
        .success()
        .stdout("HomeNet\nCoffeeShop\n");
}

#[test]
fn test_min_quality_out_of_range() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["networks", "--min-quality", "150", path_arg(&sandbox.snapshot())])
        .assert()
        .code(2);
}

#[test]
fn test_networks_from_stdin() {
    Sandbox::new()
        .cmd()
        .args(["networks", "-o", "plain", "-"])
        .write_stdin(SNAPSHOT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy"));
}

#[test]
fn test_config_file_sets_defaults() {
    let sandbox = Sandbox::new();
    let config = sandbox.config_file();
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(
        &config,
        "[defaults]\noutput = \"plain\"\n\n[scan]\ninclude_unconnectable = false\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["networks", path_arg(&sandbox.snapshot())])
        .assert()
        .success()
        .stdout("HomeNet\nCoffeeShop\n");
}

// ── groups ──────────────────────────────────────────────────────────

#[test]
fn test_groups_json_sorted_strongest_first() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["groups", "-o", "json", path_arg(&sandbox.snapshot())])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let home = json
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["ssid"] == "HomeNet")
        .unwrap();
    let qualities: Vec<u64> = home["bss_networks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["link_quality"].as_u64().unwrap())
        .collect();
    assert_eq!(qualities, vec![90, 50, 10]);
    assert_eq!(home["link_quality"], 90);
    assert_eq!(home["channel"], 36);

    let coffee = json
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["ssid"] == "CoffeeShop")
        .unwrap();
    assert_eq!(coffee["link_quality"], 0);
    assert!(coffee["bss_networks"].as_array().unwrap().is_empty());
}

#[test]
fn test_groups_ssid_detail() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["groups", "--ssid", "HomeNet", path_arg(&sandbox.snapshot())])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("02:00:00:00:00:02")
                .and(predicate::str::contains("5180 MHz"))
                .and(predicate::str::contains("Channel:     36")),
        );
}

#[test]
fn test_groups_ssid_plain_lists_bssids_in_order() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args([
            "groups",
            "-o",
            "plain",
            "--ssid",
            "HomeNet",
            path_arg(&sandbox.snapshot()),
        ])
        .assert()
        .success()
        .stdout("02:00:00:00:00:02\n02:00:00:00:00:03\n02:00:00:00:00:01\n");
}

#[test]
fn test_groups_unknown_ssid() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["groups", "--ssid", "Nowhere", path_arg(&sandbox.snapshot())])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Nowhere"));
}

// ── Snapshot errors ─────────────────────────────────────────────────

#[test]
fn test_missing_snapshot() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["networks", path_arg(&sandbox.dir.path().join("absent.json"))])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_snapshot() {
    let sandbox = Sandbox::new();
    let bad = sandbox.dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    sandbox
        .cmd()
        .args(["networks", path_arg(&bad)])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("could not be parsed"));
}

// ── classify ────────────────────────────────────────────────────────

#[test]
fn test_classify_auth_code() {
    Sandbox::new()
        .cmd()
        .args(["classify", "auth", "7", "-o", "plain"])
        .assert()
        .success()
        .stdout("WPA2-Personal\n");
}

#[test]
fn test_classify_cipher_token() {
    Sandbox::new()
        .cmd()
        .args(["classify", "cipher", "TKIP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TKIP").and(predicate::str::contains("Code:    2")));
}

#[test]
fn test_classify_unknown_is_not_an_error() {
    Sandbox::new()
        .cmd()
        .args(["classify", "auth", "9", "-o", "plain"])
        .assert()
        .success()
        .stdout("unrecognized\n");
}

#[test]
fn test_classify_key_json() {
    let output = Sandbox::new()
        .cmd()
        .args(["classify", "key", "passPhrase", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["label"], "Pass phrase");
    assert_eq!(json["source"], "profile-token");
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_then_refuses_overwrite() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["config", "init"]).assert().success();
    assert!(sandbox.config_file().exists());

    sandbox
        .cmd()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    sandbox
        .cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_defaults() {
    Sandbox::new()
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("min_signal_quality = 0")
                .and(predicate::str::contains("output = \"table\"")),
        );
}

#[test]
fn test_invalid_config_threshold_is_usage_error() {
    let sandbox = Sandbox::new();
    let config = sandbox.config_file();
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(&config, "[scan]\nmin_signal_quality = 120\n").unwrap();

    sandbox
        .cmd()
        .args(["networks", path_arg(&sandbox.snapshot())])
        .assert()
        .code(2);
}

#[test]
fn test_wide_config_threshold_is_usage_error() {
    let sandbox = Sandbox::new();
    let config = sandbox.config_file();
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(&config, "[scan]\nmin_signal_quality = 300\n").unwrap();

    sandbox
        .cmd()
        .args(["networks", path_arg(&sandbox.snapshot())])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("scan.min_signal_quality"));
}

#[test]
fn test_environment_overrides_config_file() {
    let sandbox = Sandbox::new();
    let config = sandbox.config_file();
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(
        &config,
        "[defaults]\noutput = \"json\"\n\n[scan]\nmin_signal_quality = 10\n",
    )
    .unwrap();

    // Double underscore selects the nested table.
    sandbox
        .cmd()
        .env("WLANSCAN_DEFAULTS__OUTPUT", "plain")
        .env("WLANSCAN_SCAN__MIN_SIGNAL_QUALITY", "50")
        .args(["networks", path_arg(&sandbox.snapshot())])
        .assert()
        .success()
        .stdout("HomeNet\n");
}
