//! Clap derive structures for the `wlanscan` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wlanscan -- inspect wireless LAN scan snapshots
#[derive(Debug, Parser)]
#[command(
    name = "wlanscan",
    version,
    about = "Inspect, group and classify wireless LAN scan results",
    long_about = "Reads scan snapshots produced by the platform wireless layer and shows\n\
        the available networks, the BSS observations behind each network sorted\n\
        strongest first, and the classification of native security codes.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Hide networks whose signal quality is below this value (0-100)
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..=100),
        global = true
    )]
    pub min_quality: Option<u8>,

    /// Hide networks the driver reports as not connectable
    #[arg(long, global = true)]
    pub connectable_only: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available networks in a scan snapshot
    #[command(alias = "net", alias = "n")]
    Networks(NetworksArgs),

    /// Show networks together with the BSS observations behind them
    #[command(alias = "g")]
    Groups(GroupsArgs),

    /// Classify a native code or profile token
    Classify(ClassifyArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Snapshot commands ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NetworksArgs {
    /// Scan snapshot (JSON), or `-` to read stdin
    pub snapshot: PathBuf,
}

#[derive(Debug, Args)]
pub struct GroupsArgs {
    /// Scan snapshot (JSON), or `-` to read stdin
    pub snapshot: PathBuf,

    /// Show the BSS detail for networks with this SSID
    #[arg(long, short = 's')]
    pub ssid: Option<String>,
}

// ── Classify ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(subcommand)]
    pub command: ClassifyCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClassifyCommand {
    /// Authentication: native algorithm code or profile token (e.g. 7, WPA2PSK)
    Auth {
        /// Decimal or 0x-prefixed code, or a profile token
        value: String,
    },

    /// Encryption: native cipher code or profile token (e.g. 4, AES)
    #[command(alias = "encryption")]
    Cipher {
        /// Decimal or 0x-prefixed code, or a profile token
        value: String,
    },

    /// Key type: profile token (e.g. passPhrase)
    Key {
        /// Profile token
        value: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current resolved configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
