//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rigger",
    bin_name = "rigger",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate docker-compose test rigs from templates",
    long_about = "Rigger writes a base compose template followed by N copies of a \
                  service template, substituting {index}, {ip_index} and \
                  {port_index} in each copy.",
    after_help = "EXAMPLES:\n\
        \x20 rigger generate\n\
        \x20 rigger generate -n 5 -o rig.yml\n\
        \x20 rigger generate --base compose.yml --service node.yml --port-base 9000\n\
        \x20 rigger generate --dry-run | less",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the compose file.
    #[command(
        visible_alias = "gen",
        about = "Generate the compose file from templates",
        after_help = "EXAMPLES:\n\
            \x20 rigger generate\n\
            \x20 rigger generate --instances 10 --output docker-compose.yml\n\
            \x20 rigger gen --ip-offset 10 --port-base 8000 --dry-run"
    )]
    Generate(GenerateArgs),

    /// Initialise a Rigger configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 rigger init           # global config\n\
            \x20 rigger init --local   # .rigger.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rigger completions bash > ~/.local/share/bash-completion/completions/rigger\n\
            \x20 rigger completions zsh  > ~/.zfunc/_rigger\n\
            \x20 rigger completions fish > ~/.config/fish/completions/rigger.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Rigger configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 rigger config get generator.instances\n\
            \x20 rigger config list\n\
            \x20 rigger config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `rigger generate`.
///
/// Every option overrides the matching config value; unset options fall
/// back to the config file, the environment, then the built-in defaults.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Base template, written once at the top.
    #[arg(
        short = 'b',
        long = "base",
        value_name = "FILE",
        help = "Base compose template"
    )]
    pub base: Option<PathBuf>,

    /// Service template, repeated once per instance.
    #[arg(
        short = 's',
        long = "service",
        value_name = "FILE",
        help = "Service template containing {index}, {ip_index}, {port_index}"
    )]
    pub service: Option<PathBuf>,

    /// Output file (overwritten).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output compose file"
    )]
    pub output: Option<PathBuf>,

    /// Number of service instances.
    #[arg(
        short = 'n',
        long = "instances",
        value_name = "N",
        help = "Number of service instances"
    )]
    pub instances: Option<u32>,

    /// Offset added to the index for `{ip_index}`.
    #[arg(long = "ip-offset", value_name = "K", help = "Offset for {ip_index}")]
    pub ip_offset: Option<u32>,

    /// First port; `{port_index}` is this plus the index.
    #[arg(long = "port-base", value_name = "PORT", help = "Base for {port_index}")]
    pub port_base: Option<u32>,

    /// Print the document instead of writing it.
    #[arg(long = "dry-run", help = "Print the generated document to stdout")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rigger init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.rigger.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rigger completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `rigger config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.instances`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
