//! Flags shared by every `rigger` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `rigger -v generate`
//! and `rigger generate -v` parse the same way.

use std::path::PathBuf;

use clap::{Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of the generation run to stderr.
    ///
    /// `-v` logs each instance, `-vv` the first line of each block and
    /// `-vvv` whole blocks.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log progress to stderr (-v, -vv, -vvv)",
        long_help = "Log progress to stderr:
    (none)  - warnings and errors only
    -v      - one line per generated instance
    -vv     - plus the first line of every block
    -vvv    - plus the full text of every block"
    )]
    pub verbose: u8,

    /// Print nothing but errors. The document itself is still printed by
    /// `generate --dry-run`.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Plain terminal output and logs.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any non-empty value other
    /// than a falsey one (`0`, `false`, `no`, `off`) turns colour off. It never
    /// changes what is generated.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable ANSI colours"
    )]
    pub no_color: bool,

    /// Extra config file layered over `./.rigger.toml`. Must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to report results (json prints the generation summary)"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// Status lines without colour.
    Plain,
    /// A JSON summary.
    Json,
}
