//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // An explicit flag wins over `[output] format`; an unknown config
        // value counts as auto.
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
            }
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Raw generated text.  Never suppressed: it is the command's product.
    pub fn document(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    /// Pretty-printed JSON value.  Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let text =
            serde_json::to_string_pretty(value).with_cli_context(|| "Failed to encode JSON")?;
        Ok(self.term.write_line(&text)?)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(format: OutputFormat, no_color: bool, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn explicit_format_wins() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "json".into();
        let out = make_manager(OutputFormat::Plain, false, &cfg);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "JSON".into();
        let out = make_manager(OutputFormat::Auto, false, &cfg);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn human_format_honours_no_color() {
        let cfg = AppConfig::default();
        assert!(!make_manager(OutputFormat::Human, false, &cfg).no_color);
        assert!(make_manager(OutputFormat::Human, true, &cfg).no_color);
    }

    #[test]
    fn plain_format_never_colours() {
        let out = make_manager(OutputFormat::Plain, false, &AppConfig::default());
        assert!(out.no_color);
    }
}
