//! Tracing setup for the `rigger` binary.
//!
//! `rigger-core` and `rigger-adapters` only emit events. The per-instance
//! `Generating instance` lines come from core at INFO, block first lines at
//! DEBUG and full blocks at TRACE, so `-v`, `-vv` and `-vvv` reveal one layer
//! each. `--quiet` drops everything below ERROR. A set `RUST_LOG` replaces
//! the flag-derived filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that receive the flag-derived level.
const RIGGER_TARGETS: [&str; 3] = ["rigger", "rigger_core", "rigger_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => rigger_filter(level_for(args)),
    };

    // Colour only when a person is reading stderr.
    let ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn rigger_filter(level: LevelFilter) -> EnvFilter {
    let directives = RIGGER_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_run_only_warns() {
        assert_eq!(level_for(&args_with(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_reveals_one_level() {
        assert_eq!(level_for(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args_with(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_for(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn filter_covers_every_rigger_crate() {
        let rendered = rigger_filter(LevelFilter::DEBUG).to_string();
        for target in RIGGER_TARGETS {
            assert!(rendered.contains(&format!("{target}=debug")), "{rendered}");
        }
    }
}
