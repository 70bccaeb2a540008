//! Subcommand handlers, one module per command.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
