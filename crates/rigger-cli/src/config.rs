//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `RIGGER_<SECTION>__<KEY>`, e.g.
//!    `RIGGER_GENERATOR__INSTANCES=10`
//! 3. `--config FILE` (must exist when given)
//! 4. `./.rigger.toml` (optional)
//! 5. Global config file (optional, see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use rigger_core::domain::{DEFAULT_INSTANCE_COUNT, DEFAULT_IP_OFFSET, DEFAULT_PORT_BASE};

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".rigger.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "RIGGER";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Instance plan.
    pub generator: GeneratorConfig,
    /// Template and output locations.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub instances: u32,
    pub ip_offset: u32,
    pub port_base: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub base_template: PathBuf,
    pub service_template: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins when given.
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            instances: DEFAULT_INSTANCE_COUNT,
            ip_offset: DEFAULT_IP_OFFSET,
            port_base: DEFAULT_PORT_BASE,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_template: PathBuf::from("docker-compose-template.yml"),
            service_template: PathBuf::from("docker-service-template.yml"),
            output: PathBuf::from("docker-compose.yml"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// global and local files it is required to exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(global: &Path, local: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(File::from(global).required(false))
            .add_source(File::from(local).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.rigger.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "rigger", "rigger")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
