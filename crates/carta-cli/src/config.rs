//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--store`, `--menu`, `--no-color`)
//! 2. Environment variables (`CARTA__STORE__PATH=...`)
//! 3. Config file given with `--config`
//! 4. `.carta.toml` in the current directory
//! 5. The platform config file (`carta config path`)
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::{GlobalArgs, StoreBackendArg};

/// File name for a per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".carta.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where dishes are kept.
    pub store: StoreConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Display preferences.
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Menu file; the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Fill a missing menu with the starter dishes.
    pub seed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the id column in `carta list`.
    pub show_ids: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                backend: StoreBackend::File,
                path: None,
                seed: true,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            display: DisplayConfig { show_ids: true },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files, and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// given. The platform and local files are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(global: &Path, local: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(File::from(global).format(FileFormat::Toml).required(false))
            .add_source(File::from(local).format(FileFormat::Toml).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("CARTA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply CLI flag overrides.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(backend) = args.store {
            self.store.backend = match backend {
                StoreBackendArg::File => StoreBackend::File,
                StoreBackendArg::Memory => StoreBackend::Memory,
            };
        }
        if let Some(menu) = &args.menu {
            self.store.path = Some(menu.clone());
        }
        if args.no_color {
            self.output.no_color = true;
        }
        self
    }

    /// Menu file in effect.
    pub fn menu_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(Self::default_menu_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.carta.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "carta", "carta")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path to the default menu file.
    pub fn default_menu_path() -> PathBuf {
        directories::ProjectDirs::from("com", "carta", "carta")
            .map(|d| d.data_dir().join("menu.json"))
            .unwrap_or_else(|| PathBuf::from("carta-menu.json"))
    }
}
