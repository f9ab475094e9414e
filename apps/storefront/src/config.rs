//! # Storefront Configuration
//!
//! Where data lives, whether to seed the catalog, and how long checkout takes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FOLIO_STORAGE_BACKEND=memory                                       │
//! │     FOLIO_STORAGE_DIR=/tmp/folio                                       │
//! │     FOLIO_SEED_CATALOG=false                                           │
//! │     FOLIO_CHECKOUT_DELAY_MS=250                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.folio.storefront/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     file backend in the platform data dir, seeding on, 1500 ms         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [storage]
//! backend = "file"        # file | memory
//! dir = "/var/lib/folio"  # optional, defaults to the platform data dir
//!
//! [catalog]
//! seed_on_first_run = true
//!
//! [checkout]
//! delay_ms = 1500
//! ```

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

// =============================================================================
// Storage Backend
// =============================================================================

/// Which key-value backend holds the storefront's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One JSON file per key in a data directory.
    #[default]
    File,

    /// Process memory only. Nothing survives a restart.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "disk" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid(format!(
                "Unknown storage backend: '{}'. Valid options: file, memory",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// `[storage]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Data directory for the file backend.
    /// Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Write the default books when the stored catalog is empty.
    #[serde(default = "default_true")]
    pub seed_on_first_run: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            seed_on_first_run: true,
        }
    }
}

/// `[checkout]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Simulated order processing time (milliseconds).
    #[serde(default = "default_checkout_delay")]
    pub delay_ms: u64,
}

fn default_checkout_delay() -> u64 {
    1500
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            delay_ms: default_checkout_delay(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-memory storage, no seeding. Handy for embedding and tests.
    pub fn in_memory() -> Self {
        StorefrontConfig {
            storage: StorageSettings {
                backend: StorageBackend::Memory,
                dir: None,
            },
            catalog: CatalogSettings {
                seed_on_first_run: false,
            },
            checkout: CheckoutSettings::default(),
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> Result<(), ConfigError> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Save("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.storage.dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "storage.dir must not be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Applies `FOLIO_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup("FOLIO_STORAGE_BACKEND") {
            match backend.parse() {
                Ok(parsed) => {
                    debug!(backend = %backend, "Overriding storage backend from environment");
                    self.storage.backend = parsed;
                }
                Err(_) => warn!(backend = %backend, "Unknown storage backend in environment"),
            }
        }

        if let Some(dir) = lookup("FOLIO_STORAGE_DIR") {
            debug!(dir = %dir, "Overriding storage dir from environment");
            self.storage.dir = Some(PathBuf::from(dir));
        }

        if let Some(seed) = lookup("FOLIO_SEED_CATALOG") {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.catalog.seed_on_first_run = true,
                "0" | "false" | "no" | "off" => self.catalog.seed_on_first_run = false,
                _ => warn!(seed = %seed, "Unknown seed flag in environment"),
            }
        }

        if let Some(delay) = lookup("FOLIO_CHECKOUT_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => {
                    debug!(delay_ms = ms, "Overriding checkout delay from environment");
                    self.checkout.delay_ms = ms;
                }
                Err(_) => warn!(delay = %delay, "Invalid checkout delay in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Directory for the file backend: the configured one, else the platform data dir.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match self.storage.dir {
            Some(ref dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or(ConfigError::NoDataDir),
        }
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout.delay_ms)
    }

    pub fn seed_on_first_run(&self) -> bool {
        self.catalog.seed_on_first_run
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "storefront")
}
