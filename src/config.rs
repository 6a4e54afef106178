//! Configuration module for docweave.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! Settings are passed by reference into the index and hierarchy builders;
//! there is no global configuration.
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `DW_` and use double underscores
//! to separate nested levels:
//! - `DW_INDEX__MODE=split` sets `index.mode`
//! - `DW_ORDERING__TIE_BREAK=stable` sets `ordering.tie_break`
//! - `DW_HIERARCHY__PARALLEL=false` sets `hierarchy.parallel`

use crate::index::IndexMode;
use crate::ordering::OrderingPolicy;
use crate::types::SymbolKind;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const WORKSPACE_DIR: &str = ".docweave";
const SETTINGS_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "DW_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Symbol model used when no model path is given on the command line
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Workspace root directory (where .docweave is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    #[serde(default)]
    pub index: IndexConfig,

    /// Tie-break rules for equal names
    #[serde(default)]
    pub ordering: OrderingPolicy,

    #[serde(default)]
    pub hierarchy: HierarchyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IndexConfig {
    /// Generate the name index at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// One combined page or one page per leading character
    #[serde(default)]
    pub mode: IndexMode,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HierarchyConfig {
    /// Generate hierarchy forests at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Kinds that get a forest, in output order
    #[serde(default = "default_tree_kinds")]
    pub kinds: Vec<SymbolKind>,

    /// Build the index and the forests concurrently
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Worker threads for concurrent builds
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `hierarchy = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_model_path() -> PathBuf {
    PathBuf::from(".docweave/model.json")
}
fn default_true() -> bool {
    true
}
fn default_tree_kinds() -> Vec<SymbolKind> {
    SymbolKind::TREE_KINDS.to_vec()
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            model_path: default_model_path(),
            workspace_root: None,
            index: IndexConfig::default(),
            ordering: OrderingPolicy::default(),
            hierarchy: HierarchyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: IndexMode::default(),
        }
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            kinds: default_tree_kinds(),
            parallel: true,
            parallel_threads: default_parallel_threads(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(WORKSPACE_DIR).join(SETTINGS_FILE));

        Self::figment(&config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscore
            // stays part of the field name
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the workspace config by looking for a .docweave directory
    /// from the current directory up to the root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(WORKSPACE_DIR).join(SETTINGS_FILE))
    }

    /// Get the workspace root directory (where .docweave is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(WORKSPACE_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Check if configuration is properly initialized
    pub fn check_init() -> Result<(), String> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(WORKSPACE_DIR).join(SETTINGS_FILE));

        if !config_path.exists() {
            return Err("No configuration file found".to_string());
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                if let Err(e) = toml::from_str::<Settings>(&content) {
                    return Err(format!(
                        "Configuration file is corrupted: {e}\nRun 'docweave init --force' to regenerate."
                    ));
                }
            }
            Err(e) => {
                return Err(format!("Cannot read configuration file: {e}"));
            }
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file under `root`
    pub fn init_config_file(
        root: impl AsRef<Path>,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let root = root.as_ref();
        let config_path = root.join(WORKSPACE_DIR).join(SETTINGS_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        let settings = Settings {
            workspace_root: Some(root.to_path_buf()),
            ..Settings::default()
        };
        settings.save(&config_path)?;

        tracing::info!("[config] wrote {}", config_path.display());
        Ok(config_path)
    }
}
