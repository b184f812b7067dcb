//! Configuration file support.
//!
//! Settings are read from `lms_core.toml`. Every section and key is optional;
//! a missing file yields the defaults, which reproduce the stock behavior
//! ("Section N" titles, two-decimal learning hours, memoization on).
//!
//! ```toml
//! [curriculum]
//! section_title_prefix = "Section"
//!
//! [dashboard]
//! learning_hours_decimals = 2
//!
//! [cache]
//! enabled = true
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LMS_CORE_CONFIG";

const CONFIG_FILE_NAME: &str = "lms_core.toml";

/// Upper bound for display decimals; more is never meaningful for hours.
const MAX_HOURS_DECIMALS: usize = 6;

static CONFIG: OnceCell<CoreConfig> = OnceCell::new();

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub curriculum: CurriculumSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Curriculum page settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumSettings {
    #[serde(default = "default_section_title_prefix")]
    pub section_title_prefix: String,
}

/// Dashboard display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_learning_hours_decimals")]
    pub learning_hours_decimals: usize,
}

/// Memoization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
}

fn default_section_title_prefix() -> String {
    "Section".to_string()
}

fn default_learning_hours_decimals() -> usize {
    2
}

fn default_cache_enabled() -> bool {
    true
}

impl Default for CurriculumSettings {
    fn default() -> Self {
        Self {
            section_title_prefix: default_section_title_prefix(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            learning_hours_decimals: default_learning_hours_decimals(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CoreConfig)` if successful
    /// * `Err(CoreError::Configuration)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        log::info!("Loading configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: CoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches, in order:
    /// 1. The file named by `LMS_CORE_CONFIG`
    /// 2. `lms_core.toml` in the current directory
    /// 3. `rust_backend/lms_core.toml`
    /// 4. `../lms_core.toml`
    ///
    /// Falls back to defaults when no file exists. A file that exists but is
    /// invalid is an error.
    pub fn load_default() -> CoreResult<Self> {
        if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
            if !explicit.trim().is_empty() {
                return Self::from_file(explicit.trim());
            }
        }

        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths.iter() {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        log::debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    fn validate(&self) -> CoreResult<()> {
        if self.dashboard.learning_hours_decimals > MAX_HOURS_DECIMALS {
            return Err(CoreError::Configuration(format!(
                "dashboard.learning_hours_decimals must be at most {}, got {}",
                MAX_HOURS_DECIMALS, self.dashboard.learning_hours_decimals
            )));
        }
        if self.curriculum.section_title_prefix.chars().any(char::is_control) {
            return Err(CoreError::Configuration(
                "curriculum.section_title_prefix must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Install a process-wide configuration.
///
/// Fails if a configuration was already installed or loaded.
pub fn init_config(config: CoreConfig) -> CoreResult<()> {
    CONFIG
        .set(config)
        .map_err(|_| CoreError::Configuration("Configuration already initialized".to_string()))
}

/// Process-wide configuration, loaded from the default location on first use.
pub fn get_config() -> CoreResult<&'static CoreConfig> {
    CONFIG.get_or_try_init(CoreConfig::load_default)
}

/// Whether memoization is on for a configuration lookup; stays on if loading failed.
pub fn cache_enabled_or_default(config: CoreResult<&CoreConfig>) -> bool {
    match config {
        Ok(config) => config.cache.enabled,
        Err(e) => {
            log::warn!("Failed to load configuration, keeping memoization on: {}", e);
            default_cache_enabled()
        }
    }
}
