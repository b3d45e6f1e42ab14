use crate::domain::{
    config::{NbStripConfig, NbStripConfigOverlay},
    error::{NbStripError, NbStripResult},
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration together with the discovered files that could not be used
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: NbStripConfig,
    pub skipped: Vec<NbStripError>,
}

impl LoadedConfig {
    /// Report skipped files. Call once logging is up.
    pub fn log_skipped(&self) {
        for error in &self.skipped {
            warn!("{}; ignoring it", error);
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> Self {
        Self {
            global_config_path: Self::get_global_config_path(),
            project_config_path: Self::find_project_config_path(),
        }
    }

    /// Create a configuration manager over explicit file locations
    pub fn with_paths(global_config_path: Option<PathBuf>, project_config_path: Option<PathBuf>) -> Self {
        Self {
            global_config_path,
            project_config_path,
        }
    }

    /// Load configuration from the global and project files.
    ///
    /// A file that cannot be read or parsed is skipped and recorded in
    /// `LoadedConfig::skipped`; the remaining layers still apply.
    pub fn load_config(&self) -> LoadedConfig {
        // Start with default configuration
        let mut config = NbStripConfig::default();
        let mut skipped = Vec::new();

        if let Some(global_path) = self.global_config_path.as_deref().filter(|p| p.exists()) {
            match self.load_config_from_path(global_path) {
                Ok(global) => config = global,
                Err(e) => skipped.push(e),
            }
        }

        if let Some(project_path) = self.project_config_path.as_deref().filter(|p| p.exists()) {
            match read_toml::<NbStripConfigOverlay>(project_path) {
                Ok(project) => config.merge(project),
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig { config, skipped }
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".config").join("nbstrip").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        Self::find_project_config_from(&current_dir)
    }

    fn find_project_config_from(start: &Path) -> Option<PathBuf> {
        let mut path = start;

        loop {
            let config_path = path.join(".nbstrip").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> NbStripResult<NbStripConfig> {
        read_toml(path)
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> NbStripResult<T> {
    let content = fs::read_to_string(path).map_err(|e| NbStripError::Config {
        message: format!("Failed to read config file {}: {}", path.display(), e),
    })?;

    toml::from_str(&content).map_err(|e| NbStripError::Config {
        message: format!("Failed to parse config file {}: {}", path.display(), e),
    })
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
