use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SLOT_NAME: &str = "kanban-tasks";
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 5.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted slots.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub slot_name: Option<String>,

    /// Pointer travel, in pixels, before a press turns into a drag.
    #[serde(default)]
    pub activation_distance: Option<f64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Read a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("taskboard")))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn effective_slot_name(&self) -> &str {
        self.slot_name.as_deref().unwrap_or(DEFAULT_SLOT_NAME)
    }

    /// Negative or non-finite distances in the file are ignored.
    pub fn effective_activation_distance(&self) -> f64 {
        self.activation_distance
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(DEFAULT_ACTIVATION_DISTANCE)
    }
}
