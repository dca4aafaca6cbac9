use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `progress.json` and `settings.json`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Quiet period before font size / line spacing changes are written.
    #[serde(default)]
    pub settings_debounce_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/smartbook/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("smartbook/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("smartbook\\config.toml"))
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

    /// Missing or unparsable files fall back to defaults.
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
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|data| data.join("smartbook"))
            .unwrap_or_else(|| PathBuf::from(".smartbook"))
    }

    pub fn effective_settings_debounce_ms(&self) -> u64 {
        self.settings_debounce_ms
            .unwrap_or(DEFAULT_SETTINGS_DEBOUNCE_MS)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.effective_data_dir().join("progress.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.effective_data_dir().join("settings.json")
    }
}
