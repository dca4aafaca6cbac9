use smartbook_core::{AppConfig, SmartBookResult};
use smartbook_domain::{ReaderSettings, SettingsStore, SettingsSync};
use smartbook_persistence::{JsonProgressStore, JsonSettingsStore};
use std::path::PathBuf;
use std::sync::Arc;

pub struct CliContext {
    pub config: AppConfig,
    pub progress: Arc<JsonProgressStore>,
    pub settings: Arc<JsonSettingsStore>,
}

impl CliContext {
    /// `data_dir` from the command line wins over the config file.
    pub fn load(data_dir: Option<PathBuf>) -> Self {
        let mut config = AppConfig::load();
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }
        tracing::debug!("Using data directory {}", config.effective_data_dir().display());

        Self {
            progress: Arc::new(JsonProgressStore::new(config.progress_path())),
            settings: Arc::new(JsonSettingsStore::new(config.settings_path())),
            config,
        }
    }

    pub fn reader_settings(&self) -> SmartBookResult<ReaderSettings> {
        self.settings.load()
    }

    pub fn settings_sync(&self) -> SmartBookResult<SettingsSync> {
        SettingsSync::load(
            self.settings.clone(),
            self.config.effective_settings_debounce_ms(),
        )
    }
}
