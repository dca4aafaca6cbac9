use crate::store::json_envelope::JsonEnvelope;
use smartbook_core::SmartBookResult;
use smartbook_domain::{ReaderSettings, SettingsStore};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Reader settings kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
    instance_id: Uuid,
}

impl JsonSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> SmartBookResult<ReaderSettings> {
        let settings = JsonEnvelope::<ReaderSettings>::read(&self.path)?
            .map(|envelope| envelope.data.normalized())
            .unwrap_or_default();
        Ok(settings)
    }

    fn save(&self, settings: &ReaderSettings) -> SmartBookResult<()> {
        let metadata = JsonEnvelope::write(&self.path, self.instance_id, settings.clone())?;
        tracing::debug!(
            "Saved reader settings to {} at {}",
            self.path.display(),
            metadata.saved_at
        );
        Ok(())
    }
}
