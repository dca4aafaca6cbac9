use parking_lot::Mutex;
use smartbook_core::SmartBookResult;
use smartbook_domain::{ProgressStore, ReaderSettings, ReadingProgress, SettingsStore};
use std::collections::HashMap;

/// Progress held in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    records: Mutex<HashMap<String, ReadingProgress>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ProgressStore for InMemoryProgressStore {
    fn load(&self, book_id: &str) -> SmartBookResult<Option<ReadingProgress>> {
        Ok(self.records.lock().get(book_id).cloned())
    }

    fn save(&self, progress: &ReadingProgress) -> SmartBookResult<()> {
        self.records
            .lock()
            .insert(progress.book_id.clone(), progress.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: Mutex<Option<ReaderSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> SmartBookResult<ReaderSettings> {
        Ok(self.settings.lock().clone().unwrap_or_default())
    }

    fn save(&self, settings: &ReaderSettings) -> SmartBookResult<()> {
        *self.settings.lock() = Some(settings.clone());
        Ok(())
    }
}
