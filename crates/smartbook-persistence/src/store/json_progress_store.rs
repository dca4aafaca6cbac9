use crate::store::json_envelope::JsonEnvelope;
use parking_lot::Mutex;
use smartbook_core::SmartBookResult;
use smartbook_domain::{ProgressStore, ReadingProgress};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

type ProgressMap = BTreeMap<String, ReadingProgress>;

/// Reading progress for every book, kept in one JSON file keyed by book id
#[derive(Debug)]
pub struct JsonProgressStore {
    path: PathBuf,
    instance_id: Uuid,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonProgressStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    fn read_all(&self) -> SmartBookResult<ProgressMap> {
        Ok(JsonEnvelope::<ProgressMap>::read(&self.path)?
            .map(|envelope| envelope.data)
            .unwrap_or_default())
    }

    /// All saved records, ordered by book id
    pub fn list(&self) -> SmartBookResult<Vec<ReadingProgress>> {
        Ok(self.read_all()?.into_values().collect())
    }

    /// Delete the record for `book_id`; returns whether one existed
    pub fn remove(&self, book_id: &str) -> SmartBookResult<bool> {
        let _guard = self.write_lock.lock();
        let mut records = self.read_all()?;
        if records.remove(book_id).is_none() {
            return Ok(false);
        }
        JsonEnvelope::write(&self.path, self.instance_id, records)?;
        tracing::info!("Removed progress for {} from {}", book_id, self.path.display());
        Ok(true)
    }
}

impl ProgressStore for JsonProgressStore {
    fn load(&self, book_id: &str) -> SmartBookResult<Option<ReadingProgress>> {
        Ok(self.read_all()?.remove(book_id))
    }

    fn save(&self, progress: &ReadingProgress) -> SmartBookResult<()> {
        let _guard = self.write_lock.lock();
        let mut records = self.read_all()?;
        records.insert(progress.book_id.clone(), progress.clone());
        JsonEnvelope::write(&self.path, self.instance_id, records)?;

        tracing::debug!(
            "Saved progress for {} (chapter {}, page {})",
            progress.book_id,
            progress.chapter_index,
            progress.page_index
        );
        Ok(())
    }
}
