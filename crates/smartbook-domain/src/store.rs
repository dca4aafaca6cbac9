//! Seams to the collaborators the reader depends on.
//!
//! Stores are synchronous so a navigation step can persist before it
//! returns. Loading book content is the one asynchronous hand-off.

use crate::book::BookContent;
use crate::progress::ReadingProgress;
use crate::settings::ReaderSettings;
use async_trait::async_trait;
use smartbook_core::SmartBookResult;
use std::path::Path;

/// Reading progress keyed by book id. Saving overwrites any earlier record.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved for `book_id` yet.
    fn load(&self, book_id: &str) -> SmartBookResult<Option<ReadingProgress>>;

    fn save(&self, progress: &ReadingProgress) -> SmartBookResult<()>;
}

/// Process-wide reader settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// Default settings when nothing has been saved.
    fn load(&self) -> SmartBookResult<ReaderSettings>;

    fn save(&self, settings: &ReaderSettings) -> SmartBookResult<()>;
}

/// Extracts chapters from a book file. Every failure is reported as `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookContentSource: Send + Sync {
    async fn load_chapters(&self, path: &Path) -> Option<BookContent>;
}
