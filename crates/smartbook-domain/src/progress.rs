use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted reading cursor for one book.
///
/// `page_index` points into the page list that was current when the record
/// was written. Page boundaries move with the font size, so readers must
/// re-validate it after every repagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingProgress {
    pub book_id: String,
    pub chapter_index: usize,
    pub page_index: usize,
    pub last_read_date: DateTime<Utc>,
}

impl ReadingProgress {
    pub fn new(book_id: impl Into<String>, chapter_index: usize, page_index: usize) -> Self {
        Self {
            book_id: book_id.into(),
            chapter_index,
            page_index,
            last_read_date: Utc::now(),
        }
    }
}
