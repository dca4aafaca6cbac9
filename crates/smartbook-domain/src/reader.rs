//! Reader navigation state machine.
//!
//! A `Reader` starts in `Loading`, moves to `Ready` once chapters arrive (or
//! to `Error` when the source has nothing), and ends in `Closed`. Navigation
//! only acts in `Ready`; every index change is written to the progress store
//! before the call returns.
//!
//! Pages form one flat list across all chapters, so stepping past the last
//! page of a chapter lands on the first page of the next one.

use crate::book::{BookContent, BookPage, Chapter};
use crate::error::ReaderError;
use crate::paginator::paginate;
use crate::progress::ReadingProgress;
use crate::settings::ReaderSettings;
use crate::store::{BookContentSource, ProgressStore};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderStatus {
    Loading,
    Ready,
    Error,
    Closed,
}

/// One row of the chapter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub chapter_index: usize,
    pub title: String,
    pub first_page_index: usize,
}

#[derive(Debug)]
struct Session {
    book_title: String,
    chapters: Vec<Chapter>,
    pages: Vec<BookPage>,
    current_page_index: usize,
}

impl Session {
    fn current_page(&self) -> &BookPage {
        &self.pages[self.current_page_index]
    }

    fn first_page_of_chapter(&self, chapter_index: usize) -> Option<usize> {
        first_page_of_chapter(&self.pages, chapter_index)
    }
}

#[derive(Debug)]
enum Phase {
    Loading,
    Ready(Session),
    Error(ReaderError),
    Closed,
}

pub struct Reader {
    book_id: String,
    settings: ReaderSettings,
    progress_store: Arc<dyn ProgressStore>,
    phase: Phase,
}

fn first_page_of_chapter(pages: &[BookPage], chapter_index: usize) -> Option<usize> {
    pages.iter().position(|p| p.chapter_index == chapter_index)
}

/// Picks the starting page for freshly computed `pages` from saved progress.
///
/// The saved page index is clamped into range. If that page belongs to a
/// different chapter than the one recorded, and the recorded chapter still
/// exists, the cursor moves to the recorded chapter's first page.
fn reconcile_progress(pages: &[BookPage], saved: Option<&ReadingProgress>) -> usize {
    let Some(saved) = saved else {
        return 0;
    };
    let index = saved.page_index.min(pages.len().saturating_sub(1));
    match pages.get(index) {
        Some(page) if page.chapter_index != saved.chapter_index => {
            first_page_of_chapter(pages, saved.chapter_index).unwrap_or(index)
        }
        _ => index,
    }
}

impl Reader {
    pub fn new(
        book_id: impl Into<String>,
        settings: ReaderSettings,
        progress_store: Arc<dyn ProgressStore>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            settings,
            progress_store,
            phase: Phase::Loading,
        }
    }

    /// Fetches chapters from `source` and installs them.
    ///
    /// There is no timeout: a source that never answers leaves the reader in
    /// `Loading`.
    pub async fn load(&mut self, source: &dyn BookContentSource, path: &Path) -> ReaderStatus {
        tracing::debug!("Loading book {} from {}", self.book_id, path.display());
        let content = source.load_chapters(path).await;
        self.finish_loading(content, path)
    }

    /// Installs the result of a content fetch.
    ///
    /// Results arriving after the reader left `Loading` (for example after
    /// `close`) are discarded.
    pub fn finish_loading(&mut self, content: Option<BookContent>, path: &Path) -> ReaderStatus {
        if !matches!(self.phase, Phase::Loading) {
            tracing::debug!(
                "Discarding content for {}: reader is {:?}",
                self.book_id,
                self.status()
            );
            return self.status();
        }

        let content = match content {
            Some(content) if !content.chapters.is_empty() => content,
            _ => {
                tracing::warn!("No chapters available for {} at {}", self.book_id, path.display());
                self.phase = Phase::Error(ReaderError::ContentUnavailable {
                    path: path.to_path_buf(),
                });
                return self.status();
            }
        };

        let pages = paginate(&content.chapters, &self.settings);
        let saved = match self.progress_store.load(&self.book_id) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("Failed to load progress for {}: {}", self.book_id, e);
                None
            }
        };
        let current_page_index = reconcile_progress(&pages, saved.as_ref());

        tracing::info!(
            "Opened {} ({} chapters, {} pages) at page {}",
            self.book_id,
            content.chapters.len(),
            pages.len(),
            current_page_index
        );

        self.phase = Phase::Ready(Session {
            book_title: content.title,
            chapters: content.chapters,
            pages,
            current_page_index,
        });
        self.persist_progress();
        self.status()
    }

    pub fn status(&self) -> ReaderStatus {
        match self.phase {
            Phase::Loading => ReaderStatus::Loading,
            Phase::Ready(_) => ReaderStatus::Ready,
            Phase::Error(_) => ReaderStatus::Error,
            Phase::Closed => ReaderStatus::Closed,
        }
    }

    pub fn error(&self) -> Option<&ReaderError> {
        match &self.phase {
            Phase::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn book_title(&self) -> Option<&str> {
        self.session().map(|s| s.book_title.as_str())
    }

    pub fn pages(&self) -> &[BookPage] {
        self.session().map(|s| s.pages.as_slice()).unwrap_or(&[])
    }

    pub fn current_page_index(&self) -> Option<usize> {
        self.session().map(|s| s.current_page_index)
    }

    pub fn current_page(&self) -> Option<&BookPage> {
        self.session().map(Session::current_page)
    }

    pub fn current_chapter_index(&self) -> Option<usize> {
        self.current_page().map(|p| p.chapter_index)
    }

    pub fn current_chapter_title(&self) -> Option<&str> {
        self.current_page().map(|p| p.chapter_title.as_str())
    }

    /// Position through the book, from just above 0.0 on the first page to
    /// 1.0 on the last.
    pub fn progress_fraction(&self) -> Option<f64> {
        self.session()
            .map(|s| (s.current_page_index + 1) as f64 / s.pages.len() as f64)
    }

    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        session
            .chapters
            .iter()
            .enumerate()
            .filter_map(|(chapter_index, chapter)| {
                session
                    .first_page_of_chapter(chapter_index)
                    .map(|first_page_index| TocEntry {
                        chapter_index,
                        title: chapter.title.clone(),
                        first_page_index,
                    })
            })
            .collect()
    }

    pub fn next_page(&mut self) -> bool {
        self.move_to(|s| {
            (s.current_page_index + 1 < s.pages.len()).then_some(s.current_page_index + 1)
        })
    }

    pub fn previous_page(&mut self) -> bool {
        self.move_to(|s| s.current_page_index.checked_sub(1))
    }

    pub fn next_chapter(&mut self) -> bool {
        self.move_to(|s| {
            let target = s.current_page().chapter_index + 1;
            s.first_page_of_chapter(target)
        })
    }

    pub fn previous_chapter(&mut self) -> bool {
        self.move_to(|s| {
            let target = s.current_page().chapter_index.checked_sub(1)?;
            s.first_page_of_chapter(target)
        })
    }

    pub fn go_to_chapter(&mut self, chapter_index: usize) -> bool {
        self.move_to(|s| s.first_page_of_chapter(chapter_index))
    }

    pub fn go_to_page(&mut self, page_index: usize) -> bool {
        self.move_to(|s| (page_index < s.pages.len()).then_some(page_index))
    }

    /// Repaginates with `settings` and carries the raw page index over,
    /// clamped into the new page list.
    ///
    /// The carry-over is by index, not by text offset, so the visible text
    /// shifts when the page size changes. While loading, the new settings
    /// are kept for the upcoming pagination.
    pub fn on_settings_changed(&mut self, settings: ReaderSettings) -> bool {
        match &mut self.phase {
            Phase::Loading => {
                self.settings = settings;
                false
            }
            Phase::Ready(session) => {
                let previous = session.current_page_index;
                session.pages = paginate(&session.chapters, &settings);
                session.current_page_index = previous.min(session.pages.len().saturating_sub(1));
                tracing::debug!(
                    "Repaginated {} into {} pages, page {} -> {}",
                    self.book_id,
                    session.pages.len(),
                    previous,
                    session.current_page_index
                );
                self.settings = settings;
                self.persist_progress();
                true
            }
            Phase::Error(_) | Phase::Closed => false,
        }
    }

    /// Flushes progress and ends the session. Any load still in flight is
    /// discarded when it completes.
    pub fn close(&mut self) {
        if matches!(self.phase, Phase::Ready(_)) {
            self.persist_progress();
        }
        if !matches!(self.phase, Phase::Closed) {
            tracing::info!("Closed reader for {}", self.book_id);
        }
        self.phase = Phase::Closed;
    }

    fn move_to(&mut self, target: impl FnOnce(&Session) -> Option<usize>) -> bool {
        let Phase::Ready(session) = &mut self.phase else {
            return false;
        };
        match target(&*session) {
            Some(index) if index != session.current_page_index => {
                session.current_page_index = index;
                self.persist_progress();
                true
            }
            _ => false,
        }
    }

    fn persist_progress(&self) {
        let Some(session) = self.session() else {
            return;
        };
        let progress = ReadingProgress::new(
            self.book_id.clone(),
            session.current_page().chapter_index,
            session.current_page_index,
        );
        if let Err(e) = self.progress_store.save(&progress) {
            tracing::warn!("Failed to save progress for {}: {}", self.book_id, e);
        }
    }
}
