use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a reader session.
///
/// An empty chapter is not an error: the paginator turns it into one blank
/// page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Book content unavailable: {}", path.display())]
    ContentUnavailable { path: PathBuf },
}
