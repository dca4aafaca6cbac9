use async_trait::async_trait;
use smartbook_domain::{BookContent, BookContentSource};
use std::path::Path;

/// Reads pre-extracted book text from a JSON file of the form
/// `{"title": ..., "chapters": [{"title": ..., "content": ...}]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBookSource;

#[async_trait]
impl BookContentSource for JsonBookSource {
    async fn load_chapters(&self, path: &Path) -> Option<BookContent> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to read book {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_slice::<BookContent>(&bytes) {
            Ok(content) => {
                tracing::info!(
                    "Loaded \"{}\" with {} chapters from {}",
                    content.title,
                    content.chapters.len(),
                    path.display()
                );
                Some(content)
            }
            Err(e) => {
                tracing::warn!("Failed to parse book {}: {}", path.display(), e);
                None
            }
        }
    }
}
