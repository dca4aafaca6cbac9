use chrono::{Duration, Utc};
use smartbook_domain::*;
use smartbook_persistence::*;
use std::sync::Arc;
use tempfile::tempdir;

fn write_book(dir: &std::path::Path) -> std::path::PathBuf {
    let book = BookContent {
        title: "Essays".to_string(),
        chapters: vec![
            Chapter::new("First", "Short opening.\n".repeat(400)),
            Chapter::new("Second", "A middle chapter."),
            Chapter::new("Third", "The end."),
        ],
    };
    let path = dir.join("essays.json");
    std::fs::write(&path, serde_json::to_vec(&book).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_reader_progress_persists_to_disk() {
    let dir = tempdir().unwrap();
    let book_path = write_book(dir.path());
    let progress_path = dir.path().join("data/progress.json");

    let store = Arc::new(JsonProgressStore::new(&progress_path));
    let mut reader = Reader::new("essays", ReaderSettings::default(), store);
    assert_eq!(
        reader.load(&JsonBookSource, &book_path).await,
        ReaderStatus::Ready
    );
    assert!(reader.next_page());
    assert!(reader.next_chapter());
    let page = reader.current_page_index().unwrap();
    reader.close();

    let saved = JsonProgressStore::new(&progress_path)
        .load("essays")
        .unwrap()
        .unwrap();
    assert_eq!(saved.chapter_index, 1);
    assert_eq!(saved.page_index, page);

    let store = Arc::new(JsonProgressStore::new(&progress_path));
    let mut reopened = Reader::new("essays", ReaderSettings::default(), store);
    reopened.load(&JsonBookSource, &book_path).await;
    assert_eq!(reopened.current_chapter_title(), Some("Second"));
}

#[tokio::test]
async fn test_missing_book_file_is_content_unavailable() {
    let dir = tempdir().unwrap();
    let store = Arc::new(InMemoryProgressStore::new());
    let mut reader = Reader::new("missing", ReaderSettings::default(), store.clone());

    let status = reader
        .load(&JsonBookSource, &dir.path().join("missing.json"))
        .await;
    assert_eq!(status, ReaderStatus::Error);
    assert!(store.is_empty());
}

#[test]
fn test_settings_sync_writes_through_json_store() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    let store = Arc::new(JsonSettingsStore::new(&settings_path));
    let mut sync = SettingsSync::load(store.clone(), 300).unwrap();
    let now = Utc::now();

    let bigger = sync.current().clone().with_font_size(24);
    sync.update(bigger, now).unwrap();
    assert!(!settings_path.exists());

    assert!(sync.tick(now + Duration::milliseconds(300)).unwrap());
    assert_eq!(store.load().unwrap().font_size, 24);

    let dark = ReaderSettings {
        background_theme: BackgroundTheme::Dark,
        ..sync.current().clone()
    };
    assert!(sync.update(dark, now).unwrap());
    assert_eq!(
        JsonSettingsStore::new(&settings_path)
            .load()
            .unwrap()
            .background_theme,
        BackgroundTheme::Dark
    );
}
