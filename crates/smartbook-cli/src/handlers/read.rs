use crate::cli::{NavAction, ReadArgs};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use smartbook_domain::{Reader, ReaderStatus, ThemeColors, TocEntry};
use smartbook_persistence::JsonBookSource;

#[derive(Serialize)]
struct ReaderView<'a> {
    book_id: &'a str,
    book_title: Option<&'a str>,
    status: ReaderStatus,
    moved: bool,
    page_index: Option<usize>,
    page_count: usize,
    chapter_index: Option<usize>,
    chapter_title: Option<&'a str>,
    progress: Option<f64>,
    colors: ThemeColors,
    content: Option<&'a str>,
    chapters: Vec<TocEntry>,
}

fn default_book_id(args: &ReadArgs) -> String {
    args.book
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.book.display().to_string())
}

pub async fn handle(ctx: &CliContext, args: ReadArgs) -> anyhow::Result<()> {
    let book_id = args.book_id.clone().unwrap_or_else(|| default_book_id(&args));
    let settings = ctx.reader_settings()?;
    let mut reader = Reader::new(book_id, settings, ctx.progress.clone());

    if reader.load(&JsonBookSource, &args.book).await != ReaderStatus::Ready {
        let message = reader
            .error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| format!("Book content unavailable: {}", args.book.display()));
        output::output_error(&message);
    }

    let moved = match (args.action, args.chapter, args.page) {
        (Some(NavAction::Next), _, _) => reader.next_page(),
        (Some(NavAction::Previous), _, _) => reader.previous_page(),
        (Some(NavAction::NextChapter), _, _) => reader.next_chapter(),
        (Some(NavAction::PreviousChapter), _, _) => reader.previous_chapter(),
        (None, Some(chapter), _) => reader.go_to_chapter(chapter),
        (None, None, Some(page)) => reader.go_to_page(page),
        (None, None, None) => false,
    };

    let view = ReaderView {
        book_id: reader.book_id(),
        book_title: reader.book_title(),
        status: reader.status(),
        moved,
        page_index: reader.current_page_index(),
        page_count: reader.pages().len(),
        chapter_index: reader.current_chapter_index(),
        chapter_title: reader.current_chapter_title(),
        progress: reader.progress_fraction(),
        colors: reader.settings().colors(),
        content: reader.current_page().map(|p| p.content.as_str()),
        chapters: reader.table_of_contents(),
    };
    output::output_success(view)?;

    reader.close();
    Ok(())
}
