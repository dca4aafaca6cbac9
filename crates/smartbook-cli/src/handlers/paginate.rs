use crate::cli::PaginateArgs;
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use smartbook_domain::{chars_per_page, paginate, BookContentSource};
use smartbook_persistence::JsonBookSource;

#[derive(Serialize)]
struct PageSummary<'a> {
    index: usize,
    chapter_index: usize,
    chapter_title: &'a str,
    chars: usize,
    content: &'a str,
}

#[derive(Serialize)]
struct PaginationReport<'a> {
    title: &'a str,
    font_size: u32,
    chars_per_page: usize,
    page_count: usize,
    pages: Vec<PageSummary<'a>>,
}

pub async fn handle(ctx: &CliContext, args: PaginateArgs) -> anyhow::Result<()> {
    let mut settings = ctx.reader_settings()?;
    if let Some(size) = args.font_size {
        settings = settings.with_font_size(size);
    }

    let Some(content) = JsonBookSource.load_chapters(&args.book).await else {
        output::output_error(&format!(
            "Book content unavailable: {}",
            args.book.display()
        ));
    };

    let pages = paginate(&content.chapters, &settings);
    let summaries = pages
        .iter()
        .enumerate()
        .map(|(index, page)| PageSummary {
            index,
            chapter_index: page.chapter_index,
            chapter_title: &page.chapter_title,
            chars: page.content.chars().count(),
            content: &page.content,
        })
        .collect();

    output::output_success(PaginationReport {
        title: &content.title,
        font_size: settings.font_size,
        chars_per_page: chars_per_page(settings.font_size),
        page_count: pages.len(),
        pages: summaries,
    })
}
