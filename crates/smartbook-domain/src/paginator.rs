//! Splits chapter text into screen-sized pages.
//!
//! The page size is a character budget derived from the font size rather
//! than a text-measurement pass. Window ends are snapped backward to a
//! newline, then to a sentence terminal, so pages break at natural points.

use crate::book::{BookPage, Chapter};
use crate::settings::{ReaderSettings, MIN_FONT_SIZE};

const PAGE_CHAR_BUDGET: usize = 3000;
const REFERENCE_FONT_SIZE: usize = 18;

const SENTENCE_TERMINALS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Characters per page for a font size: `floor(3000 / font_size * 18)`.
///
/// Larger fonts yield fewer characters per page. A zero font size is read as
/// the minimum font size.
pub fn chars_per_page(font_size: u32) -> usize {
    let size = if font_size == 0 { MIN_FONT_SIZE } else { font_size };
    PAGE_CHAR_BUDGET * REFERENCE_FONT_SIZE / size as usize
}

/// Paginates every chapter in order.
///
/// Pure and deterministic. Every chapter contributes at least one page, so a
/// chapter with no text still shows up as a single blank page.
pub fn paginate(chapters: &[Chapter], settings: &ReaderSettings) -> Vec<BookPage> {
    let budget = chars_per_page(settings.font_size);
    let mut pages = Vec::new();

    for (chapter_index, chapter) in chapters.iter().enumerate() {
        let before = pages.len();
        for content in split_chapter(&chapter.content, budget) {
            pages.push(BookPage {
                content,
                chapter_index,
                chapter_title: chapter.title.clone(),
            });
        }

        if pages.len() == before {
            pages.push(BookPage {
                content: String::new(),
                chapter_index,
                chapter_title: chapter.title.clone(),
            });
        }
    }

    tracing::debug!(
        "Paginated {} chapters into {} pages ({} chars/page)",
        chapters.len(),
        pages.len(),
        budget
    );
    pages
}

fn split_chapter(text: &str, budget: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let budget = budget.max(1);
    let mut pages = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + budget).min(chars.len());
        let cut = if end < chars.len() {
            snap_break(&chars[start..end]).map_or(end, |offset| start + offset)
        } else {
            end
        };

        let page: String = chars[start..cut].iter().collect();
        let trimmed = page.trim();
        if !trimmed.is_empty() {
            pages.push(trimmed.to_string());
        }
        start = cut;
    }

    pages
}

/// Offset just past the preferred break inside `window`, if any.
fn snap_break(window: &[char]) -> Option<usize> {
    window
        .iter()
        .rposition(|&c| c == '\n')
        .or_else(|| {
            window
                .iter()
                .rposition(|c| SENTENCE_TERMINALS.contains(c))
        })
        .map(|pos| pos + 1)
}
