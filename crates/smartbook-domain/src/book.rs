use serde::{Deserialize, Serialize};

/// A titled unit of book text as extracted by the content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookContent {
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// One screen of text. Pages are rebuilt wholesale on repagination and never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPage {
    pub content: String,
    pub chapter_index: usize,
    pub chapter_title: String,
}
