pub mod json_book_source;

pub use json_book_source::JsonBookSource;
