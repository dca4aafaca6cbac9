pub mod book;
pub mod error;
pub mod paginator;
pub mod progress;
pub mod reader;
pub mod settings;
pub mod settings_sync;
pub mod store;
pub mod transition;

pub use book::{BookContent, BookPage, Chapter};
pub use error::ReaderError;
pub use paginator::{chars_per_page, paginate};
pub use progress::ReadingProgress;
pub use reader::{Reader, ReaderStatus, TocEntry};
pub use settings::{
    theme, BackgroundTheme, FontFamily, PageTurnStyle, ReaderSettings, TextAlignment, ThemeColors,
};
pub use settings_sync::SettingsSync;
pub use store::{BookContentSource, ProgressStore, SettingsStore};
pub use transition::{
    action_for_gesture, apply_gesture, Gesture, GestureOutcome, PageTransition, ReaderAction,
    TransitionFrame, TurnDirection,
};
