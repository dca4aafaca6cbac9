use clap::{Args, Parser, Subcommand, ValueEnum};
use smartbook_domain::{BackgroundTheme, PageTurnStyle, TextAlignment};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartbook")]
#[command(about = "Paginate books and track reading progress", long_about = None)]
#[command(version)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SMARTBOOK_BUILD_COMMIT"), ")"))]
pub struct Cli {
    /// Directory for progress and settings files (or set SMARTBOOK_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", env = "SMARTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a book into pages without opening a reading session
    Paginate(PaginateArgs),
    /// Open a book, optionally navigate, and show the current page
    Read(ReadArgs),
    /// Reading progress operations
    Progress(ProgressCommand),
    /// Reader settings operations
    Settings(SettingsCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct PaginateArgs {
    /// Book file (JSON with title and chapters)
    pub book: PathBuf,
    /// Override the stored font size
    #[arg(long)]
    pub font_size: Option<u32>,
}

#[derive(Args)]
pub struct ReadArgs {
    /// Book file (JSON with title and chapters)
    pub book: PathBuf,
    /// Identifier progress is stored under; defaults to the file stem
    #[arg(long)]
    pub book_id: Option<String>,
    #[arg(long, value_enum, conflicts_with_all = ["chapter", "page"])]
    pub action: Option<NavAction>,
    /// Jump to a chapter (0-based)
    #[arg(long, conflicts_with = "page")]
    pub chapter: Option<usize>,
    /// Jump to a page (0-based)
    #[arg(long)]
    pub page: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NavAction {
    Next,
    Previous,
    NextChapter,
    PreviousChapter,
}

#[derive(Args)]
pub struct ProgressCommand {
    #[command(subcommand)]
    pub action: ProgressAction,
}

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Show saved progress for a book
    Show {
        #[arg(long)]
        book_id: String,
    },
    /// List saved progress for every book
    List,
    /// Forget saved progress for a book
    Clear {
        #[arg(long)]
        book_id: String,
    },
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the stored reader settings
    Show,
    /// Change reader settings
    Set(SettingsSetArgs),
}

#[derive(Args)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub font_size: Option<u32>,
    #[arg(long)]
    pub font_family: Option<String>,
    #[arg(long)]
    pub line_spacing: Option<u32>,
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    #[arg(long, value_enum)]
    pub alignment: Option<AlignmentArg>,
    #[arg(long, value_enum)]
    pub page_turn: Option<PageTurnArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Sepia,
    Light,
}

impl From<ThemeArg> for BackgroundTheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => BackgroundTheme::Dark,
            ThemeArg::Sepia => BackgroundTheme::Sepia,
            ThemeArg::Light => BackgroundTheme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlignmentArg {
    Leading,
    Center,
    Trailing,
}

impl From<AlignmentArg> for TextAlignment {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Leading => TextAlignment::Leading,
            AlignmentArg::Center => TextAlignment::Center,
            AlignmentArg::Trailing => TextAlignment::Trailing,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PageTurnArg {
    Slide,
    Curl,
    Fade,
}

impl From<PageTurnArg> for PageTurnStyle {
    fn from(arg: PageTurnArg) -> Self {
        match arg {
            PageTurnArg::Slide => PageTurnStyle::Slide,
            PageTurnArg::Curl => PageTurnStyle::Curl,
            PageTurnArg::Fade => PageTurnStyle::Fade,
        }
    }
}
