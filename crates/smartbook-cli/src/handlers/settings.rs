use crate::cli::{SettingsAction, SettingsSetArgs};
use crate::context::CliContext;
use crate::output;
use chrono::Utc;
use serde::Serialize;
use smartbook_domain::{FontFamily, ReaderSettings, ThemeColors};

#[derive(Serialize)]
struct SettingsView {
    #[serde(flatten)]
    settings: ReaderSettings,
    colors: ThemeColors,
}

impl From<ReaderSettings> for SettingsView {
    fn from(settings: ReaderSettings) -> Self {
        Self {
            colors: settings.colors(),
            settings,
        }
    }
}

pub fn handle(ctx: &CliContext, action: SettingsAction) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => output::output_success(SettingsView::from(ctx.reader_settings()?)),
        SettingsAction::Set(args) => {
            let settings = handle_set(ctx, args)?;
            output::output_success(SettingsView::from(settings))
        }
    }
}

fn handle_set(ctx: &CliContext, args: SettingsSetArgs) -> anyhow::Result<ReaderSettings> {
    let mut sync = ctx.settings_sync()?;
    let mut settings = sync.current().clone();

    if let Some(name) = args.font_family {
        match FontFamily::from_name(&name) {
            Some(family) => settings.font_family = family,
            None => output::output_error(&format!("Unknown font family: {}", name)),
        }
    }
    if let Some(size) = args.font_size {
        settings = settings.with_font_size(size);
    }
    if let Some(spacing) = args.line_spacing {
        settings = settings.with_line_spacing(spacing);
    }
    if let Some(theme) = args.theme {
        settings.background_theme = theme.into();
    }
    if let Some(alignment) = args.alignment {
        settings.text_alignment = alignment.into();
    }
    if let Some(style) = args.page_turn {
        settings.page_turn_style = style.into();
    }

    sync.update(settings, Utc::now())?;
    // The process exits right after, so a debounced change is written now.
    sync.flush()?;
    Ok(sync.current().clone())
}
