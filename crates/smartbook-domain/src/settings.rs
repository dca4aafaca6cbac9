//! Reader display settings.
//!
//! A `ReaderSettings` value is the only input to pagination besides the raw
//! chapter text. It is passed explicitly to the paginator and the reader; the
//! settings store persists it.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_FONT_SIZE: u32 = 14;
pub const MAX_FONT_SIZE: u32 = 28;
pub const FONT_SIZE_STEP: u32 = 1;
pub const DEFAULT_FONT_SIZE: u32 = 18;

pub const MIN_LINE_SPACING: u32 = 4;
pub const MAX_LINE_SPACING: u32 = 16;
pub const LINE_SPACING_STEP: u32 = 2;
pub const DEFAULT_LINE_SPACING: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "System")]
    System,
    #[serde(rename = "Georgia")]
    Georgia,
    #[serde(rename = "Palatino")]
    Palatino,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Helvetica Neue")]
    HelveticaNeue,
    #[serde(rename = "Songti SC")]
    SongtiSc,
    #[serde(rename = "Kaiti SC")]
    KaitiSc,
    #[serde(rename = "PingFang SC")]
    PingFangSc,
}

impl FontFamily {
    pub const ALL: [FontFamily; 8] = [
        FontFamily::System,
        FontFamily::Georgia,
        FontFamily::Palatino,
        FontFamily::TimesNewRoman,
        FontFamily::HelveticaNeue,
        FontFamily::SongtiSc,
        FontFamily::KaitiSc,
        FontFamily::PingFangSc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::System => "System",
            FontFamily::Georgia => "Georgia",
            FontFamily::Palatino => "Palatino",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::HelveticaNeue => "Helvetica Neue",
            FontFamily::SongtiSc => "Songti SC",
            FontFamily::KaitiSc => "Kaiti SC",
            FontFamily::PingFangSc => "PingFang SC",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    Dark,
    Sepia,
    #[default]
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTurnStyle {
    #[default]
    Slide,
    Curl,
    Fade,
}

/// Background/text color pair, as `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
}

pub fn theme(background_theme: BackgroundTheme) -> ThemeColors {
    match background_theme {
        BackgroundTheme::Dark => ThemeColors {
            background: "#1C1C1E",
            text: "#E5E5EA",
        },
        BackgroundTheme::Sepia => ThemeColors {
            background: "#F4ECD8",
            text: "#5B4636",
        },
        BackgroundTheme::Light => ThemeColors {
            background: "#FFFFFF",
            text: "#1C1C1E",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderSettings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default = "default_line_spacing")]
    pub line_spacing: u32,
    #[serde(default)]
    pub background_theme: BackgroundTheme,
    #[serde(default)]
    pub text_alignment: TextAlignment,
    #[serde(default)]
    pub page_turn_style: PageTurnStyle,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_line_spacing() -> u32 {
    DEFAULT_LINE_SPACING
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            line_spacing: DEFAULT_LINE_SPACING,
            background_theme: BackgroundTheme::default(),
            text_alignment: TextAlignment::default(),
            page_turn_style: PageTurnStyle::default(),
        }
    }
}

fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Clamps into range and snaps down onto the 4, 6, 8, ... grid.
fn clamp_line_spacing(spacing: u32) -> u32 {
    let clamped = spacing.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING);
    clamped - (clamped - MIN_LINE_SPACING) % LINE_SPACING_STEP
}

impl ReaderSettings {
    pub fn colors(&self) -> ThemeColors {
        theme(self.background_theme)
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = clamp_font_size(size);
        self
    }

    pub fn with_line_spacing(mut self, spacing: u32) -> Self {
        self.line_spacing = clamp_line_spacing(spacing);
        self
    }

    pub fn increase_font_size(&mut self) {
        self.font_size = clamp_font_size(self.font_size.saturating_add(FONT_SIZE_STEP));
    }

    pub fn decrease_font_size(&mut self) {
        self.font_size = clamp_font_size(self.font_size.saturating_sub(FONT_SIZE_STEP));
    }

    pub fn increase_line_spacing(&mut self) {
        self.line_spacing =
            clamp_line_spacing(self.line_spacing.saturating_add(LINE_SPACING_STEP));
    }

    pub fn decrease_line_spacing(&mut self) {
        self.line_spacing =
            clamp_line_spacing(self.line_spacing.saturating_sub(LINE_SPACING_STEP));
    }

    /// Pulls persisted values back into their declared ranges.
    pub fn normalized(mut self) -> Self {
        self.font_size = clamp_font_size(self.font_size);
        self.line_spacing = clamp_line_spacing(self.line_spacing);
        self
    }

    pub fn affects_pagination(&self, other: &ReaderSettings) -> bool {
        self.font_size != other.font_size
            || self.font_family != other.font_family
            || self.line_spacing != other.line_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ReaderSettings::default();
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.font_family, FontFamily::System);
        assert_eq!(settings.line_spacing, 8);
        assert_eq!(settings.page_turn_style, PageTurnStyle::Slide);
    }

    #[test]
    fn test_font_size_stepper_clamps() {
        let mut settings = ReaderSettings::default().with_font_size(28);
        settings.increase_font_size();
        assert_eq!(settings.font_size, 28);

        let mut settings = settings.with_font_size(3);
        assert_eq!(settings.font_size, 14);
        settings.decrease_font_size();
        assert_eq!(settings.font_size, 14);
        settings.increase_font_size();
        assert_eq!(settings.font_size, 15);
    }

    #[test]
    fn test_line_spacing_snaps_to_step() {
        let settings = ReaderSettings::default().with_line_spacing(9);
        assert_eq!(settings.line_spacing, 8);

        let mut settings = settings.with_line_spacing(40);
        assert_eq!(settings.line_spacing, 16);
        settings.increase_line_spacing();
        assert_eq!(settings.line_spacing, 16);
        settings.decrease_line_spacing();
        assert_eq!(settings.line_spacing, 14);

        let settings = settings.with_line_spacing(0);
        assert_eq!(settings.line_spacing, 4);
    }

    #[test]
    fn test_normalized_clamps_persisted_values() {
        let settings = ReaderSettings {
            font_size: 99,
            line_spacing: 1,
            ..Default::default()
        }
        .normalized();
        assert_eq!(settings.font_size, 28);
        assert_eq!(settings.line_spacing, 4);
    }

    #[test]
    fn test_theme_lookup() {
        assert_eq!(theme(BackgroundTheme::Dark).background, "#1C1C1E");
        assert_eq!(theme(BackgroundTheme::Sepia).text, "#5B4636");

        let settings = ReaderSettings {
            background_theme: BackgroundTheme::Light,
            ..Default::default()
        };
        assert_eq!(settings.colors(), theme(BackgroundTheme::Light));
    }

    #[test]
    fn test_affects_pagination() {
        let base = ReaderSettings::default();

        let themed = ReaderSettings {
            background_theme: BackgroundTheme::Sepia,
            page_turn_style: PageTurnStyle::Curl,
            ..base.clone()
        };
        assert!(!base.affects_pagination(&themed));

        let bigger = base.clone().with_font_size(24);
        assert!(base.affects_pagination(&bigger));
    }

    #[test]
    fn test_font_family_serializes_as_display_name() {
        let settings = ReaderSettings {
            font_family: FontFamily::TimesNewRoman,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Times New Roman\""));
        assert_eq!(FontFamily::from_name("songti sc"), Some(FontFamily::SongtiSc));
        assert_eq!(FontFamily::from_name("Comic Sans"), None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ReaderSettings =
            serde_json::from_str(r#"{"background_theme":"dark"}"#).unwrap();
        assert_eq!(settings.background_theme, BackgroundTheme::Dark);
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
    }
}
