//! Theme and color palette definitions for the terminal UI.

use std::fmt;

use ratatui::style::{palette::tailwind, Color};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub surface_bg: Color,
    pub text: Color,
    pub text_dim: Color,
    pub heading: Color,
    pub border_color: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub scroll_bar_fg: Color,
    pub input_editing: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        let basic_colors = Self {
            buffer_bg: Color::Black,
            surface_bg: Color::Black,
            text: Color::White,
            text_dim: Color::DarkGray,
            heading: color.c400,
            border_color: color.c400,
            accent: color.c500,
            accent_soft: color.c300,
            scroll_bar_fg: Color::Gray,
            input_editing: Color::LightYellow,
        };

        let tw_colors = Self {
            buffer_bg: tailwind::SLATE.c950,
            surface_bg: tailwind::SLATE.c900,
            text: tailwind::SLATE.c200,
            text_dim: tailwind::SLATE.c500,
            heading: color.c300,
            border_color: color.c400,
            accent: color.c500,
            accent_soft: color.c300,
            scroll_bar_fg: tailwind::SLATE.c800,
            input_editing: tailwind::AMBER.c600,
        };

        if true_color_enabled {
            tw_colors
        } else {
            basic_colors
        }
    }

    /// High-contrast palette used when accessibility mode is on. Ignores the
    /// theme so text stays maximally legible.
    pub fn accessible() -> Self {
        Self {
            buffer_bg: Color::Black,
            surface_bg: Color::Black,
            text: Color::White,
            text_dim: Color::Gray,
            heading: Color::Yellow,
            border_color: Color::White,
            accent: Color::Yellow,
            accent_soft: Color::LightYellow,
            scroll_bar_fg: Color::White,
            input_editing: Color::LightYellow,
        }
    }
}

/// Available visual modes for the page.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Theme {
    Default,
    Dark,
    Creative,
}

// Fallback palettes for terminals without true color support.
const BASIC_BLUE_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightCyan,
    c100: Color::LightCyan,
    c200: Color::LightCyan,
    c300: Color::LightCyan,
    c400: Color::LightCyan,
    c500: Color::Cyan,
    c600: Color::Cyan,
    c700: Color::Cyan,
    c800: Color::Cyan,
    c900: Color::Cyan,
    c950: Color::Cyan,
};

const BASIC_GRAY_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::White,
    c100: Color::White,
    c200: Color::Gray,
    c300: Color::Gray,
    c400: Color::Gray,
    c500: Color::DarkGray,
    c600: Color::DarkGray,
    c700: Color::DarkGray,
    c800: Color::DarkGray,
    c900: Color::DarkGray,
    c950: Color::DarkGray,
};

const BASIC_MAGENTA_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightMagenta,
    c100: Color::LightMagenta,
    c200: Color::LightMagenta,
    c300: Color::LightMagenta,
    c400: Color::LightMagenta,
    c500: Color::Magenta,
    c600: Color::Magenta,
    c700: Color::Magenta,
    c800: Color::Magenta,
    c900: Color::Magenta,
    c950: Color::Magenta,
};

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Default => write!(f, "default"),
            Theme::Dark => write!(f, "dark"),
            Theme::Creative => write!(f, "creative"),
        }
    }
}

impl Theme {
    /// Parses a theme from its persisted name, defaulting to Default.
    pub fn from_string(value: &str) -> Theme {
        match value {
            "default" => Theme::Default,
            "dark" => Theme::Dark,
            "creative" => Theme::Creative,
            _ => Theme::Default,
        }
    }

    /// Strict variant of [`Theme::from_string`] used where unknown names must
    /// stay visible to the caller instead of silently becoming the default.
    pub fn try_from_string(value: &str) -> Option<Theme> {
        match value {
            "default" => Some(Theme::Default),
            "dark" => Some(Theme::Dark),
            "creative" => Some(Theme::Creative),
            _ => None,
        }
    }

    /// Fixed rotation used by the theme toggle.
    pub fn next(self) -> Theme {
        match self {
            Theme::Default => Theme::Creative,
            Theme::Creative => Theme::Dark,
            Theme::Dark => Theme::Default,
        }
    }

    /// Indicator glyph shown in the header.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Default => "☽",
            Theme::Dark => "☀",
            Theme::Creative => "✶",
        }
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(self, true_color_enabled: bool) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Default => &tailwind::BLUE,
                Theme::Dark => &tailwind::SLATE,
                Theme::Creative => &tailwind::VIOLET,
            }
        } else {
            match self {
                Theme::Default => &BASIC_BLUE_PALETTE,
                Theme::Dark => &BASIC_GRAY_PALETTE,
                Theme::Creative => &BASIC_MAGENTA_PALETTE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_defaults_unknown_names() {
        assert_eq!(Theme::from_string("dark"), Theme::Dark);
        assert_eq!(Theme::from_string("creative"), Theme::Creative);
        assert_eq!(Theme::from_string("neon"), Theme::Default);
        assert_eq!(Theme::from_string(""), Theme::Default);
    }

    #[test]
    fn try_from_string_rejects_unknown_names() {
        assert_eq!(Theme::try_from_string("dark"), Some(Theme::Dark));
        assert_eq!(Theme::try_from_string("neon"), None);
    }

    #[test]
    fn display_round_trips_through_from_string() {
        for theme in [Theme::Default, Theme::Dark, Theme::Creative] {
            assert_eq!(Theme::from_string(&theme.to_string()), theme);
        }
    }

    #[test]
    fn toggle_rotation_is_fixed() {
        assert_eq!(Theme::Default.next(), Theme::Creative);
        assert_eq!(Theme::Creative.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Default);
    }

    #[test]
    fn palettes_differ_between_themes() {
        let default = Theme::Default.to_palette(true);
        let creative = Theme::Creative.to_palette(true);
        assert_ne!(default.c500, creative.c500);
    }
}
