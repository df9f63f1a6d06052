use super::theme_mode::ThemeMode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub contrast_text: &'static str,
}

pub const PRIMARY: PaletteColor = PaletteColor {
    main: "#2196F3",
    light: "#64B5F6",
    dark: "#1976D2",
    contrast_text: "#FFFFFF",
};

pub const SECONDARY: PaletteColor = PaletteColor {
    main: "#F44336",
    light: "#FF7961",
    dark: "#BA000D",
    contrast_text: "#FFFFFF",
};

/// Presentation values derived from a [`ThemeMode`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub mode: ThemeMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub card_hover_shadow: &'static str,
    pub border_radius: u8,
    pub font_family: &'static str,
}

impl ThemeTokens {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let (background_default, background_paper, text_primary, text_secondary, shadow) =
            match mode {
                ThemeMode::Light => (
                    "#F5F5F5",
                    "#FFFFFF",
                    "rgba(0, 0, 0, 0.87)",
                    "rgba(0, 0, 0, 0.6)",
                    "0 10px 20px rgba(0,0,0,0.1)",
                ),
                ThemeMode::Dark => (
                    "#121212",
                    "#1E1E1E",
                    "rgba(255, 255, 255, 0.87)",
                    "rgba(255, 255, 255, 0.6)",
                    "0 10px 20px rgba(0,0,0,0.5)",
                ),
            };

        Self {
            mode,
            primary: PRIMARY,
            secondary: SECONDARY,
            background_default,
            background_paper,
            text_primary,
            text_secondary,
            card_hover_shadow: shadow,
            border_radius: 8,
            font_family: "'Poppins', sans-serif",
        }
    }
}
