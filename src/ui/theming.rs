// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection, accent presets and the color scheme derived from them.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the chrome and preview cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand: Color,
    pub border: Color,
    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_100,
            text_primary: palette::SLATE_950,
            text_secondary: palette::SLATE_500,
            brand: palette::BRAND_500,
            border: palette::SLATE_300,
            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_900,
            surface_secondary: palette::SLATE_800,
            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_300,
            brand: palette::BRAND_300,
            border: palette::SLATE_500,
            error: palette::ERROR_500,
        }
    }

    /// Scheme matching an already resolved Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. System mode asks the OS and
    /// defaults to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Next mode for the header toggle: Light → Dark → System → Light.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// Iced theme for this mode, with `accent` merged over the base palette.
    #[must_use]
    pub fn iced_theme(self, accent: AccentColor) -> Theme {
        let (name, base) = if self.is_dark() {
            ("Iced Preview Dark", Palette::DARK)
        } else {
            ("Iced Preview Light", Palette::LIGHT)
        };
        Theme::custom(
            name,
            Palette {
                primary: accent.color(),
                success: palette::SUCCESS_500,
                warning: palette::WARNING_500,
                danger: palette::ERROR_500,
                ..base
            },
        )
    }
}

/// Primary color preset. Missing or unset values fall back to indigo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Indigo,
    Emerald,
    Blue,
    Amber,
}

impl AccentColor {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            AccentColor::Indigo => palette::BRAND_500,
            AccentColor::Emerald => palette::EMERALD_500,
            AccentColor::Blue => palette::BLUE_500,
            AccentColor::Amber => palette::AMBER_500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_surfaces_differ() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
        assert_eq!(ColorScheme::for_mode(ThemeMode::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_mode(ThemeMode::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = ThemeMode::Light;
        assert_eq!(start.cycle(), ThemeMode::Dark);
        assert_eq!(start.cycle().cycle(), ThemeMode::System);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        let light = ThemeMode::Light.iced_theme(AccentColor::default());
        let dark = ThemeMode::Dark.iced_theme(AccentColor::default());
        assert!(!light.extended_palette().is_dark);
        assert!(dark.extended_palette().is_dark);
        assert_eq!(light.palette().background, Palette::LIGHT.background);
    }

    #[test]
    fn accent_is_merged_over_the_base_palette() {
        let theme = ThemeMode::Dark.iced_theme(AccentColor::Amber);
        assert_eq!(theme.palette().primary, palette::AMBER_500);
        assert_eq!(theme.palette().text, Palette::DARK.text);
        assert_eq!(theme.palette().warning, palette::WARNING_500);
        assert_eq!(ColorScheme::for_theme(&theme), ColorScheme::dark());
    }
}
