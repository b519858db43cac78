// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Captions, hints and other de-emphasized copy.
pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub fn error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}
