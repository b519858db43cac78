// SPDX-License-Identifier: MPL-2.0
//! Container styles for the layout regions and preview cards.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header and footer bars.
pub fn bar(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        text_color: Some(ext.background.weak.text),
        ..Default::default()
    }
}

/// Sidebar column, separated from the preview by a thin border.
pub fn sidebar(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        border: Border {
            color: ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Raised card used by the PDF, spreadsheet, unsupported and error panels.
pub fn card(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        text_color: Some(ext.background.base.text),
        border: Border {
            color: ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Card variant for render failures.
pub fn error_card(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        border: Border {
            color: ext.danger.base.color,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..card(theme)
    }
}

/// Monospace-looking well that shows a URL.
pub fn url_well(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Dimming layer drawn over the window while the theme changes.
/// `strength` runs from 1.0 (peak) down to 0.0 (gone).
pub fn scrim(strength: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::MEDIUM * strength.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
