// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (Retry, Copy), in the accent color.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let accent = theme.extended_palette().primary;
    let background = match status {
        button::Status::Hovered => accent.strong.color,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..accent.base.color
        },
        button::Status::Active | button::Status::Pressed => accent.base.color,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: accent.base.text,
        border: Border {
            color: accent.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Toolbar and header buttons: flat until hovered, dimmed when disabled.
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let text = ext.background.base.text;
    let (background, text_color) = match status {
        button::Status::Active => (Color::TRANSPARENT, text),
        button::Status::Hovered => (ext.background.weak.color, text),
        button::Status::Pressed => (ext.background.strong.color, text),
        button::Status::Disabled => (
            Color::TRANSPARENT,
            Color {
                a: opacity::DISABLED,
                ..text
            },
        ),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar row; `selected` marks the file under the cursor.
pub fn sidebar_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();
        let background = match (selected, status) {
            (true, _) => Color {
                a: opacity::SUBTLE * 2.0,
                ..ext.primary.base.color
            },
            (false, button::Status::Hovered) => ext.background.weak.color,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: ext.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
