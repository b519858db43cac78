// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the layout chrome and the preview surfaces.
//!
//! Colors, spacing and sizes live here so the styles in [`crate::ui::styles`]
//! and the views never hard-code numbers.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const SLATE_950: Color = Color::from_rgb(0.07, 0.08, 0.10);
    pub const SLATE_900: Color = Color::from_rgb(0.11, 0.12, 0.15);
    pub const SLATE_800: Color = Color::from_rgb(0.16, 0.18, 0.22);
    pub const SLATE_500: Color = Color::from_rgb(0.42, 0.45, 0.50);
    pub const SLATE_300: Color = Color::from_rgb(0.76, 0.79, 0.84);
    pub const SLATE_100: Color = Color::from_rgb(0.94, 0.95, 0.97);

    // Brand (indigo)
    pub const BRAND_300: Color = Color::from_rgb(0.55, 0.60, 0.98);
    pub const BRAND_500: Color = Color::from_rgb(0.31, 0.36, 0.90);

    // Accent presets
    pub const EMERALD_500: Color = Color::from_rgb(0.06, 0.73, 0.51);
    pub const BLUE_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const AMBER_500: Color = Color::from_rgb(0.96, 0.62, 0.04);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.20, 0.24);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.62, 0.10);
    pub const SUCCESS_500: Color = Color::from_rgb(0.18, 0.64, 0.38);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.12;
    /// Peak opacity of the scrim shown while the theme changes.
    pub const MEDIUM: f32 = 0.5;
    pub const DISABLED: f32 = 0.45;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 52.0;
    pub const FOOTER_HEIGHT: f32 = 32.0;
    pub const SIDEBAR_WIDTH: f32 = 240.0;
    /// Sidebar showing only file numbers.
    pub const SIDEBAR_SLIM_WIDTH: f32 = 64.0;
    /// Sidebar showing file numbers with their kind.
    pub const SIDEBAR_SLIM_PLUS_WIDTH: f32 = 128.0;
    pub const TOOLBAR_HEIGHT: f32 = 44.0;
    /// Width of the PDF / spreadsheet / unsupported cards.
    pub const CARD_WIDTH: f32 = 520.0;
    /// Width of the zoom percentage label, so buttons do not jump.
    pub const ZOOM_LABEL_WIDTH: f32 = 56.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 18.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and Radii
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const CARD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < 1.0);

    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(typography::SUBTITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::CARD_WIDTH > sizing::SIDEBAR_WIDTH);
    assert!(sizing::SIDEBAR_WIDTH > sizing::SIDEBAR_SLIM_PLUS_WIDTH);
    assert!(sizing::SIDEBAR_SLIM_PLUS_WIDTH > sizing::SIDEBAR_SLIM_WIDTH);
    assert!(opacity::MEDIUM > opacity::SUBTLE && opacity::MEDIUM < opacity::OPAQUE);
};
