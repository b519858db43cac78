// SPDX-License-Identifier: MPL-2.0
//! Zoom level of the preview.

pub use crate::config::{
    DEFAULT_ZOOM_LEVEL, DOUBLE_ACTIVATION_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, ZOOM_STEP,
};

/// Zoom factor, guaranteed to be within the valid range (0.4–3.0) and
/// rounded to one decimal place.
///
/// Stepping clamps at the bounds, while [`ZoomLevel::try_new`] rejects
/// out-of-range input outright. Callers rely on that asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn clamped(level: f32) -> Self {
        if level.is_nan() {
            return Self::default();
        }
        Self(round_to_tenth(level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)))
    }

    /// Creates a zoom level, or `None` when `level` is outside the valid range.
    #[must_use]
    pub fn try_new(level: f32) -> Option<Self> {
        (MIN_ZOOM_LEVEL..=MAX_ZOOM_LEVEL)
            .contains(&level)
            .then(|| Self(round_to_tenth(level)))
    }

    /// Returns the raw factor (1.0 = natural size).
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the factor as a whole percentage, for labels.
    #[must_use]
    pub fn percent(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u32;
        percent
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_LEVEL
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_LEVEL
    }

    #[must_use]
    pub fn is_default(self) -> bool {
        self.0 == DEFAULT_ZOOM_LEVEL
    }

    /// Increases zoom by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::clamped(self.0 + ZOOM_STEP)
    }

    /// Decreases zoom by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::clamped(self.0 - ZOOM_STEP)
    }

    /// The level a double activation switches to.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_default() {
            Self(DOUBLE_ACTIVATION_ZOOM_LEVEL)
        } else {
            Self::default()
        }
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_LEVEL)
    }
}

fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
