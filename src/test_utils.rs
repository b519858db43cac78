// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Zoom levels and opacities are `f32`; compare them with the re-exported
//! `approx` macro rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

use crate::preview::PreviewState;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Preview state over `files`, positioned on the first one.
pub fn preview_with(files: &[&str]) -> PreviewState {
    let mut state = PreviewState::default();
    state.set_files(files.iter().copied());
    state
}
