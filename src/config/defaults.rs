// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom level bounds and step
//! - **Input**: Swipe and double-activation thresholds
//! - **Derived URLs**: Spreadsheet viewer endpoints and cache sizing
//! - **Transition**: Crossfade duration

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom level applied on every navigation and list replacement.
pub const DEFAULT_ZOOM_LEVEL: f32 = 1.0;

/// Minimum allowed zoom level.
pub const MIN_ZOOM_LEVEL: f32 = 0.4;

/// Maximum allowed zoom level.
pub const MAX_ZOOM_LEVEL: f32 = 3.0;

/// Increment applied by a single zoom in/out.
pub const ZOOM_STEP: f32 = 0.2;

/// Zoom level a double activation toggles to on images.
pub const DOUBLE_ACTIVATION_ZOOM_LEVEL: f32 = 2.0;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Minimum horizontal travel (logical pixels) for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Lower bound accepted from the config file.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Upper bound accepted from the config file.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

/// Two primary clicks closer than this form a double activation.
pub const DOUBLE_ACTIVATION_WINDOW_MS: u64 = 350;

// ==========================================================================
// Derived URL Defaults
// ==========================================================================

/// Embed endpoint of the primary third-party spreadsheet viewer.
pub const DEFAULT_OFFICE_VIEWER_ENDPOINT: &str = "https://view.officeapps.live.com/op/embed.aspx";

/// Embed endpoint of the alternate third-party spreadsheet viewer.
pub const DEFAULT_ALTERNATE_VIEWER_ENDPOINT: &str = "https://docs.google.com/gview";

/// Default number of references kept in the derived URL cache.
pub const DEFAULT_URL_CACHE_CAPACITY: usize = 64;

/// Minimum derived URL cache capacity.
pub const MIN_URL_CACHE_CAPACITY: usize = 8;

/// Maximum derived URL cache capacity.
pub const MAX_URL_CACHE_CAPACITY: usize = 1024;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Crossfade duration when smooth transitions are available (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 180;

/// Maximum crossfade duration accepted from the config file (milliseconds).
pub const MAX_TRANSITION_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_LEVEL > 0.0);
    assert!(MIN_ZOOM_LEVEL < DEFAULT_ZOOM_LEVEL);
    assert!(MAX_ZOOM_LEVEL > DEFAULT_ZOOM_LEVEL);
    assert!(ZOOM_STEP > 0.0);
    assert!(DOUBLE_ACTIVATION_ZOOM_LEVEL <= MAX_ZOOM_LEVEL);
    assert!(DOUBLE_ACTIVATION_ZOOM_LEVEL > DEFAULT_ZOOM_LEVEL);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    // Cache validation
    assert!(MIN_URL_CACHE_CAPACITY > 0);
    assert!(DEFAULT_URL_CACHE_CAPACITY >= MIN_URL_CACHE_CAPACITY);
    assert!(DEFAULT_URL_CACHE_CAPACITY <= MAX_URL_CACHE_CAPACITY);

    // Transition validation
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
};
