// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Layout preferences are merged into the stored settings whenever the user
//! changes them. The open state of the overlay menu is not persisted.

use crate::config::{Config, SettingsStore};
use crate::error::Result;
use crate::ui::layout::LayoutState;

/// Notification key shown when saving fails.
pub const SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Persists the layout preferences through `store`.
///
/// Returns the notification key to display when saving failed. Guarded
/// during tests to keep isolation: unit tests exercise [`store_layout`]
/// directly with an in-memory store.
pub fn persist_preferences(
    store: &mut impl SettingsStore,
    layout: LayoutState,
) -> Option<&'static str> {
    if cfg!(test) {
        return None;
    }

    match store_layout(store, layout) {
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            Some(SAVE_ERROR_KEY)
        }
    }
}

/// Merges `layout` into the stored configuration and saves it.
pub fn store_layout(store: &mut impl SettingsStore, layout: LayoutState) -> Result<Config> {
    store.merge(|config| {
        config.general.theme_mode = layout.theme_mode;
        config.general.accent = layout.accent;
        config.layout.menu_mode = Some(layout.menu_mode);
        config.layout.sidebar_mode = Some(layout.sidebar_mode);
        config.layout.sidebar_collapsed = Some(layout.sidebar_collapsed);
        config.layout.show_footer = Some(layout.show_footer);
    })
}
