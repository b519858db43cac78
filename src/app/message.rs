// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::layout;
use crate::ui::preview::component;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Preview(component::Message),
    Layout(layout::Message),
    /// Periodic tick used to expire the status line.
    Tick(Instant),
    /// Animation frame while the theme change fades in.
    ThemeFrame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// File references to preview instead of the demo list.
    pub files: Vec<String>,
}
