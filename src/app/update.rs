// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{persistence, Message};
use crate::config::FileSettingsStore;
use crate::preview::Transition;
use crate::ui::layout::{self, Event as LayoutEvent, LayoutState};
use crate::ui::preview::component::{self, Effect as PreviewEffect};
use iced::Task;
use std::time::{Duration, Instant};

/// How long a status message stays in the footer.
pub const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Transient footer message, stored as an i18n key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub key: &'static str,
    pub shown_at: Instant,
}

impl StatusLine {
    #[must_use]
    pub fn new(key: &'static str, now: Instant) -> Self {
        Self { key, shown_at: now }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= STATUS_DURATION
    }
}

/// Mutable borrows of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub preview: &'a mut component::State,
    pub layout: &'a mut LayoutState,
    pub settings: &'a mut FileSettingsStore,
    pub status: &'a mut Option<StatusLine>,
    pub theme_transition: &'a mut Transition,
}

pub fn handle_preview_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    let (effect, task) = ctx.preview.handle_message(message);
    match effect {
        PreviewEffect::None => {}
        PreviewEffect::Copied => {
            *ctx.status = Some(StatusLine::new("notification-copied", Instant::now()));
        }
    }
    task.map(Message::Preview)
}

pub fn handle_layout_message(
    ctx: &mut UpdateContext<'_>,
    message: layout::Message,
) -> Task<Message> {
    match layout::update(message, ctx.layout) {
        LayoutEvent::None => Task::none(),
        LayoutEvent::PreferencesChanged => {
            persist_layout(ctx);
            Task::none()
        }
        LayoutEvent::ThemeChanged => {
            let now = Instant::now();
            ctx.theme_transition.begin(now, || true);
            tracing::debug!(mode = ?ctx.layout.theme_mode, "theme changed");
            persist_layout(ctx);
            Task::none()
        }
        LayoutEvent::SelectFile(index) => {
            handle_preview_message(ctx, component::Message::GoTo(index))
        }
    }
}

fn persist_layout(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = persistence::persist_preferences(ctx.settings, *ctx.layout) {
        *ctx.status = Some(StatusLine::new(key, Instant::now()));
    }
}

pub fn handle_theme_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.theme_transition.tick(now);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.status.is_some_and(|status| status.is_expired(now)) {
        *ctx.status = None;
    }
    Task::none()
}
