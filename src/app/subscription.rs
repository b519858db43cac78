// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events that no widget captured are routed to the preview
//! component; buttons, scrollbars and text keep their own events.

use super::Message;
use crate::ui::preview::component;
use iced::{event, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(250);
const THEME_FRAME: Duration = Duration::from_millis(16);

/// Routes uncaptured keyboard, touch and mouse events to the preview.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let relevant = matches!(
            event,
            event::Event::Keyboard(_)
                | event::Event::Touch(_)
                | event::Event::Mouse(iced::mouse::Event::ButtonPressed(_))
        );
        match status {
            event::Status::Ignored if relevant => {
                Some(Message::Preview(component::Message::RawEvent {
                    window: window_id,
                    event,
                }))
            }
            _ => None,
        }
    })
}

/// Ticks only while a status message is waiting to expire.
pub fn create_tick_subscription(has_status: bool) -> Subscription<Message> {
    if has_status {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Frames for the theme change scrim while it fades out.
pub fn create_theme_subscription(running: bool) -> Subscription<Message> {
    if running {
        time::every(THEME_FRAME).map(Message::ThemeFrame)
    } else {
        Subscription::none()
    }
}

/// Animation frames requested by the preview component.
pub fn create_preview_subscription(preview: &component::State) -> Subscription<Message> {
    preview.subscription().map(Message::Preview)
}
