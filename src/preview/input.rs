// SPDX-License-Identifier: MPL-2.0
//! Keyboard, swipe and double-activation handling for the preview.
//!
//! Raw Iced events are first narrowed with [`translate`], then fed to
//! [`InputDispatcher::dispatch`], which applies the resulting [`Action`] to a
//! [`PreviewState`]. The host only routes events nobody else captured.

use super::file_kind::FileKind;
use super::state::PreviewState;
use crate::config::{PreviewConfig, DEFAULT_SWIPE_THRESHOLD, DOUBLE_ACTIVATION_WINDOW_MS};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::touch::Finger;
use iced::{mouse, touch, Event, Point};
use std::time::{Duration, Instant};

/// Input the preview reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    TouchStart { finger: Finger, position: Point },
    TouchEnd { finger: Finger, position: Point },
    TouchCancel { finger: Finger },
    /// Primary button press on the preview surface.
    PrimaryClick,
}

/// State transition requested by an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleZoom,
}

impl Action {
    /// Applies the action. Returns whether the current file changed.
    pub fn apply(self, state: &mut PreviewState) -> bool {
        match self {
            Action::Previous => state.prev(),
            Action::Next => state.next(),
            Action::ZoomIn => {
                state.zoom_in();
                false
            }
            Action::ZoomOut => {
                state.zoom_out();
                false
            }
            Action::ResetZoom => {
                state.reset_zoom();
                false
            }
            Action::ToggleZoom => {
                state.toggle_zoom();
                false
            }
        }
    }

    #[must_use]
    pub fn is_navigation(self) -> bool {
        matches!(self, Action::Previous | Action::Next)
    }

    #[must_use]
    pub fn is_zoom(self) -> bool {
        !self.is_navigation()
    }
}

/// Outcome of dispatching one event.
///
/// `Handled` tells the host to suppress any default handling of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Ignored,
    Handled(Action),
}

/// Touch gesture started by the first finger to come down.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchGesture {
    finger: Finger,
    start: Point,
    /// Another finger came down while this one was pressed.
    multi_touch: bool,
}

#[derive(Debug, Clone)]
pub struct InputDispatcher {
    swipe_threshold: f32,
    double_activation_window: Duration,
    gesture: Option<TouchGesture>,
    fingers_down: usize,
    last_activation: Option<Instant>,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(
            DEFAULT_SWIPE_THRESHOLD,
            Duration::from_millis(DOUBLE_ACTIVATION_WINDOW_MS),
        )
    }
}

impl InputDispatcher {
    #[must_use]
    pub fn new(swipe_threshold: f32, double_activation_window: Duration) -> Self {
        Self {
            swipe_threshold,
            double_activation_window,
            gesture: None,
            fingers_down: 0,
            last_activation: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &PreviewConfig) -> Self {
        Self::new(
            config.swipe_threshold(),
            Duration::from_millis(DOUBLE_ACTIVATION_WINDOW_MS),
        )
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// Handles one event, mutating `state` when it maps to an action.
    ///
    /// Zoom actions only apply while the current file is an image.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        now: Instant,
        state: &mut PreviewState,
    ) -> Dispatch {
        let kind = state.current_kind();
        let action = match event {
            InputEvent::Key { key, modifiers } => key_action(&key, modifiers),
            InputEvent::TouchStart { finger, position } => {
                self.finger_down(finger, position);
                None
            }
            InputEvent::TouchEnd { finger, position } => {
                self.finger_up(finger, position, now, kind)
            }
            InputEvent::TouchCancel { finger } => {
                self.fingers_down = self.fingers_down.saturating_sub(1);
                if self.gesture.is_some_and(|gesture| gesture.finger == finger) {
                    self.gesture = None;
                }
                None
            }
            InputEvent::PrimaryClick => self.activation(now, kind),
        };

        match action {
            Some(action) if action.is_zoom() && kind != Some(FileKind::Image) => {
                Dispatch::Ignored
            }
            Some(action) => {
                action.apply(state);
                Dispatch::Handled(action)
            }
            None => Dispatch::Ignored,
        }
    }

    fn finger_down(&mut self, finger: Finger, position: Point) {
        self.fingers_down += 1;
        if self.fingers_down == 1 {
            self.gesture = Some(TouchGesture {
                finger,
                start: position,
                multi_touch: false,
            });
        } else if let Some(gesture) = self.gesture.as_mut() {
            gesture.multi_touch = true;
        }
    }

    fn finger_up(
        &mut self,
        finger: Finger,
        end: Point,
        now: Instant,
        kind: Option<FileKind>,
    ) -> Option<Action> {
        self.fingers_down = self.fingers_down.saturating_sub(1);
        let gesture = self.gesture.filter(|gesture| gesture.finger == finger)?;
        self.gesture = None;
        if gesture.multi_touch {
            return None;
        }

        let dx = end.x - gesture.start.x;
        let dy = end.y - gesture.start.y;
        if dx.abs() > dy.abs() && dx.abs() > self.swipe_threshold {
            // Content follows the finger: dragging right reveals the previous file.
            return Some(if dx > 0.0 {
                Action::Previous
            } else {
                Action::Next
            });
        }
        if dx.hypot(dy) < self.swipe_threshold {
            return self.activation(now, kind);
        }
        None
    }

    /// Records a click or tap, reporting a toggle when it completes a pair.
    fn activation(&mut self, now: Instant, kind: Option<FileKind>) -> Option<Action> {
        if kind != Some(FileKind::Image) {
            self.last_activation = None;
            return None;
        }
        match self.last_activation.take() {
            Some(previous)
                if now.saturating_duration_since(previous) <= self.double_activation_window =>
            {
                Some(Action::ToggleZoom)
            }
            _ => {
                self.last_activation = Some(now);
                None
            }
        }
    }
}

fn key_action(key: &Key, modifiers: Modifiers) -> Option<Action> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Action::Previous),
        Key::Named(Named::ArrowRight) => Some(Action::Next),
        Key::Named(Named::Escape) => Some(Action::ResetZoom),
        Key::Character(c) if modifiers.command() => match c.as_str() {
            "+" | "=" => Some(Action::ZoomIn),
            "-" => Some(Action::ZoomOut),
            "0" => Some(Action::ResetZoom),
            _ => None,
        },
        _ => None,
    }
}

/// Narrows a raw Iced event to the inputs the preview cares about.
#[must_use]
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(InputEvent::Key {
                key: key.clone(),
                modifiers: *modifiers,
            })
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(InputEvent::TouchStart {
                finger: *id,
                position: *position,
            })
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => Some(InputEvent::TouchEnd {
            finger: *id,
            position: *position,
        }),
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(InputEvent::TouchCancel { finger: *id })
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(InputEvent::PrimaryClick)
        }
        _ => None,
    }
}
