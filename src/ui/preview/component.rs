// SPDX-License-Identifier: MPL-2.0
//! Preview component encapsulating state and update logic.
//!
//! Wraps the toolkit-independent [`PreviewState`] with everything the Iced
//! surface needs: the decoded image of the current file, input dispatching,
//! navigation transitions and the probe diagnostics table.

use super::{surfaces, toolbar};
use crate::config::Config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::preview::probe::{self, ProbeDiagnostics, ProbeReport, ProbeSummary};
use crate::preview::{
    classify, translate, DerivedUrlCache, Dispatch, FileKind, FileReference, InputDispatcher,
    InputEvent, LoadTicket, PreviewState, Transition, TransitionStrategy,
};
use iced::widget::{mouse_area, Column};
use iced::{time, window, Element, Length, Subscription, Task};
use std::time::{Duration, Instant};

/// Frame interval while a crossfade is running.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Message {
    /// Native event not captured by any widget.
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
    Previous,
    Next,
    GoTo(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Retry,
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, Error>,
    },
    ProbeFinished(ProbeReport),
    CopyToClipboard(String),
    AnimationTick(Instant),
    /// The pointer entered (`true`) or left the preview surface.
    SurfaceHovered(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Text was placed on the clipboard.
    Copied,
}

/// Environment information required to render the preview.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug)]
pub struct State {
    preview: PreviewState,
    input: InputDispatcher,
    transition: Transition,
    /// Decoded image of the current file, tagged with the load that produced it.
    image: Option<(LoadTicket, ImageData)>,
    is_loading: bool,
    probes: ProbeDiagnostics,
    /// Clicks only count toward double activation over the surface.
    pointer_over_surface: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let strategy = TransitionStrategy::from_config(config);
        tracing::debug!(?strategy, "preview transition strategy selected");

        Self {
            preview: PreviewState::new(DerivedUrlCache::from_config(&config.preview)),
            input: InputDispatcher::from_config(&config.preview),
            transition: Transition::new(strategy),
            image: None,
            is_loading: false,
            probes: ProbeDiagnostics::default(),
            pointer_over_surface: false,
        }
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    #[must_use]
    pub fn probe_summary(&self) -> ProbeSummary {
        self.probes.summary()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Image currently displayed, if it belongs to the current load.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageData> {
        self.image
            .as_ref()
            .filter(|(ticket, _)| self.preview.is_current(*ticket))
            .map(|(_, data)| data)
    }

    /// Replaces the file list, then starts loading the first file and
    /// probing every image of the new list.
    pub fn set_files(&mut self, files: Vec<FileReference>) -> Task<Message> {
        self.preview.set_files(files);

        let generation = self.preview.generation();
        let targets = probe::probe_targets(self.preview.files());
        self.probes.reset(generation, targets.len());
        let probes = targets.into_iter().map(move |reference| {
            Task::perform(probe::probe(generation, reference), Message::ProbeFinished)
        });

        Task::batch(std::iter::once(self.load_current()).chain(probes))
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.transition.is_running() {
            time::every(ANIMATION_FRAME).map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::RawEvent { event, .. } => (Effect::None, self.handle_raw_event(&event)),
            Message::Previous => (Effect::None, self.navigate(PreviewState::prev)),
            Message::Next => (Effect::None, self.navigate(PreviewState::next)),
            Message::GoTo(index) => (Effect::None, self.navigate(|p| p.go_to(index))),
            Message::ZoomIn => {
                if self.zoom_applies() {
                    self.preview.zoom_in();
                }
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                if self.zoom_applies() {
                    self.preview.zoom_out();
                }
                (Effect::None, Task::none())
            }
            Message::ResetZoom => {
                if self.zoom_applies() {
                    self.preview.reset_zoom();
                }
                (Effect::None, Task::none())
            }
            Message::Retry => {
                if self.preview.retry().is_some() {
                    (Effect::None, self.load_current())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::ImageLoaded { ticket, result } => {
                self.handle_image_loaded(ticket, result);
                (Effect::None, Task::none())
            }
            Message::ProbeFinished(report) => {
                self.probes.record(report);
                (Effect::None, Task::none())
            }
            Message::CopyToClipboard(contents) => {
                (Effect::Copied, iced::clipboard::write(contents))
            }
            Message::AnimationTick(now) => {
                self.transition.tick(now);
                (Effect::None, Task::none())
            }
            Message::SurfaceHovered(over) => {
                self.pointer_over_surface = over;
                (Effect::None, Task::none())
            }
        }
    }

    /// Zoom only applies to natively rendered images.
    fn zoom_applies(&self) -> bool {
        self.preview.current_kind() == Some(FileKind::Image)
    }

    fn handle_raw_event(&mut self, event: &iced::Event) -> Task<Message> {
        let Some(input) = translate(event) else {
            return Task::none();
        };
        if input == InputEvent::PrimaryClick && !self.pointer_over_surface {
            return Task::none();
        }
        let now = Instant::now();
        let before = self.preview.cursor();
        match self.input.dispatch(input, now, &mut self.preview) {
            Dispatch::Handled(action) if action.is_navigation() => {
                let moved = self.preview.cursor() != before;
                self.transition.begin(now, || moved);
                if moved {
                    self.load_current()
                } else {
                    Task::none()
                }
            }
            Dispatch::Handled(_) | Dispatch::Ignored => Task::none(),
        }
    }

    fn navigate(&mut self, change: impl FnOnce(&mut PreviewState) -> bool) -> Task<Message> {
        let mut moved = false;
        self.transition.begin(Instant::now(), || {
            moved = change(&mut self.preview);
            moved
        });
        if moved {
            self.load_current()
        } else {
            Task::none()
        }
    }

    /// Starts loading the current file when it needs native decoding.
    fn load_current(&mut self) -> Task<Message> {
        self.image = None;
        self.is_loading = false;

        let Some(ticket) = self.preview.load_ticket() else {
            return Task::none();
        };
        let Some(reference) = self.preview.current_file().cloned() else {
            return Task::none();
        };
        if classify(&reference) != FileKind::Image {
            return Task::none();
        }

        self.is_loading = true;
        tracing::debug!(%reference, attempt = self.preview.attempts(), "loading image");
        Task::perform(media::load_image(reference), move |result| {
            Message::ImageLoaded { ticket, result }
        })
    }

    fn handle_image_loaded(&mut self, ticket: LoadTicket, result: Result<ImageData, Error>) {
        if !self.preview.is_current(ticket) {
            tracing::debug!(?ticket, "stale image load dropped");
            return;
        }
        self.is_loading = false;
        match result {
            Ok(data) => {
                self.image = Some((ticket, data));
            }
            Err(err) => {
                if let Some(reference) = self.preview.current_file().cloned() {
                    tracing::warn!(%reference, error = %err, "image load failed");
                    self.preview.mark_render_failed(&reference, err.i18n_key());
                }
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let toolbar = toolbar::view(toolbar::ViewContext {
            i18n: env.i18n,
            navigation: self.preview.navigation_info(),
            zoom: self.preview.zoom(),
            zoom_enabled: self.zoom_applies(),
        });

        let surface = surfaces::view(surfaces::ViewContext {
            i18n: env.i18n,
            preview: &self.preview,
            image: self.current_image(),
            is_loading: self.is_loading,
            opacity: self.transition.opacity(Instant::now()),
        });
        let surface = mouse_area(surface)
            .on_enter(Message::SurfaceHovered(true))
            .on_exit(Message::SurfaceHovered(false));

        Column::new()
            .push(toolbar)
            .push(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn state_with(files: &[&str]) -> State {
        let mut state = State::default();
        let _ = state.set_files(files.iter().copied().map(FileReference::from).collect());
        state
    }

    fn sample_image() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn set_files_marks_image_loading() {
        let state = state_with(&["a.png", "b.pdf"]);
        assert!(state.is_loading());
        assert_eq!(state.probe_summary().total, 1);

        let state = state_with(&["b.pdf"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn loaded_image_is_shown_for_current_ticket() {
        let mut state = state_with(&["a.png"]);
        let ticket = state.preview().load_ticket().expect("ticket");

        state.handle_message(Message::ImageLoaded {
            ticket,
            result: Ok(sample_image()),
        });

        assert!(state.current_image().is_some());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_image_load_is_dropped() {
        let mut state = state_with(&["a.png", "b.png"]);
        let first = state.preview().load_ticket().expect("ticket");
        state.handle_message(Message::Next);

        state.handle_message(Message::ImageLoaded {
            ticket: first,
            result: Err(Error::Http(HttpError::Status(404))),
        });

        assert!(state.preview().render_error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn failure_sets_error_and_retry_clears_it() {
        let mut state = state_with(&["a.png"]);
        let ticket = state.preview().load_ticket().expect("ticket");
        state.handle_message(Message::ImageLoaded {
            ticket,
            result: Err(Error::Http(HttpError::Status(404))),
        });

        let failure = state.preview().render_error().expect("error flag");
        assert_eq!(failure.detail, "error-load-not-found");

        state.handle_message(Message::Retry);
        assert!(state.preview().render_error().is_none());
        assert!(state.is_loading());
        assert_eq!(state.preview().attempts(), 1);
    }

    #[test]
    fn toolbar_messages_drive_state() {
        let mut state = state_with(&["a.png", "b.pdf", "c.csv"]);
        state.handle_message(Message::ZoomIn);
        assert_abs_diff_eq!(state.preview().zoom().value(), 1.2, epsilon = F32_EPSILON);

        state.handle_message(Message::GoTo(2));
        assert_eq!(state.preview().cursor(), 2);
        assert!(state.preview().zoom().is_default());

        state.handle_message(Message::Previous);
        assert_eq!(state.preview().cursor(), 1);
    }

    #[test]
    fn raw_swipe_navigates() {
        let mut state = state_with(&["a.pdf", "b.png", "c.csv"]);
        let window = window::Id::unique();
        let finger = iced::touch::Finger(0);

        state.handle_message(Message::RawEvent {
            window,
            event: iced::Event::Touch(iced::touch::Event::FingerPressed {
                id: finger,
                position: iced::Point::new(300.0, 100.0),
            }),
        });
        state.handle_message(Message::RawEvent {
            window,
            event: iced::Event::Touch(iced::touch::Event::FingerLifted {
                id: finger,
                position: iced::Point::new(230.0, 110.0),
            }),
        });

        assert_eq!(state.preview().cursor(), 1);
        assert!(state.is_loading());
    }

    #[test]
    fn zoom_messages_are_ignored_off_images() {
        let mut state = state_with(&["a.pdf", "b.png"]);
        state.handle_message(Message::ZoomIn);
        assert!(state.preview().zoom().is_default());

        state.handle_message(Message::Next);
        state.handle_message(Message::ZoomIn);
        assert_abs_diff_eq!(state.preview().zoom().value(), 1.2, epsilon = F32_EPSILON);
    }

    #[test]
    fn double_click_counts_only_over_the_surface() {
        let mut state = state_with(&["a.png"]);
        let window = window::Id::unique();
        let click = || Message::RawEvent {
            window,
            event: iced::Event::Mouse(iced::mouse::Event::ButtonPressed(
                iced::mouse::Button::Left,
            )),
        };

        state.handle_message(click());
        state.handle_message(click());
        assert!(state.preview().zoom().is_default());

        state.handle_message(Message::SurfaceHovered(true));
        state.handle_message(click());
        state.handle_message(click());
        assert_abs_diff_eq!(state.preview().zoom().value(), 2.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn stale_probe_does_not_count() {
        let mut state = state_with(&["a.png"]);
        let old_generation = state.preview().generation();
        let _ = state.set_files(vec![FileReference::new("b.png")]);

        state.handle_message(Message::ProbeFinished(ProbeReport {
            generation: old_generation,
            reference: FileReference::new("a.png"),
            outcome: crate::preview::ProbeOutcome::ReachableUnknownSize,
        }));
        assert_eq!(state.probe_summary().reachable, 0);
    }

    #[test]
    fn copy_reports_effect() {
        let mut state = State::default();
        let (effect, _) = state.handle_message(Message::CopyToClipboard("x".into()));
        assert_eq!(effect, Effect::Copied);
    }
}
