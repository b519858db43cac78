// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the preview and the
//! surrounding layout.
//!
//! The `App` struct wires together the preview component, localization and
//! persisted preferences, and translates component events into side effects
//! such as settings persistence or status messages.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::StatusLine;

use crate::config::{self, FileSettingsStore, SettingsStore};
use crate::demo;
use crate::i18n::fluent::I18n;
use crate::preview::{Transition, TransitionStrategy};
use crate::ui::layout::LayoutState;
use crate::ui::preview::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    preview: component::State,
    layout: LayoutState,
    settings: FileSettingsStore,
    status: Option<StatusLine>,
    theme_transition: Transition,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("files", &self.preview.preview().len())
            .field("cursor", &self.preview.preview().cursor())
            .field("layout", &self.layout)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            preview: component::State::default(),
            layout: LayoutState::from_config(&config::Config::default()),
            settings: FileSettingsStore::default(),
            status: None,
            theme_transition: Transition::default(),
        }
    }
}

impl App {
    /// Loads settings, resolves the locale and starts loading the initial
    /// file list (command-line files, or the demo list).
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = match flags.config_dir {
            Some(dir) => FileSettingsStore::with_base_dir(dir.into()),
            None => FileSettingsStore::default(),
        };
        let (config, config_warning) = settings.load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            preview: component::State::new(&config),
            layout: LayoutState::from_config(&config),
            settings,
            status: None,
            theme_transition: Transition::new(TransitionStrategy::from_config(&config)),
        };

        if let Some(key) = config_warning {
            tracing::warn!(%key, "settings could not be loaded, using defaults");
            app.status = Some(StatusLine::new(config::CONFIG_LOAD_WARNING_KEY, Instant::now()));
        }

        let files = demo::initial_files(flags.files);
        tracing::info!(
            count = files.len(),
            locale = %app.i18n.current_locale(),
            "starting preview"
        );
        let task = app.preview.set_files(files).map(Message::Preview);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.preview.preview().current_file() {
            Some(file) => format!("{} - {app_name}", file.display_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.layout.theme_mode.iced_theme(self.layout.accent)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.status.is_some());
        let preview_sub = subscription::create_preview_subscription(&self.preview);
        let theme_sub =
            subscription::create_theme_subscription(self.theme_transition.is_running());

        Subscription::batch([event_sub, tick_sub, preview_sub, theme_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            preview: &mut self.preview,
            layout: &mut self.layout,
            settings: &mut self.settings,
            status: &mut self.status,
            theme_transition: &mut self.theme_transition,
        };

        match message {
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::Layout(layout_message) => {
                update::handle_layout_message(&mut ctx, layout_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::ThemeFrame(now) => update::handle_theme_frame(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            preview: &self.preview,
            layout: self.layout,
            status: self.status,
            theme_scrim: self.theme_scrim(),
        })
    }

    /// Remaining strength of the theme change scrim, from 1.0 down to 0.0.
    fn theme_scrim(&self) -> f32 {
        if self.theme_transition.is_running() {
            1.0 - self.theme_transition.opacity(Instant::now())
        } else {
            0.0
        }
    }
}
