// SPDX-License-Identifier: MPL-2.0
//! Application chrome around the preview: header, file sidebar and footer.
//!
//! The sidebar either sits beside the preview (static menu) or floats over
//! it on demand (overlay menu), and can be narrowed to a slim or slim-plus
//! strip. Slim and slim-plus exclude each other.

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::preview::{classify, FileReference, ProbeSummary};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{AccentColor, ThemeMode};
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length};
use serde::{Deserialize, Serialize};

/// How the sidebar is placed relative to the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    /// Beside the preview; the menu toggle collapses it.
    #[default]
    Static,
    /// Hidden until the menu toggle opens it over the preview.
    Overlay,
}

impl MenuMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MenuMode::Static => MenuMode::Overlay,
            MenuMode::Overlay => MenuMode::Static,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MenuMode::Static => "menu-mode-static",
            MenuMode::Overlay => "menu-mode-overlay",
        }
    }
}

/// Width of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarMode {
    /// File names with their kind.
    #[default]
    Full,
    /// File numbers only.
    Slim,
    /// File numbers with their kind.
    SlimPlus,
}

impl SidebarMode {
    /// Switches slim on, or back to full when it already is.
    #[must_use]
    pub fn toggled_slim(self) -> Self {
        match self {
            SidebarMode::Slim => SidebarMode::Full,
            SidebarMode::Full | SidebarMode::SlimPlus => SidebarMode::Slim,
        }
    }

    /// Switches slim-plus on, or back to full when it already is.
    #[must_use]
    pub fn toggled_slim_plus(self) -> Self {
        match self {
            SidebarMode::SlimPlus => SidebarMode::Full,
            SidebarMode::Full | SidebarMode::Slim => SidebarMode::SlimPlus,
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        match self {
            SidebarMode::Full => sizing::SIDEBAR_WIDTH,
            SidebarMode::Slim => sizing::SIDEBAR_SLIM_WIDTH,
            SidebarMode::SlimPlus => sizing::SIDEBAR_SLIM_PLUS_WIDTH,
        }
    }
}

/// Chrome state. Everything but `overlay_open` is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub theme_mode: ThemeMode,
    pub accent: AccentColor,
    pub menu_mode: MenuMode,
    pub sidebar_mode: SidebarMode,
    /// Static menu hidden by the menu toggle.
    pub sidebar_collapsed: bool,
    /// Overlay menu currently shown.
    pub overlay_open: bool,
    pub show_footer: bool,
}

impl LayoutState {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let layout = &config.layout;
        Self {
            theme_mode: config.general.theme_mode,
            accent: config.general.accent,
            menu_mode: layout.menu_mode.unwrap_or_default(),
            sidebar_mode: layout.sidebar_mode.unwrap_or_default(),
            sidebar_collapsed: layout.sidebar_collapsed.unwrap_or(false),
            overlay_open: false,
            show_footer: layout.show_footer.unwrap_or(true),
        }
    }

    /// Whether the sidebar is currently on screen.
    #[must_use]
    pub fn sidebar_visible(&self) -> bool {
        match self.menu_mode {
            MenuMode::Static => !self.sidebar_collapsed,
            MenuMode::Overlay => self.overlay_open,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    ToggleMenuMode,
    ToggleSlim,
    ToggleSlimPlus,
    CycleTheme,
    SelectFile(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Persisted layout preferences changed.
    PreferencesChanged,
    /// The theme mode changed; persisted like any other preference.
    ThemeChanged,
    SelectFile(usize),
}

pub fn update(message: Message, state: &mut LayoutState) -> Event {
    match message {
        Message::ToggleMenu => match state.menu_mode {
            MenuMode::Static => {
                state.sidebar_collapsed = !state.sidebar_collapsed;
                Event::PreferencesChanged
            }
            MenuMode::Overlay => {
                state.overlay_open = !state.overlay_open;
                Event::None
            }
        },
        Message::ToggleMenuMode => {
            state.menu_mode = state.menu_mode.toggled();
            state.overlay_open = false;
            Event::PreferencesChanged
        }
        Message::ToggleSlim => {
            state.sidebar_mode = state.sidebar_mode.toggled_slim();
            Event::PreferencesChanged
        }
        Message::ToggleSlimPlus => {
            state.sidebar_mode = state.sidebar_mode.toggled_slim_plus();
            Event::PreferencesChanged
        }
        Message::CycleTheme => {
            state.theme_mode = state.theme_mode.cycle();
            Event::ThemeChanged
        }
        Message::SelectFile(index) => {
            state.overlay_open = false;
            Event::SelectFile(index)
        }
    }
}

pub struct HeaderContext<'a> {
    pub i18n: &'a I18n,
    pub state: LayoutState,
    /// Display name of the current file, if any.
    pub current: Option<String>,
}

pub fn header<'a>(ctx: HeaderContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let toggle = button(text(i18n.tr("header-toggle-sidebar")).size(typography::BODY))
        .style(styles::button::toolbar)
        .on_press(Message::ToggleMenu);

    let mut title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(i18n.tr("app-title")).size(typography::TITLE));
    if let Some(current) = ctx.current {
        title = title.push(
            text(current)
                .size(typography::BODY)
                .style(styles::text::secondary),
        );
    }

    let menu_mode = i18n.tr(state.menu_mode.i18n_key());
    let theme_mode = i18n.tr(state.theme_mode.i18n_key());
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(header_button(
            i18n.tr_with_args("header-menu-mode", &[("mode", &menu_mode)]),
            Message::ToggleMenuMode,
        ))
        .push(header_button(i18n.tr("header-slim"), Message::ToggleSlim))
        .push(header_button(i18n.tr("header-slim-plus"), Message::ToggleSlimPlus))
        .push(header_button(
            i18n.tr_with_args("header-theme-mode", &[("mode", &theme_mode)]),
            Message::CycleTheme,
        ));

    container(row)
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::bar)
        .into()
}

fn header_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .style(styles::button::toolbar)
        .on_press(message)
        .into()
}

pub struct SidebarContext<'a> {
    pub i18n: &'a I18n,
    pub files: &'a [FileReference],
    pub cursor: usize,
    pub mode: SidebarMode,
}

pub fn sidebar<'a>(ctx: SidebarContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mut list = Column::new().spacing(spacing::XXS).padding(spacing::XS);
    if ctx.mode == SidebarMode::Full {
        list = list.push(
            text(i18n.tr("sidebar-title"))
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        );
    }

    if ctx.files.is_empty() && ctx.mode == SidebarMode::Full {
        list = list.push(text(i18n.tr("sidebar-empty")).size(typography::BODY));
    }

    for (index, file) in ctx.files.iter().enumerate() {
        list = list.push(
            button(sidebar_entry(i18n, ctx.mode, index, file))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::sidebar_item(index == ctx.cursor))
                .on_press(Message::SelectFile(index)),
        );
    }

    container(scrollable(list))
        .width(Length::Fixed(ctx.mode.width()))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn sidebar_entry<'a>(
    i18n: &I18n,
    mode: SidebarMode,
    index: usize,
    file: &FileReference,
) -> Element<'a, Message> {
    let kind = text(i18n.tr(classify(file).i18n_key()))
        .size(typography::CAPTION)
        .style(styles::text::secondary);
    let number = (index + 1).to_string();

    match mode {
        SidebarMode::Full => Column::new()
            .push(text(file.display_name().into_owned()).size(typography::BODY))
            .push(kind)
            .into(),
        SidebarMode::Slim => container(text(number).size(typography::BODY))
            .center_x(Length::Fill)
            .into(),
        SidebarMode::SlimPlus => Column::new()
            .push(text(number).size(typography::BODY))
            .push(kind)
            .into(),
    }
}

pub struct FooterContext<'a> {
    pub i18n: &'a I18n,
    pub probes: ProbeSummary,
    /// Transient status line, already translated.
    pub status: Option<String>,
}

pub fn footer<'a>(ctx: FooterContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let version = text(i18n.tr_with_args(
        "footer-version",
        &[("version", env!("CARGO_PKG_VERSION"))],
    ))
    .size(typography::CAPTION)
    .style(styles::text::secondary);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(version)
        .push(text(probe_label(i18n, ctx.probes)).size(typography::CAPTION));

    if ctx.probes.failed > 0 {
        row = row.push(
            text(i18n.tr_with_args(
                "footer-probes-failed",
                &[("failed", &ctx.probes.failed.to_string())],
            ))
            .size(typography::CAPTION)
            .style(styles::text::error),
        );
    }

    row = row.push(Space::new().width(Length::Fill));
    if let Some(status) = ctx.status {
        row = row.push(text(status).size(typography::CAPTION));
    }

    container(row)
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::FOOTER_HEIGHT))
        .style(styles::container::bar)
        .into()
}

fn probe_label(i18n: &I18n, probes: ProbeSummary) -> String {
    if probes.total == 0 {
        return i18n.tr("footer-probes-none");
    }
    if probes.pending() > 0 {
        return i18n.tr_with_args(
            "footer-probes-pending",
            &[
                ("pending", &probes.pending().to_string()),
                ("total", &probes.total.to_string()),
            ],
        );
    }
    i18n.tr_with_args(
        "footer-probes",
        &[
            ("reachable", &probes.reachable.to_string()),
            ("total", &probes.total.to_string()),
        ],
    )
}
