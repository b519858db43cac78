// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits on top, the sidebar and the preview share the middle row
//! and the footer closes the window. In overlay menu mode the sidebar is
//! stacked over the preview instead of beside it.

use super::update::StatusLine;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::layout::{self, FooterContext, HeaderContext, LayoutState, MenuMode, SidebarContext};
use crate::ui::preview::component;
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preview: &'a component::State,
    pub layout: LayoutState,
    pub status: Option<StatusLine>,
    /// Strength of the theme change scrim; 0.0 hides it.
    pub theme_scrim: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let preview_state = ctx.preview.preview();

    let header = layout::header(HeaderContext {
        i18n: ctx.i18n,
        state: ctx.layout,
        current: preview_state
            .current_file()
            .map(|file| file.display_name().into_owned()),
    })
    .map(Message::Layout);

    let preview = ctx
        .preview
        .view(component::ViewEnv { i18n: ctx.i18n })
        .map(Message::Preview);

    let sidebar = ctx.layout.sidebar_visible().then(|| {
        layout::sidebar(SidebarContext {
            i18n: ctx.i18n,
            files: preview_state.files(),
            cursor: preview_state.cursor(),
            mode: ctx.layout.sidebar_mode,
        })
        .map(Message::Layout)
    });

    let middle: Element<'_, Message> = match (ctx.layout.menu_mode, sidebar) {
        (_, None) => preview,
        (MenuMode::Static, Some(sidebar)) => Row::new()
            .height(Length::Fill)
            .push(sidebar)
            .push(preview)
            .into(),
        (MenuMode::Overlay, Some(sidebar)) => {
            // Clicking beside the overlay closes it.
            let dismiss = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .on_press(Message::Layout(layout::Message::ToggleMenu));
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(preview)
                .push(Row::new().height(Length::Fill).push(sidebar).push(dismiss))
                .into()
        }
    };

    let mut column = Column::new().push(header).push(middle);
    if ctx.layout.show_footer {
        column = column.push(
            layout::footer(FooterContext {
                i18n: ctx.i18n,
                probes: ctx.preview.probe_summary(),
                status: ctx.status.map(|status| ctx.i18n.tr(status.key)),
            })
            .map(Message::Layout),
        );
    }

    let content = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.theme_scrim > 0.0 {
        Stack::new()
            .push(content)
            .push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::scrim(ctx.theme_scrim)),
            )
            .into()
    } else {
        content.into()
    }
}
