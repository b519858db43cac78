// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the preview surface: navigation, page indicator and zoom.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::preview::{NavigationInfo, ZoomLevel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row, Space};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: NavigationInfo,
    pub zoom: ZoomLevel,
    /// Zoom controls only apply to natively rendered images.
    pub zoom_enabled: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let previous = button(text(i18n.tr("toolbar-previous")).size(typography::BODY))
        .style(styles::button::toolbar)
        .on_press_maybe(ctx.navigation.has_previous.then_some(Message::Previous));
    let next = button(text(i18n.tr("toolbar-next")).size(typography::BODY))
        .style(styles::button::toolbar)
        .on_press_maybe(ctx.navigation.has_next.then_some(Message::Next));

    let page = text(page_label(i18n, ctx.navigation)).size(typography::CAPTION);

    let zoom_out = button(text(i18n.tr("toolbar-zoom-out")).size(typography::BODY))
        .style(styles::button::toolbar)
        .on_press_maybe((ctx.zoom_enabled && !ctx.zoom.is_min()).then_some(Message::ZoomOut));
    let zoom_in = button(text(i18n.tr("toolbar-zoom-in")).size(typography::BODY))
        .style(styles::button::toolbar)
        .on_press_maybe((ctx.zoom_enabled && !ctx.zoom.is_max()).then_some(Message::ZoomIn));
    let zoom_label = container(
        text(i18n.tr_with_args(
            "toolbar-zoom-label",
            &[("percent", &ctx.zoom.percent().to_string())],
        ))
        .size(typography::CAPTION),
    )
    .center_x(Length::Fixed(sizing::ZOOM_LABEL_WIDTH));
    let reset = button(text(i18n.tr("toolbar-zoom-reset")).size(typography::CAPTION))
        .style(styles::button::toolbar)
        .on_press_maybe((ctx.zoom_enabled && !ctx.zoom.is_default()).then_some(Message::ResetZoom));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(previous)
        .push(page)
        .push(next)
        .push(Space::new().width(Length::Fill))
        .push(zoom_out)
        .push(zoom_label)
        .push(zoom_in)
        .push(reset);

    container(row)
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .style(styles::container::bar)
        .into()
}

/// "current / total", 1-indexed; "0 / 0" for an empty list.
fn page_label(i18n: &I18n, navigation: NavigationInfo) -> String {
    let current = navigation.current_index.map_or(0, |index| index + 1);
    i18n.tr_with_args(
        "toolbar-page",
        &[
            ("current", &current.to_string()),
            ("total", &navigation.total_count.to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_label_is_one_indexed() {
        let i18n = I18n::default();
        let info = NavigationInfo {
            has_next: true,
            has_previous: true,
            current_index: Some(1),
            total_count: 5,
        };
        assert_eq!(page_label(&i18n, info), "2 / 5");
    }

    #[test]
    fn page_label_for_empty_list() {
        let i18n = I18n::default();
        assert_eq!(page_label(&i18n, NavigationInfo::default()), "0 / 0");
    }
}
