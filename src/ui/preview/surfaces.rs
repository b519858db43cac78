// SPDX-License-Identifier: MPL-2.0
//! Rendering surfaces, one per file kind.
//!
//! Images are decoded and drawn natively. PDF, spreadsheet and unsupported
//! files get an information card; spreadsheets additionally expose the
//! derived online viewer URLs unless the file is only reachable locally.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::preview::{FileKind, FileReference, PreviewState, RenderFailure};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, image, scrollable, text, Column, Row, Space};
use iced::{alignment::Vertical, ContentFit, Element, Length};
use std::sync::Arc;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preview: &'a PreviewState,
    pub image: Option<&'a ImageData>,
    pub is_loading: bool,
    /// Opacity of the incoming content while a crossfade runs.
    pub opacity: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (Some(reference), Some(kind)) = (ctx.preview.current_file(), ctx.preview.current_kind())
    else {
        return centered(text(ctx.i18n.tr("preview-empty")).size(typography::SUBTITLE).into());
    };

    match kind {
        FileKind::Image => image_surface(&ctx, reference),
        FileKind::Pdf => pdf_card(ctx.i18n, reference),
        FileKind::Spreadsheet => spreadsheet_card(ctx.i18n, ctx.preview, reference),
        FileKind::Other => unsupported_card(ctx.i18n, reference),
    }
}

fn image_surface<'a>(ctx: &ViewContext<'a>, reference: &FileReference) -> Element<'a, Message> {
    if let Some(failure) = ctx.preview.render_error() {
        return error_card(ctx.i18n, failure, ctx.preview.attempts());
    }

    let Some(data) = ctx.image else {
        let label = if ctx.is_loading {
            ctx.i18n.tr("preview-loading")
        } else {
            reference.display_name().into_owned()
        };
        return centered(text(label).size(typography::BODY).style(styles::text::secondary).into());
    };

    let zoom = ctx.preview.zoom().value();
    let picture = image(data.handle.clone())
        .width(Length::Fixed(data.width as f32 * zoom))
        .height(Length::Fixed(data.height as f32 * zoom))
        .content_fit(ContentFit::Fill)
        .opacity(ctx.opacity);

    scrollable(container(picture).padding(spacing::MD))
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn error_card<'a>(i18n: &I18n, failure: &RenderFailure, attempts: u32) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("preview-error-title")).size(typography::SUBTITLE))
        .push(text(i18n.tr(&failure.detail)).size(typography::BODY).style(styles::text::error))
        .push(
            text(failure.reference.display_name().into_owned())
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        );

    let mut actions = Row::new().spacing(spacing::SM).align_y(Vertical::Center).push(
        button(text(i18n.tr("preview-retry")).size(typography::BODY))
            .style(styles::button::primary)
            .on_press(Message::Retry),
    );
    if attempts > 0 {
        actions = actions.push(
            text(i18n.tr_with_args("preview-attempts", &[("count", &attempts.to_string())]))
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        );
    }
    column = column.push(actions);

    centered(
        container(column)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(styles::container::error_card)
            .into(),
    )
}

fn pdf_card<'a>(i18n: &I18n, reference: &FileReference) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .push(card_heading(i18n, FileKind::Pdf, reference))
        .push(text(i18n.tr("preview-pdf-description")).size(typography::BODY))
        .push(url_row(i18n, "preview-copy-reference", reference.as_str()));

    card(body)
}

fn spreadsheet_card<'a>(
    i18n: &I18n,
    preview: &PreviewState,
    reference: &FileReference,
) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(card_heading(i18n, FileKind::Spreadsheet, reference));

    if preview.current_is_local().unwrap_or(false) {
        body = body
            .push(text(i18n.tr("preview-spreadsheet-local")).size(typography::BODY))
            .push(url_row(i18n, "preview-copy-reference", reference.as_str()));
        return card(body);
    }

    for (label_key, url) in [
        ("preview-spreadsheet-primary", preview.current_viewer_url()),
        ("preview-spreadsheet-alternate", preview.current_alternate_url()),
    ] {
        if let Some(url) = url {
            body = body
                .push(
                    text(i18n.tr(label_key))
                        .size(typography::CAPTION)
                        .style(styles::text::secondary),
                )
                .push(viewer_url_row(i18n, url));
        }
    }

    card(body)
}

fn unsupported_card<'a>(i18n: &I18n, reference: &FileReference) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .push(card_heading(i18n, FileKind::Other, reference))
        .push(text(i18n.tr("preview-unsupported")).size(typography::BODY));
    card(body)
}

fn card_heading<'a>(
    i18n: &I18n,
    kind: FileKind,
    reference: &FileReference,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(reference.display_name().into_owned()).size(typography::TITLE))
        .push(
            text(i18n.tr(kind.i18n_key()))
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        )
        .into()
}

fn viewer_url_row<'a>(i18n: &I18n, url: Arc<str>) -> Element<'a, Message> {
    url_row(i18n, "preview-copy-url", &url)
}

/// A read-only URL well followed by a copy button.
fn url_row<'a>(i18n: &I18n, copy_key: &str, url: &str) -> Element<'a, Message> {
    let well = container(text(url.to_owned()).size(typography::CAPTION))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::url_well);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(well)
        .push(
            button(text(i18n.tr(copy_key)).size(typography::CAPTION))
                .style(styles::button::primary)
                .on_press(Message::CopyToClipboard(url.to_owned())),
        )
        .into()
}

fn card<'a>(body: Column<'a, Message>) -> Element<'a, Message> {
    centered(
        container(body)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(styles::container::card)
            .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(Column::new().push(Space::new().height(spacing::XL)).push(content))
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}
