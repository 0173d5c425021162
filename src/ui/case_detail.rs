// SPDX-License-Identifier: MPL-2.0
//! Case detail pane: narrative sections and the thumbnail gallery.

use crate::dataset::Case;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Per-image load slot for the selected case. Slots start as `Loading`
/// and settle independently, so one bad image never blocks the rest of
/// the gallery.
#[derive(Debug, Clone)]
pub struct GallerySlot {
    pub content: SlotContent,
}

#[derive(Debug, Clone)]
pub enum SlotContent {
    Loading,
    Ready(ImageData),
    Failed,
}

impl GallerySlot {
    pub fn loading() -> Self {
        Self {
            content: SlotContent::Loading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ThumbnailPressed(usize),
}

/// Welcome view shown before any case is selected.
pub fn welcome<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("Welcome to the Case Atlas")
                .size(typography::TITLE_LG)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new("Select a case from the sidebar to begin viewing")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Renders the selected case: title, presentation and diagnosis
/// sections (each omitted when absent), and the image gallery or the
/// no-images message.
pub fn view<'a>(case: &'a Case, slots: &'a [GallerySlot]) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(case.display_title()).size(typography::TITLE_LG));

    if let Some(presentation) = case.presentation.as_deref().filter(|s| !s.is_empty()) {
        content = content.push(section("Presentation", presentation));
    }

    if let Some(diagnosis) = case.diagnosis.as_deref().filter(|s| !s.is_empty()) {
        content = content.push(section("Diagnosis", diagnosis));
    }

    if case.images.is_empty() {
        content = content.push(
            Container::new(
                Text::new("No images available for this case").size(typography::BODY),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::section),
        );
    } else {
        let header = Text::new(format!("Medical Images ({})", case.images.len()))
            .size(typography::TITLE_SM);

        let mut gallery = Row::new().spacing(spacing::SM);
        for index in 0..case.images.len() {
            gallery = gallery.push(thumbnail(case, slots.get(index), index));
        }

        content = content.push(
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .push(header)
                    .push(gallery.wrap()),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::section),
        );
    }

    Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG),
    )
    .height(Length::Fill)
    .into()
}

fn section<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(Text::new(body).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::section)
    .into()
}

fn thumbnail<'a>(
    case: &'a Case,
    slot: Option<&'a GallerySlot>,
    index: usize,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match slot.map(|s| &s.content) {
        Some(SlotContent::Ready(data)) => Image::new(data.handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        Some(SlotContent::Failed) => placeholder_text("Unavailable", palette::ERROR_500),
        _ => placeholder_text("Loading...", palette::GRAY_400),
    };

    let caption = Text::new(case.images[index].caption(index)).size(typography::CAPTION);

    let cell = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Container::new(picture)
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .clip(true),
        )
        .push(caption);

    button(cell)
        .padding(spacing::XS)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

fn placeholder_text<'a>(label: &'a str, color: iced::Color) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(color)
        .into()
}
