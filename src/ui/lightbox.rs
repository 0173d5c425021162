// SPDX-License-Identifier: MPL-2.0
//! Full-size image lightbox with wrap-around navigation and zoom.
//!
//! The lightbox is a small state machine: `Closed`, or `Open` at an
//! index into the selected case's images. Navigation wraps modulo the
//! image count and every transition (open, navigate, close) resets the
//! zoom factor.

use crate::dataset::CaseImage;
use crate::media;
use crate::ui::case_detail::{GallerySlot, SlotContent};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::zoom::ZoomState;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    pub state: State,
    pub zoom: ZoomState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open at the given image index (thumbnail click).
    Open(usize),
    /// Close button, backdrop click, or Escape.
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl Lightbox {
    /// Applies a message against the current image count. Transitions
    /// that would leave the index out of bounds are no-ops.
    pub fn handle(&mut self, message: Message, image_count: usize) {
        match message {
            Message::Open(index) => {
                if index < image_count {
                    self.state = State::Open { index };
                    self.zoom.reset();
                }
            }
            Message::Close => {
                self.state = State::Closed;
                self.zoom.reset();
            }
            Message::Next => self.navigate(1, image_count),
            Message::Previous => self.navigate(-1, image_count),
            Message::ZoomIn => {
                if self.is_open() {
                    self.zoom.zoom_in();
                }
            }
            Message::ZoomOut => {
                if self.is_open() {
                    self.zoom.zoom_out();
                }
            }
            Message::ResetZoom => {
                if self.is_open() {
                    self.zoom.reset();
                }
            }
        }
    }

    fn navigate(&mut self, direction: isize, image_count: usize) {
        if image_count == 0 {
            return;
        }
        if let State::Open { index } = self.state {
            let count = image_count as isize;
            let next = (index as isize + direction).rem_euclid(count) as usize;
            self.state = State::Open { index: next };
            self.zoom.reset();
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.state {
            State::Open { index } => Some(index),
            State::Closed => None,
        }
    }
}

/// Renders the lightbox content: the scaled image, its caption, the
/// image position, and the navigation/zoom controls. The caller stacks
/// this over the base view and wires the backdrop close.
pub fn view<'a>(
    lightbox: &'a Lightbox,
    meta: &'a CaseImage,
    slot: &'a GallerySlot,
    index: usize,
    image_count: usize,
) -> Element<'a, Message> {
    let image_view: Element<'a, Message> = match &slot.content {
        SlotContent::Ready(data) => {
            let (fit_width, fit_height) = media::fit_within(
                data.width,
                data.height,
                sizing::LIGHTBOX_MAX_WIDTH,
                sizing::LIGHTBOX_MAX_HEIGHT,
            );
            let factor = lightbox.zoom.factor;
            Image::new(data.handle.clone())
                .width(Length::Fixed(fit_width * factor))
                .height(Length::Fixed(fit_height * factor))
                .into()
        }
        SlotContent::Loading => Text::new("Loading image...")
            .size(typography::BODY)
            .color(palette::GRAY_200)
            .into(),
        SlotContent::Failed => Text::new("Image could not be loaded")
            .size(typography::BODY)
            .color(palette::ERROR_500)
            .into(),
    };

    // Fixed-size viewport so zooming does not reflow the controls.
    let viewport = Container::new(image_view)
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .height(Length::Fixed(sizing::LIGHTBOX_MAX_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true);

    let caption = Text::new(meta.caption(index))
        .size(typography::BODY)
        .color(palette::WHITE);

    let position = Text::new(format!("{} / {}", index + 1, image_count))
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(overlay_button("\u{2039} Prev", Message::Previous))
        .push(overlay_button("\u{2212}", Message::ZoomOut))
        .push(overlay_button("1:1", Message::ResetZoom))
        .push(overlay_button("+", Message::ZoomIn))
        .push(overlay_button("Next \u{203A}", Message::Next));

    let close_row = Row::new()
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .push(iced::widget::space::horizontal())
        .push(overlay_button("\u{2715}", Message::Close));

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(close_row)
        .push(viewport)
        .push(caption)
        .push(position)
        .push(controls)
        .into()
}

fn overlay_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
        .into()
}
