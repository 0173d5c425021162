// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the sidebar and detail pane, and stacks the lightbox
//! overlay on top when it is open. A click on the dimmed backdrop
//! closes the lightbox; the content itself is opaque so clicks on the
//! image or controls never fall through.

use super::Message;
use crate::dataset::Case;
use crate::ui::case_detail::{self, GallerySlot};
use crate::ui::case_list;
use crate::ui::lightbox::{self, Lightbox};
use crate::ui::styles;
use iced::widget::{mouse_area, opaque, Container, Row, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub case_list: &'a case_list::State,
    pub cases: &'a [Case],
    pub selected_case: Option<&'a Case>,
    pub slots: &'a [GallerySlot],
    pub lightbox: &'a Lightbox,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active_id = ctx.selected_case.map(|case| case.id.as_str());

    let sidebar = case_list::view(ctx.case_list, ctx.cases, active_id).map(Message::CaseList);

    let detail: Element<'_, Message> = match ctx.selected_case {
        Some(case) => case_detail::view(case, ctx.slots).map(Message::CaseDetail),
        None => case_detail::welcome().map(Message::CaseDetail),
    };

    let base = Row::new()
        .push(sidebar)
        .push(detail)
        .width(Length::Fill)
        .height(Length::Fill);

    match lightbox_overlay(&ctx) {
        Some(overlay) => Stack::new().push(base).push(overlay).into(),
        None => base.into(),
    }
}

fn lightbox_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let index = ctx.lightbox.index()?;
    let case = ctx.selected_case?;
    let meta = case.images.get(index)?;
    let slot = ctx.slots.get(index)?;

    let content = lightbox::view(ctx.lightbox, meta, slot, index, case.images.len())
        .map(Message::Lightbox);

    let backdrop = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    Some(opaque(
        mouse_area(backdrop).on_press(Message::Lightbox(lightbox::Message::Close)),
    ))
}
