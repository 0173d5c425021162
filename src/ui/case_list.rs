// SPDX-License-Identifier: MPL-2.0
//! Searchable case list sidebar.
//!
//! The search term filters cases by the same title and summary strings
//! the list displays, so what matches is exactly what the user can
//! read, truncation included.

use crate::dataset::Case;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Scrollable, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current search term, updated on every keystroke.
    pub query: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    CasePressed(String),
}

impl State {
    pub fn handle(&mut self, message: Message) {
        if let Message::SearchChanged(query) = message {
            self.query = query;
        }
    }
}

/// Cases visible under the given search term, in dataset order.
pub fn filtered<'a>(cases: &'a [Case], query: &str) -> Vec<&'a Case> {
    cases.iter().filter(|case| case.matches(query)).collect()
}

/// Renders the sidebar: search input plus the filtered case entries.
/// `active_id` receives the unique active highlight.
pub fn view<'a>(
    state: &'a State,
    cases: &'a [Case],
    active_id: Option<&'a str>,
) -> Element<'a, Message> {
    let search = text_input("Search cases...", &state.query)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let mut entries = Column::new().spacing(spacing::XS);

    if cases.is_empty() {
        entries = entries.push(
            Text::new("Loading cases")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    } else {
        for case in filtered(cases, &state.query) {
            let is_active = active_id == Some(case.id.as_str());

            let label = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(case.display_title()).size(typography::TITLE_SM))
                .push(Text::new(case.summary_line()).size(typography::CAPTION));

            entries = entries.push(
                button(label)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::case_entry(is_active))
                    .on_press(Message::CasePressed(case.id.clone())),
            );
        }
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(search)
        .push(Scrollable::new(entries).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::sidebar)
        .into()
}
