// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Lightbox overlay buttons (navigation, zoom, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Case list entry. `active` marks the selected case.
pub fn case_entry(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();

        let background = if active {
            palette::PRIMARY_500
        } else {
            match status {
                button::Status::Hovered => palette::GRAY_700,
                _ => palette_ext.background.weak.color,
            }
        };

        let text_color = if active {
            WHITE
        } else {
            palette_ext.background.base.text
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: if active {
                    palette::PRIMARY_600
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery thumbnail wrapper.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    button::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        text_color: palette_ext.background.base.text,
        border: Border {
            color: match status {
                button::Status::Hovered => palette::PRIMARY_400,
                _ => Color::TRANSPARENT,
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::SM,
            _ => shadow::NONE,
        },
        snap: true,
    }
}
