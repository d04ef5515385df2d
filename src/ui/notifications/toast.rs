// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent and a close button.
//! Hovering a card reports `PointerEnter`/`PointerLeave` so the manager can
//! pause its countdown.

use super::manager::{Manager, Message};
use super::notification::{Kind, Notification, Placement};
use super::timer::Clock;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `leaving` fades the card while its exit animation plays.
    pub fn view<'a>(notification: &Notification, leaving: bool) -> Element<'a, Message> {
        let accent = accent_color(notification.kind(), leaving);
        let id = notification.id().clone();

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        let title = notification.render_title();
        if !title.is_empty() {
            body = body.push(Text::new(title).size(typography::BODY_LG));
        }
        body = body.push(
            Text::new(notification.render_content())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

        let close_button = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::Close(id.clone()))
            .padding(spacing::XXS)
            .style(close_button_style);

        // Layout: [glyph] [title/content] [close]
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top);
        if let Some(glyph) = notification.kind().glyph() {
            row = row.push(
                Container::new(
                    Text::new(glyph)
                        .size(sizing::ICON_MD)
                        .style(move |_: &Theme| text::Style {
                            color: Some(accent),
                        }),
                )
                .padding(spacing::XXS),
            );
        }
        let row = row.push(body).push(close_button);

        let card = Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent));

        mouse_area(card)
            .on_enter(Message::PointerEnter(id.clone()))
            .on_exit(Message::PointerLeave(id))
            .into()
    }

    /// Renders one stacked column per non-empty placement, layered over
    /// the whole window.
    pub fn view_overlay<'a, C: Clock>(manager: &Manager<C>) -> Element<'a, Message> {
        let corners: Vec<Element<'a, Message>> = Placement::ALL
            .into_iter()
            .filter(|placement| manager.count_in(*placement) > 0)
            .map(|placement| Self::view_corner(manager, placement))
            .collect();

        if corners.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Stack::with_children(corners)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_corner<'a, C: Clock>(
        manager: &Manager<C>,
        placement: Placement,
    ) -> Element<'a, Message> {
        let mut toasts: Vec<Element<'a, Message>> = manager
            .visible(placement)
            .map(|notification| Self::view(notification, manager.is_leaving(notification.id())))
            .collect();
        // Newest toast sits closest to the screen edge.
        if !placement.is_top() {
            toasts.reverse();
        }

        let (horizontal, vertical) = corner_alignment(placement);
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

fn corner_alignment(placement: Placement) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = if placement.is_left() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    };
    let vertical = if placement.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Accent color of a kind, faded while leaving.
fn accent_color(kind: Kind, leaving: bool) -> Color {
    let color = match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
        Kind::Blank | Kind::Template => palette::GRAY_400,
    };
    if leaving {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (overlay(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (overlay(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::NotificationOptions;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = accent_color(Kind::Success, false);
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn leaving_toast_fades_accent() {
        let accent = accent_color(Kind::Error, true);
        assert!((accent.a - opacity::OVERLAY_MEDIUM).abs() < f32::EPSILON);
        assert!((accent.r - palette::ERROR_500.r).abs() < f32::EPSILON);
    }

    #[test]
    fn blank_and_template_share_neutral_accent() {
        assert_eq!(accent_color(Kind::Blank, false), palette::GRAY_400);
        assert_eq!(accent_color(Kind::Template, false), palette::GRAY_400);
    }

    #[test]
    fn corners_align_to_placement() {
        assert_eq!(
            corner_alignment(Placement::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
        assert_eq!(
            corner_alignment(Placement::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn close_button_only_fills_background_on_interaction() {
        let theme = Theme::Light;
        assert!(close_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(close_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_notifications() {
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager);

        manager.info("title", "content", NotificationOptions::new());
        manager.error(
            "",
            "bottom",
            NotificationOptions::new().with_placement(Placement::BottomLeft),
        );
        let _ = Toast::view_overlay(&manager);
    }
}
