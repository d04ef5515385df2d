// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The control panel fills the window and the toast overlay is stacked on
//! top of it.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Clock, Kind, Manager, Placement, Toast};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a, C: Clock> {
    pub notifications: &'a Manager<C>,
    pub placement: Placement,
}

/// Renders the control panel with the toast overlay on top.
pub fn view<C: Clock>(ctx: ViewContext<'_, C>) -> Element<'_, Message> {
    let kinds = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Blank,
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, kind| {
        let label = Text::new(kind_label(kind)).size(typography::BODY);
        row.push(button(label).on_press(Message::Show(kind)))
    });

    let extras = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Sticky")).on_press(Message::ShowSticky))
        .push(button(Text::new("Keyed")).on_press(Message::ShowKeyed))
        .push(button(Text::new("Template")).on_press(Message::ShowTemplate))
        .push(button(Text::new("Remove all")).on_press(Message::RemoveAll))
        .push(button(Text::new("Export log")).on_press(Message::ExportDiagnostics));

    let placements = Placement::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, placement| {
            let label = Text::new(placement_label(placement)).size(typography::BODY);
            let control = if placement == ctx.placement {
                // Current selection is shown disabled.
                button(label)
            } else {
                button(label).on_press(Message::PlacementSelected(placement))
            };
            row.push(control)
        });

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Notifications").size(typography::TITLE_MD))
        .push(kinds)
        .push(extras)
        .push(Text::new("Placement").size(typography::BODY))
        .push(placements)
        .push(
            Text::new(format!("Active: {}", ctx.notifications.count()))
                .size(typography::BODY),
        );

    let panel = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

    Stack::new()
        .push(panel)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn kind_label(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Success",
        Kind::Error => "Error",
        Kind::Warning => "Warning",
        Kind::Info => "Info",
        Kind::Blank => "Blank",
        Kind::Template => "Template",
    }
}

fn placement_label(placement: Placement) -> &'static str {
    match placement {
        Placement::TopLeft => "Top left",
        Placement::TopRight => "Top right",
        Placement::BottomLeft => "Bottom left",
        Placement::BottomRight => "Bottom right",
    }
}
