// SPDX-License-Identifier: MPL-2.0
//! Receipt screen shown after a confirmed payment.
//!
//! Shows the registration details from the session store alongside the
//! relay delivery status. The payment is already confirmed at this point;
//! a failed relay only changes the status line, never the receipt.

use crate::relay::Registration;
use crate::ui::styles::{self, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

/// Delivery state of the registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayStatus {
    /// No web-hook configured; the registration stays local.
    Disabled,
    Sending,
    /// Delivered, with the number of retries that were needed.
    Delivered { retries: u32 },
    Failed(String),
}

pub struct ViewContext<'a> {
    pub registration: &'a Registration,
    pub status: &'a RelayStatus,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let registration = ctx.registration;

    let details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new("Registration confirmed").size(typography::TITLE_MD))
        .push(line("Name", &registration.full_name))
        .push(line("Email", &registration.email))
        .push(line("Mobile", &registration.mobile))
        .push(line("City", &registration.city))
        .push(line("Profession", &registration.profession))
        .push(line("Payment id", &registration.payment_id))
        .push(line("Amount", &registration.amount))
        .push(line("Time", &registration.timestamp))
        .push(status_line(ctx.status))
        .push(
            button(Text::new("Back to gallery").size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button_primary)
                .on_press(Message::BackPressed),
        );

    Container::new(
        Container::new(details)
            .padding(spacing::XL)
            .max_width(480.0)
            .style(styles::card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XL)
    .into()
}

fn line<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .color(styles::palette::GRAY_400)
                .width(Length::Fixed(110.0)),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn status_line(status: &RelayStatus) -> Element<'_, Message> {
    let (text, color): (String, Color) = match status {
        RelayStatus::Disabled => (
            "Saved locally (no relay configured).".to_string(),
            styles::palette::GRAY_400,
        ),
        RelayStatus::Sending => (
            "Recording your registration...".to_string(),
            styles::palette::GRAY_400,
        ),
        RelayStatus::Delivered { retries: 0 } => (
            "Registration recorded.".to_string(),
            styles::palette::SUCCESS_500,
        ),
        RelayStatus::Delivered { retries } => (
            format!("Registration recorded after {retries} retries."),
            styles::palette::SUCCESS_500,
        ),
        RelayStatus::Failed(reason) => (
            format!("Could not record the registration: {reason}"),
            styles::palette::ERROR_500,
        ),
    };

    Text::new(text).size(typography::BODY_SM).color(color).into()
}
