// SPDX-License-Identifier: MPL-2.0
//! Registration form for the event ticket.
//!
//! Name, email, and mobile are required; city and profession are optional
//! and get normalized downstream. The whole form locks while a payment is
//! in flight so a double submit cannot produce two payloads.

use crate::ui::styles::{self, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    FullNameChanged(String),
    EmailChanged(String),
    MobileChanged(String),
    CityChanged(String),
    ProfessionChanged(String),
    SubmitPressed,
    BackPressed,
}

/// What the parent should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Required fields are filled; start the payment.
    Submit,
    /// Leave the form and return to the gallery.
    Back,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub profession: String,
    /// Set while a payment or relay attempt is running.
    pub locked: bool,
    /// Validation message shown under the submit button.
    pub error: Option<String>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Required fields must be non-blank before submit is allowed.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.mobile.trim().is_empty()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        if self.locked && !matches!(message, Message::BackPressed) {
            return Effect::None;
        }

        match message {
            Message::FullNameChanged(value) => self.full_name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::MobileChanged(value) => self.mobile = value,
            Message::CityChanged(value) => self.city = value,
            Message::ProfessionChanged(value) => self.profession = value,
            Message::SubmitPressed => {
                if self.is_submittable() {
                    self.error = None;
                    self.locked = true;
                    return Effect::Submit;
                }
                self.error = Some("Please fill in name, email, and mobile.".to_string());
            }
            Message::BackPressed => return Effect::Back,
        }

        Effect::None
    }
}

pub struct ViewContext<'a> {
    pub state: &'a State,
    /// Ticket price shown on the submit button.
    pub amount: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;

    let mut form = Column::new()
        .spacing(spacing::SM)
        .max_width(480.0)
        .push(Text::new("Register for the event").size(typography::TITLE_MD))
        .push(field(
            "Full name",
            &state.full_name,
            state.locked,
            Message::FullNameChanged,
        ))
        .push(field("Email", &state.email, state.locked, Message::EmailChanged))
        .push(field(
            "Mobile",
            &state.mobile,
            state.locked,
            Message::MobileChanged,
        ))
        .push(field(
            "City (optional)",
            &state.city,
            state.locked,
            Message::CityChanged,
        ))
        .push(field(
            "Profession (optional)",
            &state.profession,
            state.locked,
            Message::ProfessionChanged,
        ));

    let submit_label = if state.locked {
        "Processing...".to_string()
    } else {
        format!("Pay \u{20B9}{} and register", ctx.amount)
    };

    let mut submit = button(Text::new(submit_label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG]);
    if state.locked {
        submit = submit.style(styles::button_disabled);
    } else {
        submit = submit
            .style(styles::button_primary)
            .on_press(Message::SubmitPressed);
    }

    let back = button(Text::new("Back to gallery").size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_filter(false))
        .on_press(Message::BackPressed);

    form = form.push(
        Row::new()
            .spacing(spacing::MD)
            .push(submit)
            .push(back),
    );

    if let Some(error) = &state.error {
        form = form.push(
            Text::new(error.as_str())
                .size(typography::BODY_SM)
                .color(styles::palette::ERROR_500),
        );
    }

    Container::new(
        Container::new(form)
            .padding(spacing::XL)
            .style(styles::card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XL)
    .into()
}

fn field<'a>(
    label: &'a str,
    value: &'a str,
    locked: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut input = text_input(label, value).padding(spacing::XS);
    if !locked {
        input = input.on_input(on_change);
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        State {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            ..State::default()
        }
    }

    #[test]
    fn submit_requires_name_email_and_mobile() {
        let mut state = State::new();
        assert_eq!(state.update(Message::SubmitPressed), Effect::None);
        assert!(state.error.is_some());
        assert!(!state.locked);

        let mut state = filled();
        assert_eq!(state.update(Message::SubmitPressed), Effect::Submit);
        assert!(state.locked);
    }

    #[test]
    fn blank_required_field_blocks_submit() {
        let mut state = filled();
        state.mobile = "   ".to_string();
        assert!(!state.is_submittable());
        assert_eq!(state.update(Message::SubmitPressed), Effect::None);
    }

    #[test]
    fn locked_form_ignores_edits_and_submits() {
        let mut state = filled();
        state.update(Message::SubmitPressed);
        assert!(state.locked);

        assert_eq!(
            state.update(Message::EmailChanged("other@example.com".to_string())),
            Effect::None
        );
        assert_eq!(state.email, "asha@example.com");
        assert_eq!(state.update(Message::SubmitPressed), Effect::None);
    }
}
