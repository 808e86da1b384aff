// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the gallery grid, lightbox overlay, and
//! registration form.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Base colors shared across the views.
pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Warm amber accent used by the event branding.
    pub const ACCENT_400: Color = Color::from_rgb(0.93, 0.68, 0.31);
    pub const ACCENT_500: Color = Color::from_rgb(0.85, 0.56, 0.18);
    pub const ACCENT_600: Color = Color::from_rgb(0.72, 0.45, 0.12);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Font size scale.
pub mod typography {
    pub const BODY_SM: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_LG: f32 = 28.0;
}

const RADIUS_SM: f32 = 4.0;
const RADIUS_LG: f32 = 8.0;

/// Primary action button (submit, load more).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        _ => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ACCENT_600,
            width: 1.0,
            radius: RADIUS_SM.into(),
        },
        ..button::Style::default()
    }
}

/// Toggle button in the category filter row. Selected filters carry the
/// accent background, inactive ones stay neutral.
pub fn button_filter(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return button_primary(theme, status);
        }

        let background = match status {
            button::Status::Hovered => palette::GRAY_200,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: RADIUS_SM.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Translucent overlay buttons (lightbox navigation and close).
pub fn button_overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.8,
        button::Status::Pressed => 0.9,
        _ => 0.5,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: RADIUS_SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Disabled button (load more at exhaustion, locked form submit).
pub fn button_disabled(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: RADIUS_SM.into(),
        },
        ..button::Style::default()
    }
}

/// Dimmed backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Card surface for grid tiles and the registration panel.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r, base.g, base.b, 0.95,
        ))),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: RADIUS_LG.into(),
        },
        ..container::Style::default()
    }
}
