// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox overlay.
//!
//! Rendered as a stack layer above the grid: a dimmed backdrop that closes
//! on press, the current image with its title, caption, and position
//! counter, and previous/close/next controls. Presses on the image itself
//! start swipe tracking instead of closing.

use crate::gallery::GalleryItem;
use crate::media::ImageSlot;
use crate::ui::styles::{self, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, responsive, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Size};

#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    PreviousPressed,
    NextPressed,
    BackdropPressed,
    ImagePressed,
    ImageReleased,
}

pub struct ViewContext<'a> {
    pub item: &'a GalleryItem,
    pub slot: Option<&'a ImageSlot>,
    /// "n / total" position string.
    pub counter: String,
    /// Navigation controls are pointless with a single visible item.
    pub show_navigation: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let picture: Element<'_, Message> = match ctx.slot {
        Some(ImageSlot::Ready(data)) => {
            let handle = data.handle.clone();
            let (width, height) = (data.width as f32, data.height as f32);
            // The press area covers the rendered image only. Presses on it
            // start a swipe; presses on the letterbox margins fall through
            // to the backdrop and close.
            responsive(move |available| {
                let fitted = fitted_size(width, height, available);
                let img = image(handle.clone())
                    .width(Length::Fixed(fitted.width))
                    .height(Length::Fixed(fitted.height));
                Container::new(
                    mouse_area(img)
                        .on_press(Message::ImagePressed)
                        .on_release(Message::ImageReleased),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
            })
            .into()
        }
        Some(ImageSlot::Failed) => centered_label("Image unavailable"),
        Some(ImageSlot::Loading) | None => centered_label("Loading..."),
    };

    let mut caption_block = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.item.title.as_str())
                .size(typography::TITLE_SM)
                .color(styles::palette::WHITE),
        );

    if !ctx.item.caption.is_empty() {
        caption_block = caption_block.push(
            Text::new(ctx.item.caption.as_str())
                .size(typography::BODY_SM)
                .color(styles::palette::GRAY_200),
        );
    }

    caption_block = caption_block.push(
        Text::new(ctx.counter.clone())
            .size(typography::BODY_SM)
            .color(styles::palette::GRAY_200),
    );

    let mut controls = Row::new().spacing(spacing::MD).align_y(Vertical::Center);

    if ctx.show_navigation {
        controls = controls.push(overlay_button("\u{25C0}", Message::PreviousPressed));
    }
    controls = controls.push(overlay_button("\u{2715}", Message::ClosePressed));
    if ctx.show_navigation {
        controls = controls.push(overlay_button("\u{25B6}", Message::NextPressed));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(picture).width(Length::Fill).height(Length::Fill))
        .push(caption_block)
        .push(controls);

    Stack::new().push(backdrop).push(content).into()
}

fn overlay_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_overlay)
        .on_press(message)
        .into()
}

/// Contain-fit: the largest size preserving the image's aspect ratio that
/// fits the available region. The remainder is letterbox margin and belongs
/// to the backdrop.
fn fitted_size(image_width: f32, image_height: f32, available: Size) -> Size {
    if image_width <= 0.0 || image_height <= 0.0 {
        return Size::ZERO;
    }
    let scale = (available.width / image_width).min(available.height / image_height);
    Size::new(image_width * scale, image_height * scale)
}

fn centered_label<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .color(styles::palette::WHITE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_is_letterboxed_top_and_bottom() {
        let fitted = fitted_size(1600.0, 900.0, Size::new(800.0, 800.0));
        assert_eq!(fitted, Size::new(800.0, 450.0));
    }

    #[test]
    fn tall_image_is_letterboxed_left_and_right() {
        let fitted = fitted_size(900.0, 1600.0, Size::new(800.0, 800.0));
        assert_eq!(fitted, Size::new(450.0, 800.0));
    }

    #[test]
    fn small_image_scales_up_to_fill_one_axis() {
        let fitted = fitted_size(100.0, 100.0, Size::new(600.0, 400.0));
        assert_eq!(fitted, Size::new(400.0, 400.0));
    }

    #[test]
    fn degenerate_dimensions_collapse_to_zero() {
        assert_eq!(fitted_size(0.0, 100.0, Size::new(800.0, 600.0)), Size::ZERO);
        assert_eq!(fitted_size(100.0, 0.0, Size::new(800.0, 600.0)), Size::ZERO);
    }
}
