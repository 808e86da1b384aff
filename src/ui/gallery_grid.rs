// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: category filter row, thumbnail grid, and the
//! load-more control.
//!
//! The grid renders only the ids the collection reports as visible, chunked
//! into fixed-width rows. Tiles whose image has not finished decoding show a
//! loading placeholder so the layout stays stable while decode tasks run.

use crate::gallery::{CategoryFilter, Collection, ItemId};
use crate::media::ImageSlot;
use crate::ui::styles::{self, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, scrollable, Column, Container, Row, Text};
use iced::{mouse, Element, Length};
use std::collections::HashMap;

const GRID_COLUMNS: usize = 3;
const TILE_HEIGHT: f32 = 240.0;

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(CategoryFilter),
    ItemPressed(ItemId),
    LoadMorePressed,
    RegisterPressed,
}

/// Everything the grid needs to render.
pub struct ViewContext<'a> {
    pub collection: &'a Collection,
    pub visible: &'a [ItemId],
    pub images: &'a HashMap<ItemId, ImageSlot>,
    pub event_title: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.event_title)
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("Register").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button_primary)
                .on_press(Message::RegisterPressed),
        );

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(header)
        .push(filter_row(ctx.collection));

    for chunk in ctx.visible.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for id in chunk {
            row = row.push(tile(ctx.collection, ctx.images, *id));
        }
        content = content.push(row);
    }

    if ctx.visible.is_empty() {
        content = content.push(
            Container::new(Text::new("No photos in this category yet.").size(typography::BODY))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding(spacing::XL),
        );
    }

    content = content.push(load_more_row(ctx.collection));

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One toggle button per known category, preceded by the wildcard.
fn filter_row(collection: &Collection) -> Element<'_, Message> {
    let active = collection.filter();

    let mut row = Row::new()
        .spacing(spacing::XS)
        .push(filter_button(CategoryFilter::All, active));

    for category in collection.categories() {
        row = row.push(filter_button(CategoryFilter::Category(category), active));
    }

    row.into()
}

fn filter_button<'a>(filter: CategoryFilter, active: &CategoryFilter) -> Element<'a, Message> {
    let selected = filter == *active;
    let label = filter.label().to_string();

    button(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_filter(selected))
        .on_press(Message::FilterSelected(filter))
        .into()
}

fn tile<'a>(
    collection: &'a Collection,
    images: &'a HashMap<ItemId, ImageSlot>,
    id: ItemId,
) -> Element<'a, Message> {
    let Some(item) = collection.get(id) else {
        return Column::new().into();
    };

    let thumbnail: Element<'a, Message> = match images.get(&id) {
        Some(ImageSlot::Ready(data)) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(TILE_HEIGHT))
            .into(),
        Some(ImageSlot::Failed) => placeholder("Image unavailable"),
        Some(ImageSlot::Loading) | None => placeholder("Loading..."),
    };

    let mut card = Column::new()
        .spacing(spacing::XXS)
        .push(thumbnail)
        .push(Text::new(item.title.as_str()).size(typography::BODY));

    if !item.caption.is_empty() {
        card = card.push(Text::new(item.caption.as_str()).size(typography::BODY_SM));
    }

    let surface = Container::new(card)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::card);

    mouse_area(surface)
        .interaction(mouse::Interaction::Pointer)
        .on_press(Message::ItemPressed(id))
        .into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fixed(TILE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// The load-more button greys out once every item has been revealed.
fn load_more_row(collection: &Collection) -> Element<'_, Message> {
    let exhausted = !collection.has_unrevealed();

    let label = if exhausted {
        "All photos shown"
    } else {
        "Load more"
    };

    let mut more = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG]);

    if exhausted {
        more = more.style(styles::button_disabled);
    } else {
        more = more
            .style(styles::button_primary)
            .on_press(Message::LoadMorePressed);
    }

    Container::new(more)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
