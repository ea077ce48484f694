//! The GIF thumbnail grid shared by the trending, search, and favorites
//! views.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, mouse_area, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::api::models::GifImage;
use crate::state::favorites::FavoritesCache;
use crate::Message;

/// Cell width; matches the GIF API's `fixed_width` rendition tier.
const CELL_WIDTH: f32 = 200.0;

/// A wrapping grid of GIF thumbnails.
///
/// Cells whose thumbnail has not been decoded yet show a placeholder.
/// Clicking a cell opens the detail overlay; the action row under it
/// carries the favorite toggle and, when favorited, a tags shortcut.
pub fn gif_grid<'a>(
    gifs: &'a [GifImage],
    thumbnails: &HashMap<String, image::Handle>,
    favorites: &FavoritesCache,
) -> Element<'a, Message> {
    let cells = gifs
        .iter()
        .map(|gif| {
            cell(
                gif,
                thumbnails.get(&gif.id).cloned(),
                favorites.is_favorite(&gif.id),
            )
        })
        .collect();

    container(Wrap::with_elements(cells).spacing(10.0).line_spacing(10.0))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn cell(
    gif: &GifImage,
    thumbnail: Option<image::Handle>,
    is_favorite: bool,
) -> Element<'_, Message> {
    let preview: Element<Message> = match thumbnail {
        Some(handle) => image(handle).width(Length::Fixed(CELL_WIDTH)).into(),
        None => container(text("..."))
            .center_x(Length::Fixed(CELL_WIDTH))
            .center_y(Length::Fixed(CELL_WIDTH * 0.75))
            .into(),
    };

    let star = button(text(if is_favorite { "♥" } else { "♡" }))
        .on_press(Message::ToggleFavorite(gif.id.clone()));

    let mut actions = row![star].spacing(5);
    if is_favorite {
        actions = actions.push(button(text("tags")).on_press(Message::OpenDetail(gif.clone())));
    }

    column![
        mouse_area(preview).on_press(Message::OpenDetail(gif.clone())),
        actions,
    ]
    .spacing(5)
    .align_x(Alignment::Center)
    .into()
}
