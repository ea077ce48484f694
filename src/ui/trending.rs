//! Trending view: the backend-ranked default feed.
//!
//! The feed refreshes on a fixed cadence while this view is visible; the
//! timer itself is a subscription owned by the application and stops when
//! the user navigates away.

use std::collections::HashMap;

use iced::widget::{column, image, scrollable, text};
use iced::{Element, Length};

use crate::api::models::GifPage;
use crate::state::favorites::FavoritesCache;
use crate::ui::{self, grid};
use crate::Message;

pub fn view<'a>(
    page: Option<&'a GifPage>,
    thumbnails: &HashMap<String, image::Handle>,
    favorites: &FavoritesCache,
) -> Element<'a, Message> {
    let results: Element<Message> = match page {
        Some(page) => grid::gif_grid(&page.data, thumbnails, favorites),
        None => ui::loading(),
    };

    scrollable(
        column![text("Trending GIF Images").size(32), results]
            .spacing(20)
            .width(Length::Fill),
    )
    .into()
}
