//! Search view: one backend page of results plus the pager.

use std::collections::HashMap;

use iced::widget::{column, container, image, scrollable, text};
use iced::{Element, Length};

use crate::api::models::GifPage;
use crate::config::PAGE_LIMIT;
use crate::state::favorites::FavoritesCache;
use crate::ui::{self, grid, pagination};
use crate::Message;

pub fn view<'a>(
    query: &str,
    current_page: usize,
    results: Option<&'a GifPage>,
    thumbnails: &HashMap<String, image::Handle>,
    favorites: &FavoritesCache,
) -> Element<'a, Message> {
    let heading = text(format!("Search Results for \"{query}\"")).size(32);

    let body: Element<Message> = match results {
        Some(page) => {
            let total = pagination::total_pages(page.pagination.total_count, PAGE_LIMIT);
            column![
                grid::gif_grid(&page.data, thumbnails, favorites),
                container(pagination::pager(current_page, total)).center_x(Length::Fill),
            ]
            .spacing(20)
            .into()
        }
        None => ui::loading(),
    };

    scrollable(column![heading, body].spacing(20).width(Length::Fill)).into()
}
