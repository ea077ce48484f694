//! Favorites view: tag filter pills, the hydrated grid, client-side paging.
//!
//! Favorites are paged locally from the cache; only the visible page of ids
//! is hydrated into displayable media through the backend.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length};

use crate::api::models::{FavoriteRecord, GifImage};
use crate::state::favorites::FavoritesCache;
use crate::ui::{self, grid, pagination};
use crate::Message;

/// What the current favorites page should show, given the cached records
/// and the route's page/tag state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePlan {
    /// Hydrate and show these ids.
    Show {
        ids: Vec<String>,
        total_pages: usize,
    },
    /// The page is past the end; go back to the last populated page.
    StepBack { page: usize },
    /// The tag filter no longer matches anything; drop it.
    DropFilter,
    /// Nothing favorited at all.
    Empty,
}

/// Select the slice of records the current page shows, in pages of `limit`.
///
/// An out-of-range page clamps straight to the last populated one, so a
/// deep link with an absurd page number resolves in a single step.
pub fn plan_page(
    favorites: &FavoritesCache,
    tag: Option<&str>,
    page: usize,
    limit: usize,
) -> PagePlan {
    let filtered: Vec<&FavoriteRecord> = match tag {
        Some(tag) => favorites.by_tag(tag),
        None => favorites.records().iter().collect(),
    };

    if filtered.is_empty() {
        if tag.is_some() {
            return PagePlan::DropFilter;
        }
        if page > 0 {
            return PagePlan::StepBack { page: 0 };
        }
        return PagePlan::Empty;
    }

    let total_pages = pagination::total_pages(filtered.len() as u64, limit);
    if page >= total_pages {
        return PagePlan::StepBack {
            page: total_pages - 1,
        };
    }

    PagePlan::Show {
        ids: filtered
            .iter()
            .skip(pagination::offset(page, limit))
            .take(limit)
            .map(|record| record.id.clone())
            .collect(),
        total_pages,
    }
}

pub fn view<'a>(
    favorites: &'a FavoritesCache,
    tag: Option<&'a str>,
    current_page: usize,
    gifs: Option<&'a [GifImage]>,
    total_pages: usize,
    thumbnails: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let heading = text("Favorite GIF Images").size(32);

    let body: Element<Message> = match gifs {
        None => ui::loading(),
        Some([]) => ui::notice("You have no favorite GIF images."),
        Some(gifs) => {
            let mut content = column![
                tag_pills(favorites, tag),
                grid::gif_grid(gifs, thumbnails, favorites),
            ]
            .spacing(20);

            if total_pages > 1 {
                content = content.push(
                    container(pagination::pager(current_page, total_pages)).center_x(Length::Fill),
                );
            }

            content.into()
        }
    };

    scrollable(column![heading, body].spacing(20).width(Length::Fill)).into()
}

/// One pill per distinct tag. The active pill clears the filter, any other
/// applies it, always back on page zero.
fn tag_pills<'a>(favorites: &FavoritesCache, active: Option<&str>) -> Element<'a, Message> {
    let mut pills = row![].spacing(5);

    for tag in favorites.all_tags() {
        let is_active = active == Some(tag.as_str());
        let label = if is_active {
            format!("x {tag}")
        } else {
            tag.clone()
        };
        let next = if is_active { None } else { Some(tag) };
        pills = pills.push(button(text(label)).on_press(Message::SetTagFilter(next)));
    }

    pills.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(count: usize) -> FavoritesCache {
        let mut cache = FavoritesCache::new();
        cache.replace(
            (0..count)
                .map(|index| FavoriteRecord::new(format!("gif-{index}")))
                .collect(),
        );
        cache
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        match plan_page(&cache(23), None, 2, 9) {
            PagePlan::Show { ids, total_pages } => {
                assert_eq!(ids.len(), 5);
                assert_eq!(ids[0], "gif-18");
                assert_eq!(total_pages, 3);
            }
            plan => panic!("unexpected plan: {plan:?}"),
        }
    }

    #[test]
    fn test_emptied_page_steps_back() {
        assert_eq!(
            plan_page(&cache(9), None, 1, 9),
            PagePlan::StepBack { page: 0 }
        );
    }

    #[test]
    fn test_huge_page_clamps_to_last_populated_page() {
        // a deep link like /favorites?p=9999999 lands directly on the last
        // page instead of walking back one page at a time
        assert_eq!(
            plan_page(&cache(23), None, 9_999_999, 9),
            PagePlan::StepBack { page: 2 }
        );
    }

    #[test]
    fn test_huge_page_with_no_records_resolves_in_one_step() {
        assert_eq!(
            plan_page(&cache(0), None, 9_999_999, 9),
            PagePlan::StepBack { page: 0 }
        );
        assert_eq!(plan_page(&cache(0), None, 0, 9), PagePlan::Empty);
    }

    #[test]
    fn test_unmatched_tag_drops_filter() {
        assert_eq!(
            plan_page(&cache(3), Some("absent"), 0, 9),
            PagePlan::DropFilter
        );
    }

    #[test]
    fn test_no_favorites_is_empty() {
        assert_eq!(plan_page(&cache(0), None, 0, 9), PagePlan::Empty);
    }

    #[test]
    fn test_tag_filter_selects_matching_records_in_order() {
        let mut favorites = FavoritesCache::new();
        favorites.replace(vec![
            FavoriteRecord::with_tags("a", ["funny"]),
            FavoriteRecord::new("b"),
            FavoriteRecord::with_tags("c", ["funny", "cute"]),
        ]);

        match plan_page(&favorites, Some("funny"), 0, 9) {
            PagePlan::Show { ids, total_pages } => {
                assert_eq!(ids, vec!["a", "c"]);
                assert_eq!(total_pages, 1);
            }
            plan => panic!("unexpected plan: {plan:?}"),
        }
    }
}
