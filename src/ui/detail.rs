//! Detail overlay: full-size rendition, favorite toggle, tag editor, share.

use iced::widget::{button, column, container, horizontal_space, image, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::api::models::{FavoriteRecord, GifImage};
use crate::state::favorites::FavoritesCache;
use crate::Message;

/// Width of the overlay card.
const CARD_WIDTH: f32 = 520.0;

pub fn view<'a>(
    gif: &'a GifImage,
    favorites: &'a FavoritesCache,
    tag_input: &str,
    share_open: bool,
    media: Option<&image::Handle>,
) -> Element<'a, Message> {
    let close = row![
        horizontal_space(),
        button(text("x")).on_press(Message::CloseDetail),
    ];

    let picture: Element<Message> = match media {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => container(text("Loading..."))
            .center_x(Length::Fill)
            .padding(40)
            .into(),
    };

    let is_favorite = favorites.is_favorite(&gif.id);
    let star_label = if is_favorite {
        "♥ Unfavorite"
    } else {
        "♡ Favorite"
    };
    let actions = row![
        button(text(star_label)).on_press(Message::ToggleFavorite(gif.id.clone())),
        button(text("Share")).on_press(Message::OpenShare),
    ]
    .spacing(10);

    let mut card = column![close, picture, text(gif.title.as_str()).size(20), actions].spacing(15);

    if let Some(record) = favorites.get(&gif.id) {
        card = card.push(tag_editor(&gif.id, record, tag_input));
    }

    if share_open {
        card = card.push(share_panel(gif));
    }

    container(card)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn tag_editor<'a>(
    id: &'a str,
    record: &'a FavoriteRecord,
    tag_input: &str,
) -> Element<'a, Message> {
    let mut pills = row![].spacing(5);
    for tag in &record.tags {
        pills = pills.push(
            button(text(format!("{tag} x"))).on_press(Message::RemoveTag {
                id: id.to_string(),
                tag: tag.clone(),
            }),
        );
    }

    column![
        text("Tags").size(16),
        pills,
        row![
            text_input("Enter new tag name...", tag_input)
                .on_input(Message::TagInputChanged)
                .on_submit(Message::SubmitTag),
            button(text("+ Add")).on_press(Message::SubmitTag),
        ]
        .spacing(5),
    ]
    .spacing(10)
    .into()
}

fn share_panel(gif: &GifImage) -> Element<'_, Message> {
    column![
        text("Share").size(16),
        row![
            text(gif.url.as_str()).width(Length::Fill),
            button(text("Copy link")).on_press(Message::CopyShareLink(gif.url.clone())),
            button(text("Close")).on_press(Message::CloseShare),
        ]
        .spacing(5)
        .align_y(Alignment::Center),
    ]
    .spacing(10)
    .into()
}
