//! View components
//!
//! Each view composes API results and the favorites cache into a
//! read/display/act cycle. Views own no authoritative state beyond
//! transient UI flags; everything durable lives in `crate::state`.

pub mod detail;
pub mod favorites;
pub mod grid;
pub mod pagination;
pub mod search;
pub mod trending;

use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    text_input,
};
use iced::{Alignment, Color, Element, Length};

use crate::state::route::Route;
use crate::Message;

/// Lay `overlay` over `base`, dimming everything else. Clicking outside the
/// overlay emits `on_blur`.
pub fn modal<'a>(
    base: Element<'a, Message>,
    overlay: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(overlay)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Top navigation: search box, screen links, sign out.
pub fn navbar<'a>(search_input: &str, route: &Route) -> Element<'a, Message> {
    let search = text_input("Search Giphy...", search_input)
        .on_input(Message::SearchInputChanged)
        .on_submit(Message::SearchSubmitted)
        .width(Length::Fixed(280.0));

    let trending = button(text("Trending")).on_press_maybe(
        (!matches!(route, Route::Trending)).then_some(Message::Navigate(Route::Trending)),
    );
    let favorites = button(text("Favorites")).on_press_maybe(
        (!matches!(route, Route::Favorites { .. }))
            .then_some(Message::Navigate(Route::Favorites { page: 0, tag: None })),
    );
    let sign_out = button(text("Sign out")).on_press(Message::LogOut);

    container(
        row![search, horizontal_space(), trending, favorites, sign_out]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding(10)
    .into()
}

/// Shown while no session token is present; the identity provider issues
/// tokens out of band.
pub fn sign_in(token_input: &str) -> Element<'_, Message> {
    let content = column![
        text("GIF Gallery").size(48),
        text("Paste an access token issued by your identity provider to sign in.").size(16),
        text_input("Access token...", token_input)
            .secure(true)
            .on_input(Message::TokenInputChanged)
            .on_submit(Message::SubmitToken)
            .width(Length::Fixed(420.0)),
        button(text("Sign in")).on_press(Message::SubmitToken),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    center(content).into()
}

/// Centered placeholder while a fetch is in flight.
pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Loading...").size(16))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(40)
        .into()
}

/// Centered informational notice.
pub fn notice<'a>(message: &str) -> Element<'a, Message> {
    container(text(message.to_string()).size(16))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(40)
        .into()
}
