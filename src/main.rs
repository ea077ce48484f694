use std::collections::{HashMap, HashSet};
use std::time::Duration;

use iced::widget::{column, container, image};
use iced::{Element, Length, Subscription, Task, Theme};

mod api;
mod config;
mod error;
mod media;
mod session;
mod state;
mod ui;

use api::models::{FavoriteRecord, GifImage, GifPage};
use api::ApiClient;
use config::{Config, PAGE_LIMIT, TRENDING_REFRESH_SECS};
use error::Error;
use session::Session;
use state::favorites::FavoritesCache;
use state::route::Route;
use ui::pagination;

/// Main application state.
///
/// All durable client-side state hangs off this struct and is mutated only
/// from `update`; background tasks report back through messages.
struct GifGallery {
    config: Config,
    session: Session,
    /// Present only while signed in.
    api: Option<ApiClient>,
    route: Route,
    favorites: FavoritesCache,
    /// Ids with a favorite toggle already in flight.
    busy: HashSet<String>,
    trending: Option<GifPage>,
    search_input: String,
    search_results: Option<GifPage>,
    /// The hydrated page of the favorites view. `None` while loading.
    favorite_gifs: Option<Vec<GifImage>>,
    favorites_total_pages: usize,
    /// Decoded first-frame thumbnails, keyed by GIF id.
    thumbnails: HashMap<String, image::Handle>,
    pending_thumbs: HashSet<String>,
    detail: Option<GifImage>,
    detail_media: Option<image::Handle>,
    share_open: bool,
    tag_input: String,
    token_input: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    GoToPage(usize),
    SetTagFilter(Option<String>),
    SearchInputChanged(String),
    SearchSubmitted,
    /// The trending poll timer fired.
    TrendingTick,
    TrendingLoaded(Result<GifPage, Error>),
    SearchLoaded {
        query: String,
        page: usize,
        result: Result<GifPage, Error>,
    },
    FavoritesRefreshed(Result<Vec<FavoriteRecord>, Error>),
    FavoritePageLoaded(Result<GifPage, Error>),
    ThumbnailFetched {
        id: String,
        result: Result<image::Handle, Error>,
    },
    ToggleFavorite(String),
    /// Any favorites mutation (create, delete, tag add/remove) completed.
    MutationDone {
        id: String,
        result: Result<(), Error>,
    },
    OpenDetail(GifImage),
    DetailMediaLoaded(Result<image::Handle, Error>),
    CloseDetail,
    TagInputChanged(String),
    SubmitTag,
    RemoveTag {
        id: String,
        tag: String,
    },
    OpenShare,
    CloseShare,
    CopyShareLink(String),
    TokenInputChanged(String),
    SubmitToken,
    LogOut,
}

impl GifGallery {
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let session = Session::load();

        // optional startup deep link, e.g. `gif-gallery "/search?q=cats&p=2"`
        let route = std::env::args()
            .nth(1)
            .map(|location| Route::parse(&location))
            .unwrap_or(Route::Trending);

        let api = session
            .token()
            .map(|token| ApiClient::new(config.base_url(), token));

        tracing::info!(
            signed_in = api.is_some(),
            backend = %config.base_url(),
            "starting up"
        );

        let mut app = GifGallery {
            config,
            session,
            api,
            route,
            favorites: FavoritesCache::new(),
            busy: HashSet::new(),
            trending: None,
            search_input: String::new(),
            search_results: None,
            favorite_gifs: None,
            favorites_total_pages: 0,
            thumbnails: HashMap::new(),
            pending_thumbs: HashSet::new(),
            detail: None,
            detail_media: None,
            share_open: false,
            tag_input: String::new(),
            token_input: String::new(),
        };

        if let Route::Search { query, .. } = &app.route {
            app.search_input = query.clone();
        }

        let task = if app.api.is_some() {
            Task::batch([app.refresh_favorites(), app.load_route()])
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::GoToPage(page) => {
                let route = self.route.with_page(page);
                self.navigate(route)
            }
            Message::SetTagFilter(tag) => self.navigate(Route::Favorites { page: 0, tag }),
            Message::SearchInputChanged(input) => {
                self.search_input = input;
                Task::none()
            }
            Message::SearchSubmitted => {
                let term = self.search_input.trim().to_string();
                if term.is_empty() {
                    self.navigate(Route::Trending)
                } else {
                    self.navigate(Route::Search {
                        query: term,
                        page: 0,
                    })
                }
            }
            Message::TrendingTick => {
                let Some(api) = self.api.clone() else {
                    return Task::none();
                };
                Task::perform(
                    async move { api.trending(PAGE_LIMIT).await },
                    Message::TrendingLoaded,
                )
            }
            Message::TrendingLoaded(result) => {
                // late result for a view no longer shown
                if !matches!(self.route, Route::Trending) {
                    return Task::none();
                }

                match result {
                    Ok(page) => {
                        let thumbs = self.thumbnail_tasks(&page.data);
                        self.trending = Some(page);
                        thumbs
                    }
                    Err(err) => {
                        tracing::warn!("trending fetch failed: {err}");
                        Task::none()
                    }
                }
            }
            Message::SearchLoaded {
                query,
                page,
                result,
            } => {
                let current = matches!(
                    &self.route,
                    Route::Search { query: q, page: p } if *q == query && *p == page
                );
                if !current {
                    return Task::none();
                }

                match result {
                    Ok(results) => {
                        let thumbs = self.thumbnail_tasks(&results.data);
                        self.search_results = Some(results);
                        thumbs
                    }
                    Err(err) => {
                        tracing::warn!("search {query:?} failed: {err}");
                        Task::none()
                    }
                }
            }
            Message::FavoritesRefreshed(result) => match result {
                Ok(records) => {
                    self.favorites.replace(records);
                    if matches!(self.route, Route::Favorites { .. }) {
                        self.hydrate_favorites()
                    } else {
                        Task::none()
                    }
                }
                Err(err) => {
                    // the cache stays stale until a later refresh succeeds
                    tracing::warn!("favorites refresh failed: {err}");
                    Task::none()
                }
            },
            Message::FavoritePageLoaded(result) => match result {
                Ok(page) => {
                    if !matches!(self.route, Route::Favorites { .. }) {
                        return Task::none();
                    }
                    let thumbs = self.thumbnail_tasks(&page.data);
                    self.favorite_gifs = Some(page.data);
                    thumbs
                }
                Err(err) => {
                    tracing::warn!("favorites hydration failed: {err}");
                    Task::none()
                }
            },
            Message::ThumbnailFetched { id, result } => {
                self.pending_thumbs.remove(&id);
                match result {
                    Ok(handle) => {
                        self.thumbnails.insert(id, handle);
                    }
                    Err(err) => tracing::warn!("thumbnail for {id} failed: {err}"),
                }
                Task::none()
            }
            Message::ToggleFavorite(id) => self.toggle_favorite(id),
            Message::MutationDone { id, result } => {
                self.busy.remove(&id);
                if let Err(err) = result {
                    tracing::warn!("favorites mutation for {id} failed: {err}");
                }
                // trust nothing until the collection is refetched
                self.favorites.mark_stale();
                self.refresh_favorites()
            }
            Message::OpenDetail(gif) => {
                self.share_open = false;
                self.tag_input.clear();
                self.detail_media = None;

                let task = match self.api.clone() {
                    Some(api) => {
                        let url = gif.images.original.url.clone();
                        Task::perform(
                            async move {
                                let bytes = api.fetch_media(&url).await?;
                                media::display_handle(&bytes)
                            },
                            Message::DetailMediaLoaded,
                        )
                    }
                    None => Task::none(),
                };

                self.detail = Some(gif);
                task
            }
            Message::DetailMediaLoaded(result) => {
                if self.detail.is_none() {
                    return Task::none();
                }
                match result {
                    Ok(handle) => self.detail_media = Some(handle),
                    Err(err) => tracing::warn!("original rendition failed: {err}"),
                }
                Task::none()
            }
            Message::CloseDetail => {
                self.detail = None;
                self.detail_media = None;
                self.share_open = false;
                Task::none()
            }
            Message::TagInputChanged(input) => {
                self.tag_input = input;
                Task::none()
            }
            Message::SubmitTag => {
                let Some(gif) = &self.detail else {
                    return Task::none();
                };
                let tag = self.tag_input.trim().to_string();
                if tag.is_empty() {
                    return Task::none();
                }
                let Some(api) = self.api.clone() else {
                    return Task::none();
                };

                self.tag_input.clear();
                let id = gif.id.clone();
                let request_id = id.clone();
                Task::perform(
                    async move { api.add_tag(&request_id, &tag).await },
                    move |result| Message::MutationDone {
                        id: id.clone(),
                        result,
                    },
                )
            }
            Message::RemoveTag { id, tag } => {
                let Some(api) = self.api.clone() else {
                    return Task::none();
                };
                let request_id = id.clone();
                Task::perform(
                    async move { api.remove_tag(&request_id, &tag).await },
                    move |result| Message::MutationDone {
                        id: id.clone(),
                        result,
                    },
                )
            }
            Message::OpenShare => {
                self.share_open = true;
                Task::none()
            }
            Message::CloseShare => {
                self.share_open = false;
                Task::none()
            }
            Message::CopyShareLink(url) => {
                self.share_open = false;
                iced::clipboard::write(url)
            }
            Message::TokenInputChanged(input) => {
                self.token_input = input;
                Task::none()
            }
            Message::SubmitToken => {
                let token = self.token_input.trim().to_string();
                if token.is_empty() {
                    return Task::none();
                }
                self.token_input.clear();

                if let Err(err) = self.session.log_in(token.clone()) {
                    // the session still works for this run; it just won't
                    // survive a restart
                    tracing::warn!("could not persist session token: {err}");
                }

                self.api = Some(ApiClient::new(self.config.base_url(), token));
                self.favorites = FavoritesCache::new();
                self.route = Route::Trending;
                Task::batch([self.refresh_favorites(), self.load_route()])
            }
            Message::LogOut => {
                if let Err(err) = self.session.log_out() {
                    tracing::warn!("could not remove session token: {err}");
                }
                self.api = None;
                self.favorites = FavoritesCache::new();
                self.busy.clear();
                self.trending = None;
                self.search_results = None;
                self.favorite_gifs = None;
                self.favorites_total_pages = 0;
                self.thumbnails.clear();
                self.pending_thumbs.clear();
                self.detail = None;
                self.detail_media = None;
                self.share_open = false;
                self.route = Route::Trending;
                Task::none()
            }
        }
    }

    /// Switch screens and kick off whatever the new screen needs loaded.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        self.detail = None;
        self.detail_media = None;
        self.share_open = false;
        self.tag_input.clear();
        self.route = route;
        tracing::debug!("navigated to {}", self.route);
        self.load_route()
    }

    fn load_route(&mut self) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            return Task::none();
        };

        match self.route.clone() {
            // keep the previous feed on screen while the refresh runs
            Route::Trending => Task::perform(
                async move { api.trending(PAGE_LIMIT).await },
                Message::TrendingLoaded,
            ),
            Route::Search { query, page } => {
                self.search_results = None;
                let request = query.clone();
                Task::perform(
                    async move {
                        api.search(&request, pagination::offset(page, PAGE_LIMIT), PAGE_LIMIT)
                            .await
                    },
                    move |result| Message::SearchLoaded {
                        query: query.clone(),
                        page,
                        result,
                    },
                )
            }
            Route::Favorites { .. } => {
                if self.favorites.is_stale() {
                    self.favorite_gifs = None;
                    self.refresh_favorites()
                } else {
                    self.hydrate_favorites()
                }
            }
        }
    }

    /// Fetch the full favorites collection; the result replaces the cache.
    fn refresh_favorites(&self) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            return Task::none();
        };
        Task::perform(
            async move { api.list_favorites().await },
            Message::FavoritesRefreshed,
        )
    }

    /// Turn the cached records into the favorites view's current page,
    /// hydrating the visible ids into displayable media.
    fn hydrate_favorites(&mut self) -> Task<Message> {
        let (page, tag) = match &self.route {
            Route::Favorites { page, tag } => (*page, tag.clone()),
            _ => return Task::none(),
        };

        match ui::favorites::plan_page(&self.favorites, tag.as_deref(), page, PAGE_LIMIT) {
            ui::favorites::PagePlan::StepBack { page } => {
                self.navigate(Route::Favorites { page, tag })
            }
            ui::favorites::PagePlan::DropFilter => {
                self.navigate(Route::Favorites { page: 0, tag: None })
            }
            ui::favorites::PagePlan::Empty => {
                self.favorite_gifs = Some(Vec::new());
                self.favorites_total_pages = 0;
                Task::none()
            }
            ui::favorites::PagePlan::Show { ids, total_pages } => {
                self.favorites_total_pages = total_pages;
                self.favorite_gifs = None;
                let Some(api) = self.api.clone() else {
                    return Task::none();
                };
                Task::perform(
                    async move { api.gifs_by_ids(&ids).await },
                    Message::FavoritePageLoaded,
                )
            }
        }
    }

    fn toggle_favorite(&mut self, id: String) -> Task<Message> {
        // debounce rapid double toggles on the same id
        if self.busy.contains(&id) {
            return Task::none();
        }
        let Some(api) = self.api.clone() else {
            return Task::none();
        };

        self.busy.insert(id.clone());
        let unfavorite = self.favorites.is_favorite(&id);
        let request_id = id.clone();

        Task::perform(
            async move {
                if unfavorite {
                    api.remove_favorite(&request_id).await
                } else {
                    api.add_favorite(&request_id).await
                }
            },
            move |result| Message::MutationDone {
                id: id.clone(),
                result,
            },
        )
    }

    /// Fetch-and-decode tasks for any thumbnails this batch is missing.
    fn thumbnail_tasks(&mut self, gifs: &[GifImage]) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        for gif in gifs {
            if self.thumbnails.contains_key(&gif.id) || self.pending_thumbs.contains(&gif.id) {
                continue;
            }
            self.pending_thumbs.insert(gif.id.clone());

            let api = api.clone();
            let id = gif.id.clone();
            let url = gif.images.fixed_width.url.clone();
            tasks.push(Task::perform(
                async move {
                    let bytes = api.fetch_media(&url).await?;
                    media::display_handle(&bytes)
                },
                move |result| Message::ThumbnailFetched {
                    id: id.clone(),
                    result,
                },
            ));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if self.api.is_none() {
            return ui::sign_in(&self.token_input);
        }

        let content = match &self.route {
            Route::Trending => {
                ui::trending::view(self.trending.as_ref(), &self.thumbnails, &self.favorites)
            }
            Route::Search { query, page } => ui::search::view(
                query,
                *page,
                self.search_results.as_ref(),
                &self.thumbnails,
                &self.favorites,
            ),
            Route::Favorites { page, tag } => ui::favorites::view(
                &self.favorites,
                tag.as_deref(),
                *page,
                self.favorite_gifs.as_deref(),
                self.favorites_total_pages,
                &self.thumbnails,
            ),
        };

        let base: Element<Message> = column![
            ui::navbar(&self.search_input, &self.route),
            container(content)
                .padding(20)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .into();

        match &self.detail {
            Some(gif) => ui::modal(
                base,
                ui::detail::view(
                    gif,
                    &self.favorites,
                    &self.tag_input,
                    self.share_open,
                    self.detail_media.as_ref(),
                ),
                Message::CloseDetail,
            ),
            None => base,
        }
    }

    /// The trending poll runs only while the trending view is visible, so
    /// navigating away stops it deterministically.
    fn subscription(&self) -> Subscription<Message> {
        if self.api.is_some() && matches!(self.route, Route::Trending) {
            iced::time::every(Duration::from_secs(TRENDING_REFRESH_SECS))
                .map(|_| Message::TrendingTick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application("GIF Gallery", GifGallery::update, GifGallery::view)
        .subscription(GifGallery::subscription)
        .theme(GifGallery::theme)
        .centered()
        .run_with(GifGallery::new)
}
