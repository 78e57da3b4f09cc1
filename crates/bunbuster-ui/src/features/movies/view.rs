//! Movie list and movie detail pages.
//!
//! # Design
//! - Render from the movies slice; loads go through `features::movies::api`.
//! - The filter form edits a local draft and commits it on submit.
//! - The detail page resolves against the fetched page and the hydrated favorites,
//!   loading whichever is missing.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, missing_api_context};
use crate::components::movie_card::MovieCard;
use crate::core::logic::{DetailState, LOADING_TEXT, format_duration, format_rating};
use crate::core::routing::{director_route, genre_route};
use crate::core::store::{AppStore, app_dispatch};
use crate::features::favorites::view::FavoriteButton;
use crate::features::movies::api::load_movies;
use crate::features::profile::api::load_favorite_movies;
use crate::features::movies::state::{
    MovieFilters, MoviesState, next_page, previous_page, select_movie, set_filters,
};
use crate::models::{Movie, Reference};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_selector_with_deps};

#[function_component(MovieListPage)]
pub(crate) fn movie_list_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = use_selector(|store: &AppStore| store.movies.clone());
    let draft = use_state(|| state.filters.clone());
    {
        let api_ctx = api_ctx.clone();
        let needs_load = !state.loaded && !state.loading;
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx.filter(|_| needs_load) {
                    load_movies(&api_ctx);
                }
                || ()
            },
            (),
        );
    }
    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_draft = |apply: fn(&mut MovieFilters, String)| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };

    let commit_filters = {
        let api_ctx = api_ctx.clone();
        Callback::from(move |filters: MovieFilters| {
            app_dispatch().reduce_mut(|store| set_filters(&mut store.movies, filters));
            load_movies(&api_ctx);
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let commit_filters = commit_filters.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            commit_filters.emit((*draft).clone());
        })
    };
    let on_clear = {
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(MovieFilters::default());
            commit_filters.emit(MovieFilters::default());
        })
    };

    let turn_page = |step: fn(&mut MoviesState) -> bool| {
        let api_ctx = api_ctx.clone();
        Callback::from(move |_| {
            let mut moved = false;
            app_dispatch().reduce_mut(|store| moved = step(&mut store.movies));
            if moved {
                load_movies(&api_ctx);
            }
        })
    };

    let has_previous = state.pagination.is_some_and(|cursor| cursor.has_previous());
    let has_next = state.pagination.is_some_and(|cursor| cursor.has_next());

    html! {
        <section class="movie-list">
            <form class="filters" onsubmit={on_submit}>
                <input
                    type="search"
                    placeholder="Title"
                    aria-label="Filter by title"
                    value={draft.title.clone()}
                    oninput={on_draft(|filters, value| filters.title = value)}
                />
                <input
                    type="search"
                    placeholder="Genre"
                    aria-label="Filter by genre"
                    value={draft.genre.clone()}
                    oninput={on_draft(|filters, value| filters.genre = value)}
                />
                <input
                    type="search"
                    placeholder="Director"
                    aria-label="Filter by director"
                    value={draft.director.clone()}
                    oninput={on_draft(|filters, value| filters.director = value)}
                />
                <button type="submit" class="primary" disabled={state.loading}>{"Search"}</button>
                <button type="button" class="ghost" disabled={state.filters.is_empty() && draft.is_empty()} onclick={on_clear}>{"Clear"}</button>
            </form>
            {render_movies(&state)}
            {state.pagination.map(|cursor| html! {
                <nav class="pagination" aria-label="Pagination">
                    <button class="ghost" disabled={!has_previous || state.loading} onclick={turn_page(previous_page)}>{"Previous Page"}</button>
                    <span class="muted">{format!("Page {} of {}", cursor.page, cursor.total_pages)}</span>
                    <button class="ghost" disabled={!has_next || state.loading} onclick={turn_page(next_page)}>{"Next Page"}</button>
                </nav>
            }).unwrap_or_default()}
        </section>
    }
}

fn render_movies(state: &MoviesState) -> Html {
    if let Some(notice) = &state.notice {
        let hint = (!state.filters.is_empty()).then_some("Try other filters or clear them.");
        return html! {
            <EmptyState title={notice.clone()} description={hint.map(AttrValue::Static)} />
        };
    }
    if state.movies.is_empty() {
        return html! { <EmptyState /> };
    }
    html! {
        <div class="movie-grid">
            {for state.movies.iter().map(|movie| html! {
                <MovieCard key={movie.id.clone()} movie={movie.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MovieDetailProps {
    pub movie_id: String,
}

#[function_component(MovieDetailPage)]
pub(crate) fn movie_detail_page(props: &MovieDetailProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let movie_id = props.movie_id.clone();
    let detail = use_selector_with_deps(
        |store: &AppStore, movie_id: &String| {
            select_movie(&store.movies, store.profile.favorite_movies.as_deref(), movie_id)
        },
        movie_id,
    );
    let missing = use_selector(|store: &AppStore| {
        (
            !store.movies.loaded && !store.movies.loading,
            store.profile.favorite_movies.is_none(),
        )
    });
    {
        let (page_idle, favorites_missing) = *missing;
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    if page_idle {
                        load_movies(&api_ctx);
                    }
                    if favorites_missing {
                        load_favorite_movies(&api_ctx);
                    }
                }
                || ()
            },
            (),
        );
    }

    match (*detail).clone() {
        DetailState::Loading => html! { <p class="muted">{LOADING_TEXT}</p> },
        DetailState::NotFound => html! {
            <EmptyState title="Movie not found" back_to={Route::Movies} back_label="Back to movies" />
        },
        DetailState::Found(movie) => render_movie(&movie),
    }
}

fn render_movie(movie: &Movie) -> Html {
    html! {
        <article class="movie-detail">
            {movie.image_path.clone().map(|src| html! {
                <img class="poster" {src} alt={movie.title.clone()} />
            }).unwrap_or_default()}
            <div class="movie-detail-body">
                <h2>{movie.title.clone()}</h2>
                <p class="muted">{movie.year.map(|year| year.to_string()).unwrap_or_default()}</p>
                <p>{movie.description.clone()}</p>
                <dl>
                    <dt>{"Genre"}</dt>
                    <dd>{reference_links(&movie.genre, genre_route)}</dd>
                    <dt>{"Director"}</dt>
                    <dd>{reference_links(&movie.director, director_route)}</dd>
                    <dt>{"Rating"}</dt>
                    <dd>{format_rating(movie.rating)}</dd>
                    <dt>{"Duration"}</dt>
                    <dd>{format_duration(movie.duration)}</dd>
                    <dt>{"Language"}</dt>
                    <dd>{movie.language.clone()}</dd>
                </dl>
                <FavoriteButton movie_id={movie.id.clone()} />
                <Link<Route> to={Route::Movies} classes={classes!("ghost")}>{"Back to movies"}</Link<Route>>
            </div>
        </article>
    }
}

fn reference_links(references: &[Reference], route: fn(&str) -> Route) -> Html {
    html! {
        <>
            {for references.iter().map(|reference| html! {
                <Link<Route> to={route(&reference.name)} classes={classes!("pill")}>{reference.name.clone()}</Link<Route>>
            })}
        </>
    }
}
