//! Genre and director list/detail pages.

use crate::app::Route;
use crate::components::atoms::EmptyState;
use crate::core::logic::{DetailState, LOADING_TEXT, format_display_date};
use crate::core::routing::{director_route, genre_route};
use crate::core::store::AppStore;
use crate::features::catalog::state::{select_director, select_genre};
use crate::models::{Director, Genre};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_selector_with_deps};

#[function_component(GenreListPage)]
pub(crate) fn genre_list_page() -> Html {
    let genres = use_selector(|store: &AppStore| store.catalog.genres.clone().unwrap_or_default());
    if genres.is_empty() {
        return html! { <EmptyState /> };
    }
    html! {
        <section class="catalog-list">
            <h2>{"Genres"}</h2>
            <ul>
                {for genres.iter().map(|genre| html! {
                    <li key={genre.id.clone()}>
                        <Link<Route> to={genre_route(&genre.name)}>{genre.name.clone()}</Link<Route>>
                    </li>
                })}
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NameProps {
    /// Name as it appears in the path.
    pub name: String,
}

#[function_component(GenreDetailPage)]
pub(crate) fn genre_detail_page(props: &NameProps) -> Html {
    let detail = use_selector_with_deps(
        |store: &AppStore, name: &String| select_genre(&store.catalog, name),
        props.name.clone(),
    );
    match (*detail).clone() {
        DetailState::Loading => html! { <p class="muted">{LOADING_TEXT}</p> },
        DetailState::NotFound => html! {
            <EmptyState title="Genre not found" back_to={Route::Genres} back_label="All genres" />
        },
        DetailState::Found(genre) => render_genre(&genre),
    }
}

fn render_genre(genre: &Genre) -> Html {
    html! {
        <article class="catalog-detail">
            <h2>{genre.name.clone()}</h2>
            <p>{genre.description.clone()}</p>
            <Link<Route> to={Route::Genres} classes={classes!("ghost")}>{"All genres"}</Link<Route>>
        </article>
    }
}

#[function_component(DirectorListPage)]
pub(crate) fn director_list_page() -> Html {
    let directors =
        use_selector(|store: &AppStore| store.catalog.directors.clone().unwrap_or_default());
    if directors.is_empty() {
        return html! { <EmptyState /> };
    }
    html! {
        <section class="catalog-list">
            <h2>{"Directors"}</h2>
            <ul>
                {for directors.iter().map(|director| html! {
                    <li key={director.id.clone()}>
                        <Link<Route> to={director_route(&director.name)}>{director.name.clone()}</Link<Route>>
                    </li>
                })}
            </ul>
        </section>
    }
}

#[function_component(DirectorDetailPage)]
pub(crate) fn director_detail_page(props: &NameProps) -> Html {
    let detail = use_selector_with_deps(
        |store: &AppStore, name: &String| select_director(&store.catalog, name),
        props.name.clone(),
    );
    match (*detail).clone() {
        DetailState::Loading => html! { <p class="muted">{LOADING_TEXT}</p> },
        DetailState::NotFound => html! {
            <EmptyState title="Director not found" back_to={Route::Directors} back_label="All directors" />
        },
        DetailState::Found(director) => render_director(&director),
    }
}

fn render_director(director: &Director) -> Html {
    html! {
        <article class="catalog-detail">
            <h2>{director.name.clone()}</h2>
            <p>{director.bio.clone()}</p>
            <dl>
                <dt>{"Born"}</dt>
                <dd>{format_display_date(director.birth_date)}</dd>
                <dt>{"Died"}</dt>
                <dd>{format_display_date(director.death_date)}</dd>
            </dl>
            <Link<Route> to={Route::Directors} classes={classes!("ghost")}>{"All directors"}</Link<Route>>
        </article>
    }
}
