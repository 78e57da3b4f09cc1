//! Movie summary card used by the list and profile views.

use crate::app::Route;
use crate::core::logic::format_rating;
use crate::features::favorites::view::FavoriteButton;
use crate::models::Movie;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: Movie,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;
    let year = movie.year.map(|year| year.to_string()).unwrap_or_default();
    html! {
        <article class={classes!("movie-card", movie.featured.then_some("featured"))}>
            {movie.image_path.clone().map(|src| html! {
                <img class="poster" {src} alt={movie.title.clone()} loading="lazy" />
            }).unwrap_or_default()}
            <div class="movie-card-body">
                <Link<Route> to={Route::MovieDetail { movie_id: movie.id.clone() }} classes={classes!("title")}>
                    {movie.title.clone()}
                </Link<Route>>
                <p class="muted">{year}</p>
                <p>{movie.genre_names()}</p>
                <p class="muted">{movie.director_names()}</p>
                <span class="pill subtle">{format_rating(movie.rating)}</span>
            </div>
            <FavoriteButton movie_id={movie.id.clone()} />
        </article>
    }
}
