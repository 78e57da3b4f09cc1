//! Route rendering behind the session guard.

use crate::components::atoms::EmptyState;
use crate::core::routing::{RouteDecision, guard};
use crate::core::store::{AppStore, is_authenticated};
use crate::features::auth::view::{LoginPage, SignupPage};
use crate::features::catalog::view::{
    DirectorDetailPage, DirectorListPage, GenreDetailPage, GenreListPage,
};
use crate::features::movies::view::{MovieDetailPage, MovieListPage};
use crate::features::profile::view::ProfilePage;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) use crate::core::routing::Route;

/// `Switch` render callback.
pub(crate) fn switch(route: Route) -> Html {
    html! { <GuardedRoute route={route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedRouteProps {
    route: Route,
}

#[function_component(GuardedRoute)]
fn guarded_route(props: &GuardedRouteProps) -> Html {
    let authenticated = use_selector(|store: &AppStore| is_authenticated(store));
    match guard(&props.route, *authenticated) {
        RouteDecision::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        RouteDecision::RedirectToRoot => html! { <Redirect<Route> to={Route::Movies} /> },
        RouteDecision::Render => render_route(props.route.clone()),
    }
}

fn render_route(route: Route) -> Html {
    match route {
        Route::Movies => html! { <MovieListPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::MovieDetail { movie_id } => html! { <MovieDetailPage {movie_id} /> },
        Route::Directors => html! { <DirectorListPage /> },
        Route::DirectorDetail { director_name } => {
            html! { <DirectorDetailPage name={director_name} /> }
        }
        Route::Genres => html! { <GenreListPage /> },
        Route::GenreDetail { genre_name } => html! { <GenreDetailPage name={genre_name} /> },
        Route::Profile { username } => html! { <ProfilePage {username} /> },
        Route::NotFound => html! {
            <EmptyState title="Page not found" back_to={Route::Movies} back_label="Back to movies" />
        },
    }
}
