//! Favorite toggle button.

use crate::app::api::ApiCtx;
use crate::core::store::{AppStore, current_user};
use crate::features::favorites::api::toggle_favorite;
use crate::features::favorites::state::ToggleState;
use yew::prelude::*;
use yewdux::prelude::use_selector_with_deps;

#[derive(Properties, PartialEq)]
pub(crate) struct FavoriteButtonProps {
    pub movie_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ButtonState {
    favorite: bool,
    pending: bool,
    busy: bool,
    error: Option<String>,
}

#[function_component(FavoriteButton)]
pub(crate) fn favorite_button(props: &FavoriteButtonProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = use_selector_with_deps(
        |store: &AppStore, movie_id: &String| ButtonState {
            favorite: current_user(store).is_some_and(|user| user.is_favorite(movie_id)),
            pending: store.favorites.is_pending_for(movie_id),
            busy: store.favorites.is_pending(),
            error: match &store.favorites.toggle {
                ToggleState::RolledBack { movie_id: failed, error } if failed == movie_id => {
                    Some(error.clone())
                }
                _ => None,
            },
        },
        props.movie_id.clone(),
    );

    let onclick = {
        let movie_id = props.movie_id.clone();
        Callback::from(move |_| {
            if let Some(api_ctx) = &api_ctx {
                toggle_favorite(api_ctx, movie_id.clone());
            }
        })
    };

    let label = match (state.pending, state.favorite) {
        (true, _) => "Saving...",
        (false, true) => "Remove from favorites",
        (false, false) => "Add to favorites",
    };
    html! {
        <button
            class={classes!("favorite", state.favorite.then_some("active"))}
            aria-pressed={state.favorite.to_string()}
            title={state.error.clone()}
            disabled={state.busy}
            {onclick}
        >
            {if state.favorite { "♥ " } else { "♡ " }}
            {label}
        </button>
    }
}
