//! Favorite toggle requests.
//!
//! # Design
//! - The store decides the intent and holds the rollback snapshot.
//! - Only the server's acknowledgement changes membership.

use crate::app::api::ApiCtx;
use crate::app::preferences::save_user;
use crate::app::session::report_failure;
use crate::core::store::{
    app_dispatch, begin_favorite_toggle, commit_favorite_toggle, current_user, is_current,
    rollback_favorite_toggle,
};
use crate::features::favorites::state::{FavoriteIntent, ToggleRejected};
use crate::features::profile::api::load_favorite_movies;
use gloo::console;

/// Add or remove `movie_id` from the signed-in user's favorites.
pub(crate) fn toggle_favorite(ctx: &ApiCtx, movie_id: String) {
    let mut started = None;
    let mut rejected = None;
    app_dispatch().reduce_mut(|store| match begin_favorite_toggle(store, &movie_id) {
        Ok(intent) => {
            let username = current_user(store).map(|user| user.username.clone());
            started = username.map(|username| (intent, username, store.session.epoch));
        }
        Err(reason) => rejected = Some(reason),
    });
    if let Some(ToggleRejected::AlreadyPending) = rejected {
        console::warn!("favorite toggle ignored", movie_id, "another toggle is pending");
        return;
    }
    let Some((intent, username, epoch)) = started else {
        return;
    };

    let ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        let result = match intent {
            FavoriteIntent::Add => ctx.client.add_favorite(&username, &movie_id).await,
            FavoriteIntent::Remove => ctx.client.remove_favorite(&username, &movie_id).await,
        };
        match result {
            Ok(returned) => {
                let mut committed = None;
                app_dispatch().reduce_mut(|store| {
                    if is_current(store, epoch) && commit_favorite_toggle(store, returned) {
                        committed = current_user(store).cloned();
                    }
                });
                if let Some(user) = committed {
                    save_user(&user);
                    load_favorite_movies(&ctx);
                }
            }
            Err(err) => {
                let mut rolled_back = false;
                app_dispatch().reduce_mut(|store| {
                    rolled_back = is_current(store, epoch)
                        && rollback_favorite_toggle(store, err.to_string());
                });
                if rolled_back {
                    console::warn!("favorite toggle rolled back", movie_id, err.to_string());
                    report_failure(&ctx, "Updating favorites", &err);
                }
            }
        }
    });
}
