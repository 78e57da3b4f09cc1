//! Movie list loading.
//!
//! # Design
//! - Each load takes a ticket and the session epoch before the request leaves.
//! - A response is applied only while both still match; anything older is dropped.

use crate::app::api::ApiCtx;
use crate::app::session::report_failure;
use crate::core::store::{app_dispatch, is_authenticated, is_current};
use crate::features::movies::state::{apply_outcome, begin_fetch, current_query, fail_fetch};
use gloo::console;

/// Fetch the movie page described by the current filters and page number.
pub(crate) fn load_movies(ctx: &ApiCtx) {
    let limit = ctx.client.config().page_size;
    let mut started = None;
    app_dispatch().reduce_mut(|store| {
        if is_authenticated(store) {
            let ticket = begin_fetch(&mut store.movies);
            started = Some((
                ticket,
                store.session.epoch,
                current_query(&store.movies, limit),
            ));
        }
    });
    let Some((ticket, epoch, query)) = started else {
        return;
    };
    let ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        match ctx.client.fetch_movies(&query).await {
            Ok(outcome) => {
                let mut applied = false;
                app_dispatch().reduce_mut(|store| {
                    applied = is_current(store, epoch)
                        && apply_outcome(&mut store.movies, ticket, outcome);
                });
                if !applied {
                    console::log!("dropped stale movie list response", ticket.to_string());
                }
            }
            Err(err) => {
                let mut current = false;
                app_dispatch().reduce_mut(|store| {
                    current = is_current(store, epoch) && fail_fetch(&mut store.movies, ticket);
                });
                if current {
                    report_failure(&ctx, "Loading movies", &err);
                }
            }
        }
    });
}
