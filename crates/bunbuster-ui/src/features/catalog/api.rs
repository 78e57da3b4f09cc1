//! Genre and director loading.

use crate::app::api::ApiCtx;
use crate::app::session::report_failure;
use crate::core::store::{app_dispatch, is_current};
use crate::features::catalog::state::{
    set_directors, set_genres, settle_directors, settle_genres,
};

/// Fetch both catalogs for the active session.
pub(crate) fn load_catalog(ctx: &ApiCtx) {
    let epoch = app_dispatch().get().session.epoch;

    let genres_ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        let result = genres_ctx.client.fetch_genres().await;
        let mut current = false;
        let failure = result.as_ref().err().cloned();
        app_dispatch().reduce_mut(|store| {
            current = is_current(store, epoch);
            if !current {
                return;
            }
            match result {
                Ok(genres) => set_genres(&mut store.catalog, genres),
                Err(_) => settle_genres(&mut store.catalog),
            }
        });
        if let (true, Some(err)) = (current, failure) {
            report_failure(&genres_ctx, "Loading genres", &err);
        }
    });

    let directors_ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        let result = directors_ctx.client.fetch_directors().await;
        let mut current = false;
        let failure = result.as_ref().err().cloned();
        app_dispatch().reduce_mut(|store| {
            current = is_current(store, epoch);
            if !current {
                return;
            }
            match result {
                Ok(directors) => set_directors(&mut store.catalog, directors),
                Err(_) => settle_directors(&mut store.catalog),
            }
        });
        if let (true, Some(err)) = (current, failure) {
            report_failure(&directors_ctx, "Loading directors", &err);
        }
    });
}
