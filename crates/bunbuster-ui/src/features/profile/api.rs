//! Profile refresh, save, deletion and hydrated favorites.
//!
//! # Design
//! - Every request captures the session epoch and is dropped once it changes.
//! - Auth failures go through the shared failure path; other save errors stay inline.

use crate::app::api::ApiCtx;
use crate::app::session::{adopt_user, report_failure, sign_out};
use crate::app::today;
use crate::core::store::{AppStore, app_dispatch, current_user, is_current, push_toast};
use crate::features::profile::state::{
    MESSAGE_TIMEOUT_MS, ProfileMessage, begin_save, clear_message, delete_failure_message,
    finish_save, set_favorite_movies,
};
use crate::models::ToastKind;
use gloo::console;
use gloo::timers::callback::Timeout;

/// Toast shown after the account was deleted.
const ACCOUNT_DELETED: &str = "Your account has been deleted.";

fn session_user(store: &AppStore) -> Option<(String, u64)> {
    current_user(store).map(|user| (user.username.clone(), store.session.epoch))
}

/// Re-read the signed-in user's profile from the server.
pub(crate) fn refresh_profile(ctx: &ApiCtx) {
    let Some((username, epoch)) = session_user(&app_dispatch().get()) else {
        return;
    };
    let ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        match ctx.client.fetch_profile(&username).await {
            Ok(user) => {
                if is_current(&app_dispatch().get(), epoch) {
                    adopt_user(user);
                }
            }
            Err(err) => {
                if is_current(&app_dispatch().get(), epoch) {
                    report_failure(&ctx, "Loading profile", &err);
                }
            }
        }
    });
}

/// Fetch the hydrated favorite movies of the signed-in user.
pub(crate) fn load_favorite_movies(ctx: &ApiCtx) {
    let Some((username, epoch)) = session_user(&app_dispatch().get()) else {
        return;
    };
    let ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        match ctx.client.fetch_favorite_movies(&username).await {
            Ok(movies) => {
                app_dispatch().reduce_mut(|store| {
                    if is_current(store, epoch) {
                        set_favorite_movies(&mut store.profile, movies);
                    }
                });
            }
            Err(err) => {
                if is_current(&app_dispatch().get(), epoch) {
                    report_failure(&ctx, "Loading favorite movies", &err);
                }
            }
        }
    });
}

/// Validate the edit form and send it.
pub(crate) fn save_profile(ctx: &ApiCtx) {
    let mut started = None;
    app_dispatch().reduce_mut(|store| {
        let Some((username, epoch)) = session_user(store) else {
            return;
        };
        started =
            begin_save(&mut store.profile, today()).map(|request| (request, username, epoch));
    });
    let Some((request, username, epoch)) = started else {
        return;
    };
    let ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        let result = ctx.client.update_profile(&username, &request).await;
        if !is_current(&app_dispatch().get(), epoch) {
            return;
        }
        if let Err(err) = &result
            && err.is_auth_failure()
        {
            report_failure(&ctx, "Updating profile", err);
            return;
        }
        app_dispatch().reduce_mut(|store| finish_save(&mut store.profile, result.as_ref()));
        match result {
            Ok(user) => adopt_user(user),
            Err(err) => console::error!("profile update failed", err.to_string()),
        }
        schedule_message_clear(epoch);
    });
}

/// Delete the signed-in account and end the session.
pub(crate) fn delete_account(ctx: &ApiCtx) {
    let Some((username, epoch)) = session_user(&app_dispatch().get()) else {
        return;
    };
    app_dispatch().reduce_mut(|store| store.profile.confirm_delete = false);
    let ctx = ctx.clone();
    yew::platform::spawn_local(async move {
        let result = ctx.client.delete_account(&username).await;
        if !is_current(&app_dispatch().get(), epoch) {
            return;
        }
        match result {
            Ok(()) => {
                sign_out(&ctx);
                app_dispatch().reduce_mut(|store| {
                    push_toast(store, ToastKind::Info, ACCOUNT_DELETED);
                });
            }
            Err(err) if err.is_auth_failure() => {
                report_failure(&ctx, "Deleting account", &err);
            }
            Err(err) => {
                console::error!("account deletion failed", err.to_string());
                app_dispatch().reduce_mut(|store| {
                    store.profile.message =
                        Some(ProfileMessage::Error(delete_failure_message(&err)));
                });
                schedule_message_clear(epoch);
            }
        }
    });
}

fn schedule_message_clear(epoch: u64) {
    Timeout::new(MESSAGE_TIMEOUT_MS, move || {
        app_dispatch().reduce_mut(|store| {
            if is_current(store, epoch) {
                clear_message(&mut store.profile);
            }
        });
    })
    .forget();
}
