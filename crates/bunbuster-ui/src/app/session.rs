//! Session side effects shared by every feature.
//!
//! # Design
//! - Store, durable storage and client token change together or not at all.
//! - Failures are logged here once; callers only decide what else to show.

use crate::app::api::ApiCtx;
use crate::app::preferences::{forget_session, save_session, save_user};
use crate::core::auth::Session;
use crate::core::http::ApiError;
use crate::core::store::{
    FailureOutcome, apply_api_failure, app_dispatch, begin_session, end_session, replace_user,
};
use crate::models::UserProfile;
use gloo::console;

/// Persist and install a fresh session.
pub(crate) fn sign_in(ctx: &ApiCtx, session: Session) {
    save_session(&session);
    ctx.client.set_token(Some(session.token.clone()));
    app_dispatch().reduce_mut(|store| begin_session(store, session));
}

/// Tear the session down everywhere.
pub(crate) fn sign_out(ctx: &ApiCtx) {
    forget_session();
    ctx.client.set_token(None);
    app_dispatch().reduce_mut(end_session);
}

/// Adopt an updated profile for the signed-in user.
pub(crate) fn adopt_user(user: UserProfile) {
    save_user(&user);
    app_dispatch().reduce_mut(|store| {
        replace_user(store, user);
    });
}

/// Log a failed call and route it through the store.
pub(crate) fn report_failure(ctx: &ApiCtx, context: &str, err: &ApiError) -> FailureOutcome {
    if !err.is_silent() {
        console::error!("api request failed", context, err.to_string());
    }
    let mut outcome = FailureOutcome::Silent;
    app_dispatch().reduce_mut(|store| {
        outcome = apply_api_failure(store, context, err);
    });
    if outcome == FailureOutcome::SessionEnded {
        forget_session();
        ctx.client.set_token(None);
    }
    outcome
}
