//! Login and signup requests.

use crate::app::api::ApiCtx;
use crate::app::session::sign_in;
use crate::core::store::{app_dispatch, push_toast};
use crate::features::auth::logic::{login_failure_message, signup_failure_message};
use crate::features::auth::state::SIGNUP_SUCCEEDED;
use crate::models::ToastKind;
use bunbuster_api_models::{LoginRequest, SignupRequest};
use gloo::console;

/// Exchange credentials for a session and install it.
///
/// Returns the message to show inline when the login fails.
pub(crate) async fn login(ctx: &ApiCtx, request: LoginRequest) -> Result<(), String> {
    match ctx.client.login(&request).await {
        Ok(session) => {
            let username = session.user.username.clone();
            sign_in(ctx, session);
            app_dispatch().reduce_mut(|store| {
                push_toast(store, ToastKind::Success, format!("Welcome back, {username}!"));
            });
            Ok(())
        }
        Err(err) => {
            console::error!("login failed", err.to_string());
            Err(login_failure_message(&err))
        }
    }
}

/// Register a new account.
///
/// Returns the message to show inline when the signup fails.
pub(crate) async fn signup(ctx: &ApiCtx, request: SignupRequest) -> Result<(), String> {
    match ctx.client.signup(&request).await {
        Ok(()) => {
            app_dispatch().reduce_mut(|store| {
                push_toast(store, ToastKind::Success, SIGNUP_SUCCEEDED);
            });
            Ok(())
        }
        Err(err) => {
            console::error!("signup failed", err.to_string());
            Err(signup_failure_message(&err))
        }
    }
}
