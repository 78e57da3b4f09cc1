//! Application root: contexts, router, shell and boot.
//!
//! # Design
//! - Restore the persisted session before the first render so guards see it.
//! - Create the API client once and share it through [`ApiCtx`].
//! - Reload the genre and director catalogs whenever a new session starts.

use crate::app::api::ApiCtx;
use crate::app::preferences::load_session;
use crate::app::session::sign_out;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, app_dispatch, begin_session, current_user};
use crate::features::catalog::api::load_catalog;
use chrono::{Local, NaiveDate};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;
pub(crate) mod session;

pub(crate) use routes::Route;

#[function_component(BunbusterApp)]
pub fn bunbuster_app() -> Html {
    let dispatch = app_dispatch();
    let api_ctx = use_memo(move |_| ApiCtx::boot(&dispatch.get()), ());

    let username = use_selector(|store: &AppStore| {
        current_user(store).map(|user| user.username.clone())
    });
    let epoch = use_selector(|store: &AppStore| store.session.epoch);

    {
        let api_ctx = (*api_ctx).clone();
        let signed_in = username.is_some();
        use_effect_with_deps(
            move |_| {
                if signed_in {
                    load_catalog(&api_ctx);
                }
                || ()
            },
            (*epoch, signed_in),
        );
    }

    let on_logout = {
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |()| sign_out(&api_ctx))
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <AppShell username={(*username).clone()} {on_logout}>
                    <Switch<Route> render={routes::switch} />
                </AppShell>
                <ToastHost />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Today's date on the browser clock.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(session) = load_session() {
        app_dispatch().reduce_mut(|store| begin_session(store, session));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BunbusterApp>::with_root(root).render();
    } else {
        yew::Renderer::<BunbusterApp>::new().render();
    }
}
