//! Login and signup pages.
//!
//! # Design
//! - Form drafts live in component state; only a completed login touches the store.
//! - Inputs are disabled while a request is in flight.

use crate::app::api::ApiCtx;
use crate::app::{Route, today};
use crate::components::atoms::missing_api_context;
use crate::components::form_field::FormField;
use crate::core::validation::Field;
use crate::features::auth::api::{login, signup};
use crate::features::auth::state::{LoginForm, SignupForm};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = use_state(LoginForm::default);
    let failure = use_state(|| None as Option<String>);
    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.update(field, value, today());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let failure = failure.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            let request = next.submit(today());
            form.set(next.clone());
            let Some(request) = request else {
                return;
            };
            failure.set(None);
            let form = form.clone();
            let failure = failure.clone();
            let api_ctx = api_ctx.clone();
            yew::platform::spawn_local(async move {
                let result = login(&api_ctx, request).await;
                next.finish();
                form.set(next);
                if let Err(message) = result {
                    failure.set(Some(message));
                }
            });
        })
    };

    html! {
        <section class="auth-page">
            <h2>{"Login"}</h2>
            <form onsubmit={on_submit} novalidate=true>
                <FormField
                    label="Username"
                    name="username"
                    value={form.username.clone()}
                    error={form.errors.get(Field::Username)}
                    disabled={form.submitting}
                    on_input={on_field(Field::Username)}
                />
                <FormField
                    label="Password"
                    name="password"
                    input_type="password"
                    value={form.password.clone()}
                    error={form.errors.get(Field::Password)}
                    disabled={form.submitting}
                    on_input={on_field(Field::Password)}
                />
                {(*failure).clone().map(|message| html! {
                    <p class="error" role="alert">{message}</p>
                }).unwrap_or_default()}
                <button type="submit" class="primary" disabled={form.submitting}>{"Login"}</button>
            </form>
            <p class="muted">
                {"No account yet? "}
                <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
            </p>
        </section>
    }
}

#[function_component(SignupPage)]
pub(crate) fn signup_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let form = use_state(SignupForm::default);
    let failure = use_state(|| None as Option<String>);
    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.update(field, value, today());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let failure = failure.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            let request = next.submit(today());
            form.set(next.clone());
            let Some(request) = request else {
                return;
            };
            failure.set(None);
            let form = form.clone();
            let failure = failure.clone();
            let api_ctx = api_ctx.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                let result = signup(&api_ctx, request).await;
                next.finish();
                form.set(next);
                match result {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(message) => failure.set(Some(message)),
                }
            });
        })
    };

    html! {
        <section class="auth-page">
            <h2>{"Sign up"}</h2>
            <form onsubmit={on_submit} novalidate=true>
                <FormField
                    label="Username"
                    name="username"
                    value={form.username.clone()}
                    error={form.errors.get(Field::Username)}
                    disabled={form.submitting}
                    on_input={on_field(Field::Username)}
                />
                <FormField
                    label="Password"
                    name="password"
                    input_type="password"
                    value={form.password.clone()}
                    error={form.errors.get(Field::Password)}
                    disabled={form.submitting}
                    on_input={on_field(Field::Password)}
                />
                <FormField
                    label="Email"
                    name="email"
                    input_type="email"
                    value={form.email.clone()}
                    error={form.errors.get(Field::Email)}
                    disabled={form.submitting}
                    on_input={on_field(Field::Email)}
                />
                <FormField
                    label="Birthday"
                    name="birthday"
                    input_type="date"
                    value={form.birthday.clone()}
                    error={form.errors.get(Field::Birthday)}
                    disabled={form.submitting}
                    on_input={on_field(Field::Birthday)}
                />
                {(*failure).clone().map(|message| html! {
                    <p class="error" role="alert">{message}</p>
                }).unwrap_or_default()}
                <button type="submit" class="primary" disabled={form.submitting}>{"Sign up"}</button>
            </form>
            <p class="muted">
                {"Already registered? "}
                <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
            </p>
        </section>
    }
}
