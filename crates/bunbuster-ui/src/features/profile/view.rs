//! Profile page: details, edit form, favorites and account deletion.
//!
//! # Design
//! - The saved profile comes from the session; the draft lives in the profile slice.
//! - Only the signed-in user's profile is shown; other usernames redirect to it.

use crate::app::api::ApiCtx;
use crate::app::{Route, today};
use crate::components::atoms::{EmptyState, missing_api_context};
use crate::components::form_field::FormField;
use crate::components::movie_card::MovieCard;
use crate::core::logic::{LOADING_TEXT, format_display_date};
use crate::core::store::{AppStore, app_dispatch, current_user};
use crate::core::validation::Field;
use crate::features::profile::api::{
    delete_account, load_favorite_movies, refresh_profile, save_profile,
};
use crate::features::profile::state::{
    ProfileMessage, ProfileState, cancel_editing, start_editing, toggle_password_fields,
    toggle_show_passwords, update_field,
};
use crate::models::{Movie, UserProfile};
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ProfilePageProps {
    pub username: String,
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &ProfilePageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let user = use_selector(|store: &AppStore| current_user(store).cloned());
    let state = use_selector(|store: &AppStore| store.profile.clone());
    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    refresh_profile(&api_ctx);
                    load_favorite_movies(&api_ctx);
                }
                || ()
            },
            (),
        );
    }
    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };
    let Some(user) = (*user).clone() else {
        return html! { <p class="muted">{LOADING_TEXT}</p> };
    };
    if user.username != props.username {
        return html! { <Redirect<Route> to={Route::Profile { username: user.username }} /> };
    }

    html! {
        <section class="profile">
            <h2>{"Profile"}</h2>
            {render_message(state.message.as_ref())}
            {if state.editing {
                render_form(&state, &user, &api_ctx)
            } else {
                render_details(&state, &user, &api_ctx)
            }}
            <h3>{"Favorite movies"}</h3>
            {render_favorites(state.favorite_movies.as_deref())}
        </section>
    }
}

fn render_message(message: Option<&ProfileMessage>) -> Html {
    match message {
        Some(ProfileMessage::Success(text)) => html! {
            <p class="banner success" role="status">{text.clone()}</p>
        },
        Some(ProfileMessage::Error(text)) => html! {
            <p class="banner error" role="alert">{text.clone()}</p>
        },
        None => html! {},
    }
}

fn render_details(state: &ProfileState, user: &UserProfile, api_ctx: &ApiCtx) -> Html {
    let on_edit = {
        let user = user.clone();
        Callback::from(move |_| {
            app_dispatch().reduce_mut(|store| start_editing(&mut store.profile, &user));
        })
    };
    let set_confirm = |open: bool| {
        Callback::from(move |_| {
            app_dispatch().reduce_mut(|store| store.profile.confirm_delete = open);
        })
    };
    let on_delete = {
        let api_ctx = api_ctx.clone();
        Callback::from(move |_| delete_account(&api_ctx))
    };

    html! {
        <div class="profile-details">
            <dl>
                <dt>{"Username"}</dt>
                <dd>{user.username.clone()}</dd>
                <dt>{"Email"}</dt>
                <dd>{user.email.clone()}</dd>
                <dt>{"Birthday"}</dt>
                <dd>{format_display_date(user.birthday)}</dd>
            </dl>
            <div class="actions">
                <button class="primary" onclick={on_edit}>{"Edit profile"}</button>
                {if state.confirm_delete {
                    html! {
                        <div class="confirm" role="alertdialog">
                            <p>{"Delete your account? This cannot be undone."}</p>
                            <button class="danger" onclick={on_delete}>{"Yes, delete"}</button>
                            <button class="ghost" onclick={set_confirm(false)}>{"Keep account"}</button>
                        </div>
                    }
                } else {
                    html! { <button class="danger ghost" onclick={set_confirm(true)}>{"Delete account"}</button> }
                }}
            </div>
        </div>
    }
}

fn render_form(state: &ProfileState, user: &UserProfile, api_ctx: &ApiCtx) -> Html {
    let on_field = |field: Field| {
        Callback::from(move |value: String| {
            app_dispatch()
                .reduce_mut(|store| update_field(&mut store.profile, field, value, today()));
        })
    };
    let on_submit = {
        let api_ctx = api_ctx.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            save_profile(&api_ctx);
        })
    };
    let on_cancel = {
        let user = user.clone();
        Callback::from(move |_| {
            app_dispatch().reduce_mut(|store| cancel_editing(&mut store.profile, &user));
        })
    };
    let toggle = |flip: fn(&mut ProfileState)| {
        Callback::from(move |_| app_dispatch().reduce_mut(|store| flip(&mut store.profile)))
    };
    let password_type = if state.show_passwords { "text" } else { "password" };

    html! {
        <form class="profile-form" onsubmit={on_submit} novalidate=true>
            <FormField
                label="Username"
                name="username"
                value={state.form.username.clone()}
                error={state.errors.get(Field::Username)}
                disabled={state.saving}
                on_input={on_field(Field::Username)}
            />
            <FormField
                label="Email"
                name="email"
                input_type="email"
                value={state.form.email.clone()}
                error={state.errors.get(Field::Email)}
                disabled={state.saving}
                on_input={on_field(Field::Email)}
            />
            <FormField
                label="Birthday"
                name="birthday"
                input_type="date"
                value={state.form.birthday.clone()}
                error={state.errors.get(Field::Birthday)}
                disabled={state.saving}
                on_input={on_field(Field::Birthday)}
            />
            <button
                type="button"
                class="ghost"
                onclick={toggle(toggle_password_fields)}
            >
                {if state.show_password_fields { "Keep current password" } else { "Change password" }}
            </button>
            {if state.show_password_fields {
                html! {
                    <fieldset class="password-change">
                        <FormField
                            label="Current password"
                            name="current-password"
                            input_type={password_type}
                            value={state.form.current_password.clone()}
                            error={state.errors.get(Field::CurrentPassword)}
                            disabled={state.saving}
                            on_input={on_field(Field::CurrentPassword)}
                        />
                        <FormField
                            label="New password"
                            name="new-password"
                            input_type={password_type}
                            value={state.form.new_password.clone()}
                            error={state.errors.get(Field::NewPassword)}
                            disabled={state.saving}
                            on_input={on_field(Field::NewPassword)}
                        />
                        <label class="inline">
                            <input
                                type="checkbox"
                                checked={state.show_passwords}
                                onclick={toggle(toggle_show_passwords)}
                            />
                            {"Show passwords"}
                        </label>
                    </fieldset>
                }
            } else {
                html! {}
            }}
            <div class="actions">
                <button type="submit" class="primary" disabled={state.saving}>
                    {if state.saving { "Saving..." } else { "Save" }}
                </button>
                <button type="button" class="ghost" disabled={state.saving} onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}

fn render_favorites(movies: Option<&[Movie]>) -> Html {
    match movies {
        None => html! { <p class="muted">{LOADING_TEXT}</p> },
        Some([]) => html! {
            <EmptyState
                title="No favorite movies yet."
                description="Use the heart on any movie to keep it here."
                back_to={Route::Movies}
                back_label="Browse movies"
            />
        },
        Some(movies) => html! {
            <div class="movie-grid">
                {for movies.iter().map(|movie| html! {
                    <MovieCard key={movie.id.clone()} movie={movie.clone()} />
                })}
            </div>
        },
    }
}
