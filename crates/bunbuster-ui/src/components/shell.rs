use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    /// Signed-in username; `None` shows the sign-in links.
    pub username: Option<String>,
    pub on_logout: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };

    let links = match props.username.clone() {
        Some(username) => {
            let on_logout = props.on_logout.clone();
            html! {
                <>
                    {nav_item(Route::Movies, "Movies", &active)}
                    {nav_item(Route::Genres, "Genres", &active)}
                    {nav_item(Route::Directors, "Directors", &active)}
                    {nav_item(Route::Profile { username }, "Profile", &active)}
                    <button class="nav-item ghost" onclick={Callback::from(move |_| on_logout.emit(()))}>{"Logout"}</button>
                </>
            }
        }
        None => html! {
            <>
                {nav_item(Route::Login, "Login", &active)}
                {nav_item(Route::Signup, "Signup", &active)}
            </>
        },
    };

    html! {
        <div class="app-shell">
            <header class="topbar">
                <Link<Route> to={Route::Movies} classes={classes!("brand")}>
                    <strong>{"Bunbuster"}</strong>
                </Link<Route>>
                <button class="ghost mobile-only" aria-label="Toggle navigation" onclick={toggle_nav}>{"☰"}</button>
                <nav class={classes!("nav", if *nav_open { "open" } else { "closed" })}>
                    {links}
                </nav>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!(
        "nav-item",
        if *active == route {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label.to_string()}</Link<Route>>
    }
}
