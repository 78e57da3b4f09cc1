//! Placeholder panel for empty lists, pending lookups and missing entries.
//!
//! # Design
//! - Defaults to the shared empty-list copy so list views need no props.
//! - An optional link leads back to a list view.

use crate::app::Route;
use crate::core::logic::EMPTY_LIST_TEXT;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    #[prop_or(AttrValue::Static(EMPTY_LIST_TEXT))]
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub back_to: Option<Route>,
    #[prop_or(AttrValue::Static("Back"))]
    pub back_label: AttrValue,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <h4>{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
            {props.back_to.clone().map(|route| html! {
                <Link<Route> to={route} classes={classes!("ghost")}>{props.back_label.clone()}</Link<Route>>
            }).unwrap_or_default()}
        </div>
    }
}

/// Rendered by views mounted outside the API context provider.
pub(crate) fn missing_api_context() -> Html {
    html! { <EmptyState title="Missing API context." /> }
}
