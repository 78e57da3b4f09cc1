use crate::core::store::{AppStore, app_dispatch, dismiss_toast};
use crate::models::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Milliseconds before a toast dismisses itself.
const TOAST_TTL_MS: u32 = 4000;

/// Stack of store toasts, newest last.
#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &AppStore| store.ui.toasts.clone());
    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    // One timer per toast id, so newer toasts do not restart older ones.
    use_effect_with_deps(
        move |id: &u64| {
            let id = *id;
            let timer = Timeout::new(TOAST_TTL_MS, move || {
                app_dispatch().reduce_mut(|store| dismiss_toast(store, id));
            });
            move || drop(timer)
        },
        id,
    );
    let on_close = Callback::from(move |_| {
        app_dispatch().reduce_mut(|store| dismiss_toast(store, id));
    });
    let kind = match props.toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };

    html! {
        <div class={classes!("toast", kind)} role={if props.toast.kind == ToastKind::Error { "alert" } else { "status" }}>
            <span>{props.toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
