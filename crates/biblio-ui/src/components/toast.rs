//! Toast notifications driven by the shared store.

use crate::app::store::{AppStore, Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const DISMISS_AFTER_MS: u32 = 4_000;

#[function_component(ToastOutlet)]
pub(crate) fn toast_outlet() -> Html {
    let toasts = use_selector(|store: &AppStore| store.toasts.entries.clone());
    {
        let entries = (*toasts).clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut handles = Vec::new();
                for toast in list {
                    let id = toast.id;
                    handles.push(Timeout::new(DISMISS_AFTER_MS, move || {
                        Dispatch::<AppStore>::new().reduce_mut(|store| store.toasts.dismiss(id));
                    }));
                }
                move || drop(handles)
            },
            entries,
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            { for toasts.iter().map(render_toast) }
        </div>
    }
}

fn render_toast(toast: &Toast) -> Html {
    let class = match toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let id = toast.id;
    let on_close = Callback::from(move |_| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.toasts.dismiss(id));
    });

    html! {
        <div class={classes!("toast", class)} role="status">
            <span>{ toast.message.clone() }</span>
            <button class="ghost" aria-label="dismiss" onclick={on_close}>{"x"}</button>
        </div>
    }
}
