//! Login and registration screen.

use crate::app::api::ApiCtx;
use crate::app::store::{self, AppStore};
use crate::routes::Route;
use biblio_api_models::{LoginRequest, RegisterRequest, UserProfile};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let registering = use_state(|| false);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let toggle_mode = {
        let registering = registering.clone();
        Callback::from(move |_| registering.set(!*registering))
    };

    let submit = {
        let api = api.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let registering = registering.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            let Some(api) = api.clone() else { return };
            let dispatch = Dispatch::<AppStore>::new();
            let user = (*username).trim().to_string();
            let pass = (*password).clone();
            if user.is_empty() || pass.is_empty() {
                store::notify_error(&dispatch, "username and password are required");
                return;
            }
            busy.set(true);
            let navigator = navigator.clone();
            let registering = registering.clone();
            let busy = busy.clone();
            let is_register = *registering;
            spawn_local(async move {
                if is_register {
                    let request = RegisterRequest {
                        username: user,
                        password: pass,
                        name: None,
                        email: None,
                    };
                    if api.client.register(&request).await.is_ok() {
                        store::notify_success(&dispatch, "account created, please log in");
                        registering.set(false);
                    }
                } else {
                    let request = LoginRequest {
                        username: user,
                        password: pass,
                    };
                    if let Ok(data) = api.client.login(&request).await {
                        let identity = UserProfile::from(&data);
                        store::login_success(&dispatch, identity, data.token.clone());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Books);
                        }
                    }
                }
                busy.set(false);
            });
        })
    };

    let heading = if *registering { "Create account" } else { "Sign in" };
    let action = if *registering { "Register" } else { "Log in" };
    let switch_label = if *registering {
        "Have an account? Sign in"
    } else {
        "New here? Create an account"
    };

    html! {
        <main class="auth-page">
            <div class="card">
                <h2>{ heading }</h2>
                <label class="stack">
                    <span>{"Username"}</span>
                    <input type="text" value={(*username).clone()} oninput={on_username} />
                </label>
                <label class="stack">
                    <span>{"Password"}</span>
                    <input type="password" value={(*password).clone()} oninput={on_password} />
                </label>
                <div class="actions">
                    <button class="ghost" onclick={toggle_mode}>{ switch_label }</button>
                    <button class="solid" disabled={*busy} onclick={submit}>{ action }</button>
                </div>
            </div>
        </main>
    }
}
