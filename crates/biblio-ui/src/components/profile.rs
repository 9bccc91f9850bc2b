//! Own profile screen; refreshing re-fetches the identity record without
//! touching the credential.

use crate::app::api::ApiCtx;
use crate::app::store::{self, AppStore};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let api = use_context::<ApiCtx>();
    let identity = use_selector(|store: &AppStore| store.session.session().identity().cloned());

    let on_refresh = {
        Callback::from(move |_| {
            let Some(api) = api.clone() else { return };
            spawn_local(async move {
                if let Ok(profile) = api.client.fetch_profile().await {
                    let dispatch = Dispatch::<AppStore>::new();
                    store::refresh_identity(&dispatch, profile);
                    store::notify_success(&dispatch, "profile refreshed");
                }
            });
        })
    };

    let Some(identity) = (*identity).clone() else {
        return html! { <section class="page"><h2>{"Profile"}</h2></section> };
    };

    let field = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    html! {
        <section class="page">
            <div class="page-head">
                <h2>{"Profile"}</h2>
                <button class="ghost" onclick={on_refresh}>{"Refresh"}</button>
            </div>
            <dl class="detail">
                <dt>{"Username"}</dt><dd>{ identity.username.clone() }</dd>
                <dt>{"Name"}</dt><dd>{ field(identity.name.clone()) }</dd>
                <dt>{"Email"}</dt><dd>{ field(identity.email.clone()) }</dd>
                <dt>{"Phone"}</dt><dd>{ field(identity.phone.clone()) }</dd>
                <dt>{"Role"}</dt><dd>{ format!("{:?}", identity.role) }</dd>
            </dl>
        </section>
    }
}
