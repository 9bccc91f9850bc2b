//! Account management table.

use crate::app::api::ApiCtx;
use crate::app::store::{self, AppStore};
use biblio_api_models::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

const PAGE_SIZE: u32 = 50;

#[function_component(AdminUsersPage)]
pub(crate) fn admin_users_page() -> Html {
    let api = use_context::<ApiCtx>();
    let users = use_state(Vec::<UserProfile>::new);
    let version = use_state(|| 0u32);

    {
        let api = api.clone();
        let users = users.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        if let Ok(page) = api.client.fetch_users(0, PAGE_SIZE).await {
                            users.set(page.content);
                        }
                    });
                }
                || ()
            },
            *version,
        );
    }

    let delete = {
        let version = version.clone();
        Callback::from(move |id: i64| {
            let Some(api) = api.clone() else { return };
            let version = version.clone();
            spawn_local(async move {
                if api.client.delete_user(id).await.is_ok() {
                    store::notify_success(&Dispatch::<AppStore>::new(), "account deleted");
                    version.set(*version + 1);
                }
            });
        })
    };

    html! {
        <section class="page">
            <h2>{"Manage users"}</h2>
            <table class="data">
                <thead>
                    <tr>
                        <th>{"Username"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Role"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for users.iter().map(|user| user_row(user, &delete)) }
                </tbody>
            </table>
        </section>
    }
}

fn user_row(user: &UserProfile, delete: &Callback<i64>) -> Html {
    let id = user.id;
    let on_delete = {
        let delete = delete.clone();
        Callback::from(move |_| delete.emit(id))
    };
    let status = user
        .status
        .map(|status| format!("{status:?}"))
        .unwrap_or_default();

    html! {
        <tr>
            <td>{ user.username.clone() }</td>
            <td>{ user.name.clone().unwrap_or_default() }</td>
            <td>{ user.email.clone().unwrap_or_default() }</td>
            <td>{ format!("{:?}", user.role) }</td>
            <td>{ status }</td>
            <td>
                <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
