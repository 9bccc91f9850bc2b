//! Authenticated application shell: navigation plus session controls.

use crate::app::store::{self, AppStore};
use crate::routes::Route;
use biblio_api_models::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let identity = use_selector(|store: &AppStore| store.session.session().identity().cloned());
    let navigator = use_navigator();
    let identity = (*identity).clone();
    let is_admin = identity
        .as_ref()
        .is_some_and(|identity| identity.role == Role::Admin);
    let username = identity
        .map(|identity| identity.username)
        .unwrap_or_default();

    let on_logout = Callback::from(move |_| {
        store::invalidate_session(&Dispatch::<AppStore>::new());
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="shell">
            <header class="topbar">
                <span class="brand">{"Biblio"}</span>
                <nav>
                    <Link<Route> to={Route::Books}>{"Books"}</Link<Route>>
                    <Link<Route> to={Route::BorrowRecords}>{"My records"}</Link<Route>>
                    <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                    { if is_admin { html! { <>
                        <Link<Route> to={Route::AdminBooks}>{"Manage books"}</Link<Route>>
                        <Link<Route> to={Route::AdminUsers}>{"Manage users"}</Link<Route>>
                        <Link<Route> to={Route::AdminBorrowRecords}>{"Manage records"}</Link<Route>>
                    </> } } else { html! {} } }
                </nav>
                <div class="session">
                    <span class="muted">{ username }</span>
                    <button class="ghost" onclick={on_logout}>{"Log out"}</button>
                </div>
            </header>
            <main class="content">{ props.children.clone() }</main>
        </div>
    }
}
