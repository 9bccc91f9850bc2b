//! Route guard applied at the switch.
//!
//! Every navigation transition is evaluated against the session before the
//! target screen renders: unauthenticated hits on protected routes bounce
//! to login, missing privileges surface a notice and bounce back to where
//! the user was.

use crate::app::store::{self, AppStore};
use crate::components::admin::{AdminBooksPage, AdminBorrowRecordsPage, AdminUsersPage};
use crate::components::books::BookListPage;
use crate::components::borrow_records::BorrowRecordsPage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::shell::AppShell;
use crate::core::guard::{GuardDecision, evaluate};
use crate::routes::Route;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const PRIVILEGE_NOTICE: &str = "insufficient privileges: administrators only";

#[derive(Properties, PartialEq)]
pub(crate) struct GuardedProps {
    pub route: Route,
}

#[function_component(Guarded)]
pub(crate) fn guarded(props: &GuardedProps) -> Html {
    let session = use_selector(|store: &AppStore| store.session.session().clone());
    let last_allowed = use_selector(|store: &AppStore| store.nav.last_allowed.clone());
    let decision = evaluate(&session, props.route.requirements());

    use_effect_with_deps(
        move |(decision, route): &(GuardDecision, Route)| {
            let dispatch = Dispatch::<AppStore>::new();
            match decision {
                GuardDecision::Allow => {
                    let route = route.clone();
                    dispatch.reduce_mut(|store| store.nav.last_allowed = Some(route));
                }
                GuardDecision::RedirectToLogin => {
                    console::debug!("guard: login required", route.to_path());
                }
                GuardDecision::DenyAdmin => {
                    console::debug!("guard: admin role missing", route.to_path());
                    store::notify_error(&dispatch, PRIVILEGE_NOTICE);
                }
            }
            || ()
        },
        (decision, props.route.clone()),
    );

    match decision {
        GuardDecision::Allow => render_screen(&props.route),
        GuardDecision::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        GuardDecision::DenyAdmin => {
            let fallback = (*last_allowed).clone().unwrap_or(Route::Home);
            html! { <Redirect<Route> to={fallback} /> }
        }
    }
}

fn render_screen(route: &Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <Redirect<Route> to={Route::Books} /> },
        Route::Books => in_shell(html! { <BookListPage /> }),
        Route::Profile => in_shell(html! { <ProfilePage /> }),
        Route::BorrowRecords => in_shell(html! { <BorrowRecordsPage /> }),
        Route::AdminBooks => in_shell(html! { <AdminBooksPage /> }),
        Route::AdminUsers => in_shell(html! { <AdminUsersPage /> }),
        Route::AdminBorrowRecords => in_shell(html! { <AdminBorrowRecordsPage /> }),
        Route::NotFound => html! {
            <main class="page">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Home}>{"Back to Biblio"}</Link<Route>>
            </main>
        },
    }
}

fn in_shell(body: Html) -> Html {
    html! { <AppShell>{body}</AppShell> }
}
