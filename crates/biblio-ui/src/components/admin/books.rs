//! Catalogue management table.

use crate::app::api::ApiCtx;
use crate::app::store::{self, AppStore};
use biblio_api_models::{Book, BookStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

const PAGE_SIZE: u32 = 50;

#[function_component(AdminBooksPage)]
pub(crate) fn admin_books_page() -> Html {
    let api = use_context::<ApiCtx>();
    let books = use_state(Vec::<Book>::new);
    // Bumped after each mutation to re-fetch the table.
    let version = use_state(|| 0u32);

    {
        let api = api.clone();
        let books = books.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        if let Ok(page) = api.client.fetch_books(0, PAGE_SIZE).await {
                            books.set(page.content);
                        }
                    });
                }
                || ()
            },
            *version,
        );
    }

    let delete = {
        let api = api.clone();
        let version = version.clone();
        Callback::from(move |id: i64| {
            let Some(api) = api.clone() else { return };
            let version = version.clone();
            spawn_local(async move {
                if api.client.delete_book(id).await.is_ok() {
                    store::notify_success(&Dispatch::<AppStore>::new(), "book deleted");
                    version.set(*version + 1);
                }
            });
        })
    };

    let toggle_status = {
        let version = version.clone();
        Callback::from(move |(id, status): (i64, BookStatus)| {
            let Some(api) = api.clone() else { return };
            let version = version.clone();
            let next = match status {
                BookStatus::Available => BookStatus::Unavailable,
                BookStatus::Unavailable | BookStatus::Maintenance => BookStatus::Available,
            };
            spawn_local(async move {
                if api.client.update_book_status(id, next).await.is_ok() {
                    version.set(*version + 1);
                }
            });
        })
    };

    html! {
        <section class="page">
            <h2>{"Manage books"}</h2>
            <table class="data">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Author"}</th>
                        <th>{"ISBN"}</th>
                        <th>{"Copies"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for books.iter().map(|book| admin_book_row(book, &delete, &toggle_status)) }
                </tbody>
            </table>
        </section>
    }
}

fn admin_book_row(
    book: &Book,
    delete: &Callback<i64>,
    toggle_status: &Callback<(i64, BookStatus)>,
) -> Html {
    let id = book.id;
    let status = book.status;
    let on_delete = {
        let delete = delete.clone();
        Callback::from(move |_| delete.emit(id))
    };
    let on_toggle = {
        let toggle_status = toggle_status.clone();
        Callback::from(move |_| toggle_status.emit((id, status)))
    };
    let toggle_label = if status == BookStatus::Available {
        "Withdraw"
    } else {
        "Make available"
    };

    html! {
        <tr>
            <td>{ book.title.clone() }</td>
            <td>{ book.author.clone() }</td>
            <td>{ book.isbn.clone().unwrap_or_default() }</td>
            <td>{ format!("{}/{}", book.available_copies, book.total_copies) }</td>
            <td>{ format!("{status:?}") }</td>
            <td>
                <button class="ghost" onclick={on_toggle}>{ toggle_label }</button>
                <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
