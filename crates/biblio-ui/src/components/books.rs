//! Book catalogue screen with keyword search.

use crate::app::api::ApiCtx;
use crate::app::store::{self, AppStore};
use biblio_api_models::{Book, BookStatus, BorrowRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const PAGE_SIZE: u32 = 20;

#[function_component(BookListPage)]
pub(crate) fn book_list_page() -> Html {
    let api = use_context::<ApiCtx>();
    let user_id = use_selector(|store: &AppStore| {
        store.session.session().identity().map(|identity| identity.id)
    });
    let books = use_state(Vec::<Book>::new);
    let keyword = use_state(String::new);

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
            (),
        );
    }

    let on_keyword = {
        let keyword = keyword.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                keyword.set(input.value());
            }
        })
    };

    let on_search = {
        let api = api.clone();
        let books = books.clone();
        let keyword = keyword.clone();
        Callback::from(move |_| {
            let Some(api) = api.clone() else { return };
            let books = books.clone();
            let term = (*keyword).trim().to_string();
            spawn_local(async move {
                let fetched = if term.is_empty() {
                    api.client.fetch_books(0, PAGE_SIZE).await
                } else {
                    api.client.search_books(&term, 0, PAGE_SIZE).await
                };
                if let Ok(page) = fetched {
                    books.set(page.content);
                }
            });
        })
    };

    let borrow = {
        let api = api.clone();
        let user_id = *user_id;
        Callback::from(move |book_id: i64| {
            let Some(api) = api.clone() else { return };
            let Some(user_id) = user_id else { return };
            spawn_local(async move {
                let request = BorrowRequest { user_id, book_id };
                if api.client.request_borrow(&request).await.is_ok() {
                    store::notify_success(
                        &Dispatch::<AppStore>::new(),
                        "borrow request submitted",
                    );
                }
            });
        })
    };

    html! {
        <section class="page">
            <div class="page-head">
                <h2>{"Books"}</h2>
                <div class="search">
                    <input
                        type="search"
                        placeholder="title, author or ISBN"
                        value={(*keyword).clone()}
                        oninput={on_keyword}
                    />
                    <button class="solid" onclick={on_search}>{"Search"}</button>
                </div>
            </div>
            <table class="data">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Author"}</th>
                        <th>{"Category"}</th>
                        <th>{"Available"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for books.iter().map(|book| book_row(book, &borrow)) }
                </tbody>
            </table>
        </section>
    }
}

fn book_row(book: &Book, borrow: &Callback<i64>) -> Html {
    let borrowable = book.status == BookStatus::Available && book.available_copies > 0;
    let id = book.id;
    let on_borrow = {
        let borrow = borrow.clone();
        Callback::from(move |_| borrow.emit(id))
    };
    let category = book
        .category
        .as_ref()
        .map(|category| category.name.clone())
        .unwrap_or_default();

    html! {
        <tr>
            <td>{ book.title.clone() }</td>
            <td>{ book.author.clone() }</td>
            <td>{ category }</td>
            <td>{ format!("{}/{}", book.available_copies, book.total_copies) }</td>
            <td>
                <button class="ghost" disabled={!borrowable} onclick={on_borrow}>
                    {"Borrow"}
                </button>
            </td>
        </tr>
    }
}
