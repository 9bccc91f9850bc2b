//! Own borrow records screen.

use crate::app::api::ApiCtx;
use crate::app::store::AppStore;
use biblio_api_models::{BorrowRecord, BorrowStatus};
use chrono::NaiveDateTime;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

const PAGE_SIZE: u32 = 50;

#[function_component(BorrowRecordsPage)]
pub(crate) fn borrow_records_page() -> Html {
    let api = use_context::<ApiCtx>();
    let user_id = use_selector(|store: &AppStore| {
        store.session.session().identity().map(|identity| identity.id)
    });
    let records = use_state(Vec::<BorrowRecord>::new);

    {
        let api = api.clone();
        let records = records.clone();
        let user_id = *user_id;
        use_effect_with_deps(
            move |_| {
                if let (Some(api), Some(user_id)) = (api, user_id) {
                    spawn_local(async move {
                        if let Ok(page) =
                            api.client.fetch_borrow_records_for(user_id, 0, PAGE_SIZE).await
                        {
                            records.set(page.content);
                        }
                    });
                }
                || ()
            },
            user_id,
        );
    }

    html! {
        <section class="page">
            <h2>{"My borrow records"}</h2>
            <table class="data">
                <thead>
                    <tr>
                        <th>{"Book"}</th>
                        <th>{"Borrowed"}</th>
                        <th>{"Due"}</th>
                        <th>{"Returned"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for records.iter().map(record_row) }
                </tbody>
            </table>
        </section>
    }
}

fn record_row(record: &BorrowRecord) -> Html {
    html! {
        <tr>
            <td>{ record.book.title.clone() }</td>
            <td>{ format_date(record.borrow_date) }</td>
            <td>{ format_date(record.due_date) }</td>
            <td>{ format_date(record.return_date) }</td>
            <td>{ status_label(record.status) }</td>
        </tr>
    }
}

/// Short display form of an optional timestamp.
pub(crate) fn format_date(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Display label for a borrow record state.
pub(crate) fn status_label(status: BorrowStatus) -> &'static str {
    match status {
        BorrowStatus::Pending => "pending approval",
        BorrowStatus::Borrowed => "borrowed",
        BorrowStatus::Returned => "returned",
        BorrowStatus::Overdue => "overdue",
        BorrowStatus::Rejected => "rejected",
    }
}
