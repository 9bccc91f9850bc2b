//! Borrow-record management table: approval, rejection, returns.

use crate::app::api::ApiCtx;
use crate::components::borrow_records::{format_date, status_label};
use biblio_api_models::{BorrowRecord, BorrowStatus};
use gloo::dialogs::prompt;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const PAGE_SIZE: u32 = 50;

/// Row-level actions an administrator can take on a record.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RecordAction {
    Approve,
    Reject,
    Return,
}

#[function_component(AdminBorrowRecordsPage)]
pub(crate) fn admin_borrow_records_page() -> Html {
    let api = use_context::<ApiCtx>();
    let records = use_state(Vec::<BorrowRecord>::new);
    let version = use_state(|| 0u32);

    {
        let api = api.clone();
        let records = records.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        if let Ok(page) = api.client.fetch_borrow_records(0, PAGE_SIZE).await {
                            records.set(page.content);
                        }
                    });
                }
                || ()
            },
            *version,
        );
    }

    let act = {
        let version = version.clone();
        Callback::from(move |(id, action): (i64, RecordAction)| {
            let Some(api) = api.clone() else { return };
            let version = version.clone();
            let reason = if action == RecordAction::Reject {
                // Cancelled prompt aborts the rejection.
                match prompt("Rejection reason:", None) {
                    Some(reason) => reason,
                    None => return,
                }
            } else {
                String::new()
            };
            spawn_local(async move {
                let outcome = match action {
                    RecordAction::Approve => api.client.approve_borrow(id).await,
                    RecordAction::Reject => api.client.reject_borrow(id, &reason).await,
                    RecordAction::Return => api.client.return_book(id).await,
                };
                if outcome.is_ok() {
                    version.set(*version + 1);
                }
            });
        })
    };

    html! {
        <section class="page">
            <h2>{"Manage borrow records"}</h2>
            <table class="data">
                <thead>
                    <tr>
                        <th>{"Book"}</th>
                        <th>{"User"}</th>
                        <th>{"Borrowed"}</th>
                        <th>{"Due"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for records.iter().map(|record| record_row(record, &act)) }
                </tbody>
            </table>
        </section>
    }
}

fn record_row(record: &BorrowRecord, act: &Callback<(i64, RecordAction)>) -> Html {
    let id = record.id;
    let username = record
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();
    let action_button = |label: &'static str, action: RecordAction| {
        let act = act.clone();
        let on_click = Callback::from(move |_| act.emit((id, action)));
        html! { <button class="ghost" onclick={on_click}>{ label }</button> }
    };
    let actions = match record.status {
        BorrowStatus::Pending => html! { <>
            { action_button("Approve", RecordAction::Approve) }
            { action_button("Reject", RecordAction::Reject) }
        </> },
        BorrowStatus::Borrowed | BorrowStatus::Overdue => {
            action_button("Mark returned", RecordAction::Return)
        }
        BorrowStatus::Returned | BorrowStatus::Rejected => html! {},
    };

    html! {
        <tr>
            <td>{ record.book.title.clone() }</td>
            <td>{ username }</td>
            <td>{ format_date(record.borrow_date) }</td>
            <td>{ format_date(record.due_date) }</td>
            <td>{ status_label(record.status) }</td>
            <td>{ actions }</td>
        </tr>
    }
}
