//! Record modals and the backdrop they share

use farm_client::view::action_label;
use farm_client::{ExpenseForm, FeedingForm, MortalityForm, RecordKind};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::app::use_app;

const BACKDROP: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4);";
const DIALOG: &str = "position: fixed; top: 20%; left: 50%; transform: translateX(-50%); \
     background: #fff; padding: 1rem 1.5rem; border-radius: 0.25rem; min-width: 320px;";
const FIELD: &str = "display: block; width: 100%; margin-bottom: 0.5rem; padding: 0.4rem;";

/// Shows the backdrop and the open modal, if any
#[component]
pub fn ModalFrame() -> impl IntoView {
    let open = use_app().view.open_modal;

    view! {
        {move || {
            open.get().map(|kind| {
                let body = match kind {
                    RecordKind::Feeding => view! { <FeedingModal /> }.into_any(),
                    RecordKind::Expense => view! { <ExpenseModal /> }.into_any(),
                    RecordKind::Mortality => view! { <MortalityModal /> }.into_any(),
                };
                view! {
                    <div style=BACKDROP></div>
                    <div style=DIALOG>
                        <h2 style="margin-top: 0;">{action_label(kind)}</h2>
                        {body}
                    </div>
                }
            })
        }}
    }
}

#[component]
fn CancelButton() -> impl IntoView {
    let app = use_app();
    view! {
        <button type="button" style="margin-left: 0.5rem;" on:click=move |_| app.controller().close_modals()>
            "Cancel"
        </button>
    }
}

#[component]
fn FeedingModal() -> impl IntoView {
    let app = use_app();
    let bags = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = FeedingForm {
            bags: bags.get_untracked(),
            amount: amount.get_untracked(),
            note: note.get_untracked(),
        };
        app.spawn(move |controller| async move { controller.submit_feeding(&form).await });
    };

    view! {
        <form on:submit=on_submit>
            <input type="number" placeholder="Bags" style=FIELD bind:value=bags />
            <input type="number" placeholder="Amount" style=FIELD bind:value=amount />
            <input type="text" placeholder="Note" style=FIELD bind:value=note />
            <button type="submit">"Save"</button>
            <CancelButton />
        </form>
    }
}

#[component]
fn ExpenseModal() -> impl IntoView {
    let app = use_app();
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ExpenseForm {
            description: description.get_untracked(),
            amount: amount.get_untracked(),
        };
        app.spawn(move |controller| async move { controller.submit_expense(&form).await });
    };

    view! {
        <form on:submit=on_submit>
            <input type="text" placeholder="Description" style=FIELD bind:value=description />
            <input type="number" placeholder="Amount" style=FIELD bind:value=amount />
            <button type="submit">"Save"</button>
            <CancelButton />
        </form>
    }
}

#[component]
fn MortalityModal() -> impl IntoView {
    let app = use_app();
    let count = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = MortalityForm {
            count: count.get_untracked(),
            reason: reason.get_untracked(),
        };
        app.spawn(move |controller| async move { controller.submit_mortality(&form).await });
    };

    view! {
        <form on:submit=on_submit>
            <input type="number" placeholder="Count" style=FIELD bind:value=count />
            <input type="text" placeholder="Reason (optional)" style=FIELD bind:value=reason />
            <button type="submit">"Save"</button>
            <CancelButton />
        </form>
    }
}
