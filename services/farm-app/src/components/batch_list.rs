//! Batch list and the per-batch panels

use farm_client::view::BatchCard;
use leptos::prelude::*;

use crate::app::use_app;
use crate::view::BatchListState;

/// Renders whatever the controller last put in the batch list signal
#[component]
pub fn BatchList() -> impl IntoView {
    let batches = use_app().view.batches;

    view! {
        <section>
            <h2>"Batches"</h2>
            {move || match batches.get() {
                BatchListState::Loading => view! { <p>"Loading batches..."</p> }.into_any(),
                BatchListState::Failed(text) => {
                    view! { <p style="color: #721c24;">{text}</p> }.into_any()
                }
                BatchListState::Loaded(cards) if cards.is_empty() => {
                    view! { <p>"No batches yet."</p> }.into_any()
                }
                BatchListState::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| view! { <BatchPanel card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}

/// One batch with its record controls
#[component]
pub fn BatchPanel(card: BatchCard) -> impl IntoView {
    let app = use_app();
    let quantity = card.quantity_text();
    let cost = card.cost_text();
    let BatchCard {
        title,
        animal,
        arrival_date,
        in_shop,
        actions,
        ..
    } = card;

    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.25rem; padding: 0.75rem; margin-bottom: 0.75rem;">
            <h3 style="margin-top: 0;">{title}</h3>
            <p>"Animal: " {animal}</p>
            <p>"Quantity: " {quantity}</p>
            {arrival_date.map(|date| view! { <p>"Arrived: " {date}</p> })}
            {cost.map(|cost| view! { <p>"Cost: " {cost}</p> })}
            {in_shop.then(|| view! { <p><em>"Moved to shop"</em></p> })}
            <div>
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                style="margin-right: 0.5rem;"
                                on:click=move |_| {
                                    app.controller().open_modal(action.kind, action.batch_id)
                                }
                            >
                                {action.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
