//! Dashboard page

use leptos::prelude::*;

use crate::app::use_app;
use crate::components::batch_list::BatchList;
use crate::components::modals::ModalFrame;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();

    view! {
        <header style="display: flex; justify-content: space-between; align-items: center;">
            <h1>"Farm Dashboard"</h1>
            <button on:click=move |_| app.controller().logout()>"Logout"</button>
        </header>
        <BatchList />
        <ModalFrame />
    }
}
