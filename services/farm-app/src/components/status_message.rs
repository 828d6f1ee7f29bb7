//! Inline message under the auth forms

use farm_client::{Message, Tone};
use leptos::prelude::*;

/// Red for errors, green for success, nothing until a message arrives
#[component]
pub fn StatusMessage(message: RwSignal<Option<Message>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|Message { text, tone }| {
                let color = match tone {
                    Tone::Error => "#721c24",
                    Tone::Success => "#155724",
                };
                let style = format!("margin: 0.5rem 0; font-weight: 600; color: {};", color);
                view! { <p style=style>{text}</p> }
            })
        }}
    }
}
