//! Reactive implementation of the client view

use std::time::Duration;

use farm_client::{BatchCard, Message, MessageSlot, Page, RecordKind, View};
use leptos::prelude::*;

use crate::browser;

/// What the batch list area currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum BatchListState {
    Loading,
    Loaded(Vec<BatchCard>),
    Failed(String),
}

/// Signals the page components render from
///
/// The controller writes into these; components only read them.
#[derive(Debug, Clone, Copy)]
pub struct SignalView {
    pub register_message: RwSignal<Option<Message>>,
    pub login_message: RwSignal<Option<Message>>,
    pub batches: RwSignal<BatchListState>,
    pub open_modal: RwSignal<Option<RecordKind>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            register_message: RwSignal::new(None),
            login_message: RwSignal::new(None),
            batches: RwSignal::new(BatchListState::Loading),
            open_modal: RwSignal::new(None),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SignalView {
    fn show_message(&self, slot: MessageSlot, message: &Message) {
        let target = match slot {
            MessageSlot::Register => self.register_message,
            MessageSlot::Login => self.login_message,
        };
        target.set(Some(message.clone()));
    }

    fn alert(&self, text: &str) {
        browser::alert(text);
    }

    fn navigate(&self, page: Page) {
        browser::navigate(page);
    }

    fn navigate_after(&self, page: Page, delay: Duration) {
        browser::navigate_after(page, delay);
    }

    fn render_batches(&self, cards: Vec<BatchCard>) {
        self.batches.set(BatchListState::Loaded(cards));
    }

    fn render_batch_error(&self, text: &str) {
        self.batches.set(BatchListState::Failed(text.to_string()));
    }

    fn show_modal(&self, kind: RecordKind) {
        self.open_modal.set(Some(kind));
    }

    fn hide_modals(&self) {
        self.open_modal.set(None);
    }
}
