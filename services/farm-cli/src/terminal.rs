//! Plain-text rendering of controller output

use std::fmt::Write as _;
use std::time::Duration;

use farm_client::{BatchCard, Message, MessageSlot, Page, RecordKind, Tone, View};

/// Prints everything the controller shows to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalView;

impl View for TerminalView {
    fn show_message(&self, _slot: MessageSlot, message: &Message) {
        println!("{}", message_line(message));
    }

    fn alert(&self, text: &str) {
        println!("{}", text);
    }

    fn navigate(&self, page: Page) {
        println!("{}", navigation_hint(page));
    }

    // Nothing to wait for in a terminal
    fn navigate_after(&self, page: Page, _delay: Duration) {
        println!("{}", navigation_hint(page));
    }

    fn render_batches(&self, cards: Vec<BatchCard>) {
        if cards.is_empty() {
            println!("No batches.");
        }
        for card in &cards {
            print!("{}", render_card(card));
        }
    }

    fn render_batch_error(&self, text: &str) {
        println!("{}", text);
    }

    fn show_modal(&self, kind: RecordKind) {
        tracing::debug!("{} form opened", kind);
    }

    fn hide_modals(&self) {
        tracing::debug!("Forms closed");
    }
}

pub fn message_line(message: &Message) -> String {
    match message.tone {
        Tone::Error => format!("error: {}", message.text),
        Tone::Success => message.text.clone(),
    }
}

/// What to run next instead of following a page change
pub fn navigation_hint(page: Page) -> &'static str {
    match page {
        Page::Login => "Run `farm login` to sign in.",
        Page::Register => "Run `farm register` to create an account.",
        Page::Dashboard => "Run `farm batches` to list your batches.",
    }
}

/// A batch card as an indented block, with the commands its buttons map to
pub fn render_card(card: &BatchCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{}  {}", card.batch_id, card.title);
    let _ = writeln!(out, "    Animal:   {}", card.animal);
    let _ = writeln!(out, "    Quantity: {}", card.quantity_text());
    if let Some(date) = &card.arrival_date {
        let _ = writeln!(out, "    Arrived:  {}", date);
    }
    if let Some(cost) = card.cost_text() {
        let _ = writeln!(out, "    Cost:     {}", cost);
    }
    if card.in_shop {
        let _ = writeln!(out, "    Moved to shop");
    }
    let commands: Vec<String> = card
        .actions
        .iter()
        .map(|action| format!("farm {} {}", action.kind.path_segment(), action.batch_id))
        .collect();
    let _ = writeln!(out, "    Record:   {}", commands.join(" | "));
    out
}
