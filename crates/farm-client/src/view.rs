//! View trait and the render-ready types handed to it

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{Batch, BatchId, RecordKind};

/// Pages the client can navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "login.html",
            Page::Register => "register.html",
            Page::Dashboard => "dashboard.html",
        }
    }

    /// Match a location path such as `/app/dashboard.html`
    pub fn from_path(path: &str) -> Option<Page> {
        [Page::Login, Page::Register, Page::Dashboard]
            .into_iter()
            .find(|page| path.ends_with(page.path()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Inline message areas on the auth pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSlot {
    Register,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }
}

/// A per-batch control that opens one of the record modals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchAction {
    pub label: &'static str,
    pub kind: RecordKind,
    pub batch_id: BatchId,
}

/// One rendered entry of the batch list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCard {
    pub batch_id: BatchId,
    pub title: String,
    pub animal: String,
    pub quantity: String,
    pub initial_quantity: Option<u64>,
    pub arrival_date: Option<String>,
    pub in_shop: bool,
    pub total_cost: Option<String>,
    pub unit_cost: Option<String>,
    pub actions: [BatchAction; 3],
}

impl From<&Batch> for BatchCard {
    fn from(batch: &Batch) -> Self {
        let action = |kind| BatchAction {
            label: action_label(kind),
            kind,
            batch_id: batch.id,
        };
        Self {
            batch_id: batch.id,
            title: format!("Batch {}", batch.serial_number),
            animal: batch.animal_name.clone(),
            quantity: batch
                .current_quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            initial_quantity: batch.initial_quantity,
            arrival_date: batch.arrival_date.clone(),
            in_shop: batch.is_moved_to_shop,
            total_cost: batch.total_cost.clone(),
            unit_cost: batch.unit_cost.clone(),
            actions: RecordKind::ALL.map(action),
        }
    }
}

impl BatchCard {
    /// Current stock, followed by the starting stock when it is known
    pub fn quantity_text(&self) -> String {
        match self.initial_quantity {
            Some(initial) => format!("{} of {}", self.quantity, initial),
            None => self.quantity.clone(),
        }
    }

    /// Known costs on one line, `None` when the server sent neither
    pub fn cost_text(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.total_cost.as_ref().map(|c| format!("{} total", c)),
            self.unit_cost.as_ref().map(|c| format!("{} per animal", c)),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Button label for the control opening a record modal
pub fn action_label(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Feeding => "Add Feeding",
        RecordKind::Expense => "Add Expense",
        RecordKind::Mortality => "Report Mortality",
    }
}

/// Build the full card list, one card per batch in server order
pub fn batch_cards(batches: &[Batch]) -> Vec<BatchCard> {
    batches.iter().map(BatchCard::from).collect()
}

/// Everything the controller can do to the screen
pub trait View {
    /// Replace the text of an inline message area
    fn show_message(&self, slot: MessageSlot, message: &Message);

    /// Blocking notice the user must acknowledge
    fn alert(&self, text: &str);

    fn navigate(&self, page: Page);

    fn navigate_after(&self, page: Page, delay: Duration);

    /// Replace the batch list contents with these cards
    fn render_batches(&self, cards: Vec<BatchCard>);

    /// Replace the batch list contents with a failure notice
    fn render_batch_error(&self, text: &str);

    /// Show the shared backdrop and the modal for `kind`
    fn show_modal(&self, kind: RecordKind);

    /// Hide every modal and the backdrop
    fn hide_modals(&self);
}
