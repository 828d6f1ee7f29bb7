use super::Controller;
use crate::api::{BatchId, RecordKind};

impl Controller {
    /// Select `batch_id` and show the record modal for `kind`
    pub fn open_modal(&self, kind: RecordKind, batch_id: BatchId) {
        tracing::debug!("Opening {} modal for batch {}", kind, batch_id);
        self.session.select_batch(batch_id);
        self.view.show_modal(kind);
    }

    pub fn open_feeding_modal(&self, batch_id: BatchId) {
        self.open_modal(RecordKind::Feeding, batch_id);
    }

    pub fn open_expense_modal(&self, batch_id: BatchId) {
        self.open_modal(RecordKind::Expense, batch_id);
    }

    pub fn open_mortality_modal(&self, batch_id: BatchId) {
        self.open_modal(RecordKind::Mortality, batch_id);
    }

    /// Hide every modal; the selected batch is kept
    pub fn close_modals(&self) {
        self.view.hide_modals();
    }
}
