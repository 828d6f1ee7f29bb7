//! Record submissions against the selected batch

use serde::Serialize;

use super::Controller;
use crate::api::{BatchId, ExpenseRequest, FeedingRequest, MortalityRequest, RecordKind};
use crate::forms::{ExpenseForm, FeedingForm, MortalityForm};
use crate::io::{HttpRequest, HttpResponse};

pub const FEEDING_FIELDS_REQUIRED: &str = "Please enter bags and amount.";

/// Alert shown once a record request has settled
pub fn confirmation(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Feeding => "Feeding added!",
        RecordKind::Expense => "Expense added!",
        RecordKind::Mortality => "Mortality recorded!",
    }
}

impl Controller {
    pub async fn submit_feeding(&self, form: &FeedingForm) {
        if !form.is_complete() {
            self.view.alert(FEEDING_FIELDS_REQUIRED);
            return;
        }
        self.submit_record(RecordKind::Feeding, &FeedingRequest::from(form))
            .await;
    }

    pub async fn submit_expense(&self, form: &ExpenseForm) {
        self.submit_record(RecordKind::Expense, &ExpenseRequest::from(form))
            .await;
    }

    pub async fn submit_mortality(&self, form: &MortalityForm) {
        self.submit_record(RecordKind::Mortality, &MortalityRequest::from(form))
            .await;
    }

    /// POST `body` for the selected batch, then confirm, close and reload
    ///
    /// The confirmation does not depend on the response status.
    async fn submit_record<T: Serialize>(&self, kind: RecordKind, body: &T) {
        let Some(batch_id) = self.session.active_batch() else {
            tracing::warn!("No batch selected, dropping {} submission", kind);
            return;
        };

        let response = match self.post_record(batch_id, kind, body).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to submit {} for batch {}: {}", kind, batch_id, e);
                return;
            }
        };

        if response.is_success() {
            tracing::info!("Recorded {} for batch {}", kind, batch_id);
        } else {
            tracing::warn!(
                "{} for batch {} returned status {}: {}",
                kind,
                batch_id,
                response.status,
                response.body
            );
        }

        self.view.alert(confirmation(kind));
        self.close_modals();
        self.load_batches().await;
    }

    async fn post_record<T: Serialize>(
        &self,
        batch_id: BatchId,
        kind: RecordKind,
        body: &T,
    ) -> crate::Result<HttpResponse> {
        let mut request = HttpRequest::post_json(
            self.endpoints.batch_record(batch_id, kind),
            serde_json::to_value(body)?,
        );
        if let Some(token) = self.session.token() {
            request = request.bearer(token);
        }
        self.http.send(request).await
    }
}
