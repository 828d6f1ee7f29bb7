use super::Controller;
use crate::api::{Batch, BatchListing};
use crate::io::HttpRequest;
use crate::view::{batch_cards, Page};

pub const BATCHES_FAILED: &str = "Failed to load batches.";

impl Controller {
    /// Fetch the caller's batches and render them as cards
    ///
    /// Without a stored token the user is sent to the login page and no
    /// request is made.
    pub async fn load_batches(&self) {
        let Some(token) = self.session.token() else {
            tracing::debug!("No access token, redirecting to {}", Page::Login);
            self.view.navigate(Page::Login);
            return;
        };

        match self.fetch_batches(&token).await {
            Ok(batches) => {
                tracing::debug!("Loaded {} batches", batches.len());
                self.view.render_batches(batch_cards(&batches));
            }
            Err(e) => {
                tracing::warn!("Failed to load batches: {}", e);
                self.view.render_batch_error(BATCHES_FAILED);
            }
        }
    }

    async fn fetch_batches(&self, token: &str) -> crate::Result<Vec<Batch>> {
        let response = self
            .http
            .send(HttpRequest::get(self.endpoints.batches()).bearer(token))
            .await?;
        if !response.is_success() {
            return Err(crate::FarmError::Http(format!(
                "batch list returned status {}",
                response.status
            )));
        }
        Ok(response.json::<BatchListing>()?.into_batches())
    }
}
