//! Session context: the persisted token and the selected batch

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::api::BatchId;
use crate::storage::TokenStore;

/// State shared by every handler for the lifetime of the page
pub struct Session {
    tokens: Rc<dyn TokenStore>,
    active_batch: Cell<Option<BatchId>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("active_batch", &self.active_batch.get())
            .finish()
    }
}

impl Session {
    pub fn new(tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            tokens,
            active_batch: Cell::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    pub fn store_token(&self, token: &str) -> crate::Result<()> {
        self.tokens.save(token)
    }

    pub fn clear_token(&self) -> crate::Result<()> {
        self.tokens.clear()
    }

    /// Point pending submissions at `batch_id`; stays set until replaced
    pub fn select_batch(&self, batch_id: BatchId) {
        self.active_batch.set(Some(batch_id));
    }

    pub fn active_batch(&self) -> Option<BatchId> {
        self.active_batch.get()
    }
}
