//! The client controller: every user action the front ends can trigger

mod auth;
mod batches;
mod modal;
mod submit;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::api::Endpoints;
use crate::config::Config;
use crate::io::HttpClient;
use crate::session::Session;
use crate::storage::TokenStore;
use crate::view::{Page, View};

pub use auth::{
    LOGIN_FIELDS_REQUIRED, LOGIN_INVALID, LOGIN_NETWORK_ERROR, REGISTER_FAILED,
    REGISTER_FIELDS_REQUIRED, REGISTER_NETWORK_ERROR, REGISTER_SUCCESS,
};
pub use batches::BATCHES_FAILED;
pub use submit::{confirmation, FEEDING_FIELDS_REQUIRED};

/// Wires view events to API calls
///
/// Handlers never return errors: every failure ends up on the view as a
/// message, an alert, or a navigation.
pub struct Controller {
    endpoints: Endpoints,
    redirect_delay: Duration,
    http: Rc<dyn HttpClient>,
    session: Session,
    view: Rc<dyn View>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("endpoints", &self.endpoints)
            .field("session", &self.session)
            .finish()
    }
}

impl Controller {
    pub fn new(
        config: &Config,
        http: Rc<dyn HttpClient>,
        tokens: Rc<dyn TokenStore>,
        view: Rc<dyn View>,
    ) -> Self {
        tracing::debug!("Created Controller for {}", config.api.base_url);

        Self {
            endpoints: Endpoints::new(&config.api.base_url),
            redirect_delay: config.ui.redirect_delay(),
            http,
            session: Session::new(tokens),
            view,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Entry point when a page finishes loading at `path`
    pub async fn on_page_load(&self, path: &str) {
        if Page::from_path(path) == Some(Page::Dashboard) {
            self.load_batches().await;
        }
    }
}
