//! Browser adapters: fetch transport, local storage, alerts and navigation
//!
//! Without the `csr` feature there is no browser, so these fall back to
//! in-memory and logging stand-ins that keep the crate usable natively.

use std::rc::Rc;
use std::time::Duration;

use farm_client::config::SessionConfig;
use farm_client::{HttpClient, Page, TokenStore};

#[cfg(feature = "csr")]
pub use web::{GlooHttpClient, LocalStorageTokenStore};

/// Transport used by the controller
pub fn http_client() -> Rc<dyn HttpClient> {
    #[cfg(feature = "csr")]
    {
        Rc::new(web::GlooHttpClient)
    }

    #[cfg(not(feature = "csr"))]
    {
        Rc::new(inert::OfflineHttpClient)
    }
}

/// Token store keyed by `session.token_key`
pub fn token_store(session: &SessionConfig) -> Rc<dyn TokenStore> {
    #[cfg(feature = "csr")]
    {
        Rc::new(web::LocalStorageTokenStore::new(&session.token_key))
    }

    #[cfg(not(feature = "csr"))]
    {
        log::debug!("No local storage, keeping '{}' in memory", session.token_key);
        Rc::new(farm_client::MemoryTokenStore::default())
    }
}

/// Path of the page currently loaded
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    #[cfg(not(feature = "csr"))]
    {
        String::from("/")
    }
}

pub fn alert(text: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(text) {
                log::warn!("alert failed: {:?}", e);
            }
        }
    }

    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {}", text);
    }
}

pub fn navigate(page: Page) {
    #[cfg(feature = "csr")]
    {
        let result = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))
            .and_then(|w| w.location().set_href(page.path()));
        if let Err(e) = result {
            log::warn!("Navigation to {} failed: {:?}", page, e);
        }
    }

    #[cfg(not(feature = "csr"))]
    {
        log::info!("navigate: {}", page);
    }
}

/// Navigate once `delay` has passed; the timer is never cancelled
pub fn navigate_after(page: Page, delay: Duration) {
    #[cfg(feature = "csr")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || navigate(page)).forget();
    }

    #[cfg(not(feature = "csr"))]
    {
        log::info!("navigate to {} in {:?}", page, delay);
    }
}

#[cfg(feature = "csr")]
mod web {
    use async_trait::async_trait;
    use farm_client::{FarmError, HttpClient, HttpRequest, HttpResponse, Method, TokenStore};
    use gloo_net::http::Request;

    /// HTTP client over the browser fetch API
    #[derive(Debug, Default, Clone, Copy)]
    pub struct GlooHttpClient;

    #[async_trait(?Send)]
    impl HttpClient for GlooHttpClient {
        async fn send(&self, request: HttpRequest) -> farm_client::Result<HttpResponse> {
            let HttpRequest {
                method,
                url,
                bearer,
                body,
            } = request;
            log::debug!("{} {}", method, url);

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(token) = &bearer {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }

            let sent = match &body {
                Some(body) => {
                    let request = builder
                        .json(body)
                        .map_err(|e| FarmError::Http(format!("Encoding body: {}", e)))?;
                    request.send().await
                }
                None => builder.send().await,
            };
            let response =
                sent.map_err(|e| FarmError::Http(format!("{} {} failed: {}", method, url, e)))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| FarmError::Http(format!("Reading response body: {}", e)))?;

            log::debug!("{} {} -> {}", method, url, status);
            Ok(HttpResponse { status, body })
        }
    }

    /// Token store in `window.localStorage`
    #[derive(Debug, Clone)]
    pub struct LocalStorageTokenStore {
        key: String,
    }

    impl LocalStorageTokenStore {
        pub fn new(key: &str) -> Self {
            Self {
                key: key.to_string(),
            }
        }

        fn storage() -> farm_client::Result<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| FarmError::Storage("local storage unavailable".to_string()))
        }
    }

    impl TokenStore for LocalStorageTokenStore {
        fn load(&self) -> Option<String> {
            Self::storage().ok()?.get_item(&self.key).ok().flatten()
        }

        fn save(&self, token: &str) -> farm_client::Result<()> {
            Self::storage()?
                .set_item(&self.key, token)
                .map_err(|e| FarmError::Storage(format!("{:?}", e)))
        }

        fn clear(&self) -> farm_client::Result<()> {
            Self::storage()?
                .remove_item(&self.key)
                .map_err(|e| FarmError::Storage(format!("{:?}", e)))
        }
    }
}

#[cfg(not(feature = "csr"))]
mod inert {
    use async_trait::async_trait;
    use farm_client::{FarmError, HttpClient, HttpRequest, HttpResponse};

    /// Transport that always fails; there is no fetch outside the browser
    #[derive(Debug, Default)]
    pub struct OfflineHttpClient;

    #[async_trait(?Send)]
    impl HttpClient for OfflineHttpClient {
        async fn send(&self, request: HttpRequest) -> farm_client::Result<HttpResponse> {
            Err(FarmError::Http(format!(
                "{} {}: no browser transport",
                request.method, request.url
            )))
        }
    }
}
