//! Register, login and logout handlers

use super::Controller;
use crate::api::{RegisterRequest, RegisterResponse, TokenRequest, TokenResponse};
use crate::forms::{LoginForm, RegisterForm};
use crate::io::HttpRequest;
use crate::view::{Message, MessageSlot, Page};

pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required.";
pub const REGISTER_SUCCESS: &str = "Registration successful! Redirecting...";
pub const REGISTER_FAILED: &str = "Registration failed.";
pub const REGISTER_NETWORK_ERROR: &str = "Network error. Try again.";
pub const LOGIN_FIELDS_REQUIRED: &str = "Username and password required";
pub const LOGIN_INVALID: &str = "Invalid login credentials";
pub const LOGIN_NETWORK_ERROR: &str = "Network error";

const CREATED: u16 = 201;

impl Controller {
    /// Create an account, then send the user to the login page
    pub async fn register_user(&self, form: &RegisterForm) {
        if !form.is_complete() {
            self.view.show_message(
                MessageSlot::Register,
                &Message::error(REGISTER_FIELDS_REQUIRED),
            );
            return;
        }

        let message = match self.request_registration(form).await {
            Ok((status, body)) if status == CREATED || body.is_success() => {
                tracing::info!("Registered user '{}'", form.username);
                self.view
                    .show_message(MessageSlot::Register, &Message::success(REGISTER_SUCCESS));
                self.view.navigate_after(Page::Login, self.redirect_delay);
                return;
            }
            Ok((status, body)) => {
                tracing::debug!("Registration rejected with status {}", status);
                body.error_message()
                    .unwrap_or_else(|| REGISTER_FAILED.to_string())
            }
            Err(e) => {
                tracing::warn!("Registration request failed: {}", e);
                REGISTER_NETWORK_ERROR.to_string()
            }
        };
        self.view
            .show_message(MessageSlot::Register, &Message::error(message));
    }

    async fn request_registration(
        &self,
        form: &RegisterForm,
    ) -> crate::Result<(u16, RegisterResponse)> {
        let body = serde_json::to_value(RegisterRequest::from(form))?;
        let response = self
            .http
            .send(HttpRequest::post_json(self.endpoints.register(), body))
            .await?;
        let parsed = response.json::<RegisterResponse>()?;
        Ok((response.status, parsed))
    }

    /// Exchange credentials for an access token and open the dashboard
    pub async fn login(&self, form: &LoginForm) {
        if !form.is_complete() {
            self.view
                .show_message(MessageSlot::Login, &Message::error(LOGIN_FIELDS_REQUIRED));
            return;
        }

        let token = match self.request_token(form).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Login request failed: {}", e);
                self.view
                    .show_message(MessageSlot::Login, &Message::error(LOGIN_NETWORK_ERROR));
                return;
            }
        };

        let Some(access) = token.access_token() else {
            tracing::debug!("Token response for '{}' had no access token", form.username);
            self.view
                .show_message(MessageSlot::Login, &Message::error(LOGIN_INVALID));
            return;
        };

        if let Err(e) = self.session.store_token(access) {
            tracing::warn!("Failed to persist access token: {}", e);
            self.view
                .show_message(MessageSlot::Login, &Message::error(LOGIN_NETWORK_ERROR));
            return;
        }

        tracing::info!("Logged in as '{}'", form.username);
        self.view.navigate(Page::Dashboard);
    }

    async fn request_token(&self, form: &LoginForm) -> crate::Result<TokenResponse> {
        let body = serde_json::to_value(TokenRequest::from(form))?;
        let response = self
            .http
            .send(HttpRequest::post_json(self.endpoints.token(), body))
            .await?;
        tracing::debug!("Token endpoint answered {}", response.status);
        response.json()
    }

    /// Forget the token and return to the login page, whatever was stored
    pub fn logout(&self) {
        if let Err(e) = self.session.clear_token() {
            tracing::warn!("Failed to clear access token: {}", e);
        }
        tracing::info!("Logged out");
        self.view.navigate(Page::Login);
    }
}
