//! BDD test world for the farm client

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use cucumber::World;

use farm_client::{
    BatchCard, Config, Controller, FarmError, HttpClient, HttpRequest, HttpResponse,
    MemoryTokenStore, Message, MessageSlot, Page, RecordKind, View,
};

/// Scripted farm API: canned responses keyed by method and path
#[derive(Debug, Default)]
pub struct FakeServer {
    responses: RefCell<HashMap<String, HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
    offline: Cell<bool>,
}

impl FakeServer {
    pub fn answer(&self, method: &str, path: &str, status: u16, body: &str) {
        self.responses.borrow_mut().insert(
            format!("{} {}", method, path),
            HttpResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn go_offline(&self) {
        self.offline.set(true);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeServer {
    async fn send(&self, request: HttpRequest) -> farm_client::Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        if self.offline.get() {
            return Err(FarmError::Http("connection refused".to_string()));
        }

        let path = request
            .url
            .strip_prefix(&Config::default().api.base_url)
            .unwrap_or(&request.url)
            .to_string();
        let key = format!("{} {}", request.method, path);
        Ok(self
            .responses
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| HttpResponse {
                status: 404,
                body: r#"{"detail": "Not found."}"#.to_string(),
            }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Message(MessageSlot, Message),
    Alert(String),
    Navigate(Page),
    NavigateAfter(Page, Duration),
    Batches(Vec<BatchCard>),
    BatchError(String),
    Modal(RecordKind),
    ModalsHidden,
}

/// View that keeps everything it was asked to show
#[derive(Debug, Clone, Default)]
pub struct ScreenRecorder {
    shown: Rc<RefCell<Vec<Shown>>>,
}

impl ScreenRecorder {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }

    fn push(&self, item: Shown) {
        self.shown.borrow_mut().push(item);
    }
}

impl View for ScreenRecorder {
    fn show_message(&self, slot: MessageSlot, message: &Message) {
        self.push(Shown::Message(slot, message.clone()));
    }

    fn alert(&self, text: &str) {
        self.push(Shown::Alert(text.to_string()));
    }

    fn navigate(&self, page: Page) {
        self.push(Shown::Navigate(page));
    }

    fn navigate_after(&self, page: Page, delay: Duration) {
        self.push(Shown::NavigateAfter(page, delay));
    }

    fn render_batches(&self, cards: Vec<BatchCard>) {
        self.push(Shown::Batches(cards));
    }

    fn render_batch_error(&self, text: &str) {
        self.push(Shown::BatchError(text.to_string()));
    }

    fn show_modal(&self, kind: RecordKind) {
        self.push(Shown::Modal(kind));
    }

    fn hide_modals(&self) {
        self.push(Shown::ModalsHidden);
    }
}

#[derive(Debug, Default, World)]
pub struct FarmWorld {
    pub server: Rc<FakeServer>,
    pub tokens: Rc<MemoryTokenStore>,
    pub screen: ScreenRecorder,
    controller: Option<Controller>,
}

impl FarmWorld {
    /// The controller under test, created on first use
    pub fn controller(&mut self) -> &Controller {
        let server = Rc::clone(&self.server);
        let tokens = Rc::clone(&self.tokens);
        let screen = self.screen.clone();
        self.controller.get_or_insert_with(|| {
            Controller::new(
                &Config::default(),
                server,
                tokens,
                Rc::new(screen),
            )
        })
    }

    pub fn last_batches(&self) -> Option<Vec<BatchCard>> {
        self.screen.shown().into_iter().rev().find_map(|item| match item {
            Shown::Batches(cards) => Some(cards),
            _ => None,
        })
    }

    pub fn message_in(&self, slot: MessageSlot) -> Option<Message> {
        self.screen.shown().into_iter().rev().find_map(|item| match item {
            Shown::Message(s, message) if s == slot => Some(message),
            _ => None,
        })
    }
}

pub fn page_named(name: &str) -> Page {
    match name {
        "login" => Page::Login,
        "register" => Page::Register,
        "dashboard" => Page::Dashboard,
        other => panic!("unknown page {other}"),
    }
}

pub fn record_kind_named(name: &str) -> RecordKind {
    RecordKind::ALL
        .into_iter()
        .find(|kind| kind.path_segment() == name)
        .unwrap_or_else(|| panic!("unknown record kind {name}"))
}
