//! Main App component and the context shared with every page

use std::future::Future;
use std::rc::Rc;

use farm_client::{Config, Controller, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::auth::{LoginPage, RegisterPage};
use crate::components::dashboard::DashboardPage;
use crate::view::SignalView;

/// Controller and view signals, provided as context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    pub view: SignalView,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let view = SignalView::new();
        let controller = Controller::new(
            config,
            browser::http_client(),
            browser::token_store(&config.session),
            Rc::new(view),
        );
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            view,
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Run an async controller handler on the local executor
    pub fn spawn<F, Fut>(&self, handler: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(handler(self.controller()));
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let app = AppContext::new(&Config::default());
    provide_context(app);

    let path = browser::current_path();
    let page = Page::from_path(&path).unwrap_or(Page::Login);
    log::debug!("Rendering {} for {}", page, path);

    Effect::new(move |_| {
        let path = path.clone();
        app.spawn(move |controller| async move { controller.on_page_load(&path).await });
    });

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            {match page {
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Register => view! { <RegisterPage /> }.into_any(),
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
            }}
        </main>
    }
}
