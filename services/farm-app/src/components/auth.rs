//! Login and registration pages

use farm_client::{LoginForm, Page, RegisterForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::app::use_app;
use crate::components::status_message::StatusMessage;

const FIELD: &str = "display: block; width: 100%; margin-bottom: 0.5rem; padding: 0.4rem;";

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        app.spawn(move |controller| async move { controller.login(&form).await });
    };

    view! {
        <section style="max-width: 360px;">
            <h1>"Login"</h1>
            <form on:submit=on_submit>
                <input type="text" placeholder="Username" style=FIELD bind:value=username />
                <input type="password" placeholder="Password" style=FIELD bind:value=password />
                <button type="submit">"Login"</button>
            </form>
            <StatusMessage message=app.view.login_message />
            <p>"No account yet? " <a href=Page::Register.path()>"Register"</a></p>
        </section>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app = use_app();
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        app.spawn(move |controller| async move { controller.register_user(&form).await });
    };

    view! {
        <section style="max-width: 360px;">
            <h1>"Register"</h1>
            <form on:submit=on_submit>
                <input type="email" placeholder="Email" style=FIELD bind:value=email />
                <input type="text" placeholder="Username" style=FIELD bind:value=username />
                <input type="password" placeholder="Password" style=FIELD bind:value=password />
                <button type="submit">"Register"</button>
            </form>
            <StatusMessage message=app.view.register_message />
            <p>"Already registered? " <a href=Page::Login.path()>"Login"</a></p>
        </section>
    }
}
