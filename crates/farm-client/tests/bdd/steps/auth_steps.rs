//! BDD steps for registration, login and logout

use std::time::Duration;

use cucumber::{then, when};
use farm_client::{LoginForm, MessageSlot, RegisterForm, Tone};

use crate::world::{page_named, FarmWorld, Shown};

#[when(expr = "I register as {string} with email {string} and password {string}")]
async fn register(world: &mut FarmWorld, username: String, email: String, password: String) {
    let form = RegisterForm {
        email,
        username,
        password,
    };
    world.controller().register_user(&form).await;
}

#[when(expr = "I log in as {string} with password {string}")]
async fn log_in(world: &mut FarmWorld, username: String, password: String) {
    let form = LoginForm { username, password };
    world.controller().login(&form).await;
}

#[when("I log out")]
fn log_out(world: &mut FarmWorld) {
    world.controller().logout();
}

#[then(expr = "the register form shows the error {string}")]
fn register_error(world: &mut FarmWorld, text: String) {
    let message = world
        .message_in(MessageSlot::Register)
        .expect("no register message");
    assert_eq!(message.text, text);
    assert_eq!(message.tone, Tone::Error);
}

#[then(expr = "the register form shows the success {string}")]
fn register_success(world: &mut FarmWorld, text: String) {
    let message = world
        .message_in(MessageSlot::Register)
        .expect("no register message");
    assert_eq!(message.text, text);
    assert_eq!(message.tone, Tone::Success);
}

#[then(expr = "the login form shows the error {string}")]
fn login_error(world: &mut FarmWorld, text: String) {
    let message = world
        .message_in(MessageSlot::Login)
        .expect("no login message");
    assert_eq!(message.text, text);
    assert_eq!(message.tone, Tone::Error);
}

#[then(expr = "I am sent to the {word} page")]
fn sent_to(world: &mut FarmWorld, page: String) {
    let page = page_named(&page);
    assert!(
        world.screen.shown().contains(&Shown::Navigate(page)),
        "{:?}",
        world.screen.shown()
    );
}

#[then(expr = "I am sent to the {word} page after {int} ms")]
fn sent_to_after(world: &mut FarmWorld, page: String, millis: u64) {
    let expected = Shown::NavigateAfter(page_named(&page), Duration::from_millis(millis));
    assert!(
        world.screen.shown().contains(&expected),
        "{:?}",
        world.screen.shown()
    );
}

#[then("I stay on the current page")]
fn stay(world: &mut FarmWorld) {
    let moved = world
        .screen
        .shown()
        .into_iter()
        .any(|item| matches!(item, Shown::Navigate(_) | Shown::NavigateAfter(..)));
    assert!(!moved, "{:?}", world.screen.shown());
}
