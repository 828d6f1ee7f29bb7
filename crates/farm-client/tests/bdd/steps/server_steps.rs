//! BDD steps that script the API and inspect what was sent

use cucumber::{given, then};
use farm_client::{Method, TokenStore};
use serde_json::Value;

use crate::world::FarmWorld;

#[given(expr = "the server answers {word} {string} with status {int} and body {string}")]
fn server_answers(world: &mut FarmWorld, method: String, path: String, status: u16, body: String) {
    world.server.answer(&method, &path, status, &body);
}

#[given("the server is unreachable")]
fn server_unreachable(world: &mut FarmWorld) {
    world.server.go_offline();
}

#[given(expr = "a stored access token {string}")]
fn stored_token(world: &mut FarmWorld, token: String) {
    world.tokens.save(&token).unwrap();
}

#[given("no stored access token")]
fn no_stored_token(world: &mut FarmWorld) {
    world.tokens.clear().unwrap();
}

#[then(expr = "the stored access token is {string}")]
fn token_is(world: &mut FarmWorld, token: String) {
    assert_eq!(world.tokens.load(), Some(token));
}

#[then("no access token is stored")]
fn token_absent(world: &mut FarmWorld) {
    assert_eq!(world.tokens.load(), None);
}

#[then("no request was sent")]
fn no_request(world: &mut FarmWorld) {
    assert!(world.server.requests().is_empty(), "{:?}", world.server.requests());
}

#[then(expr = "{int} request(s) was/were sent")]
fn request_count(world: &mut FarmWorld, count: usize) {
    assert_eq!(world.server.requests().len(), count);
}

#[then(expr = "a {word} request was sent to {string} with body {string}")]
fn request_with_body(world: &mut FarmWorld, method: String, path: String, body: String) {
    let expected: Value = serde_json::from_str(&body).unwrap();
    let requests = world.server.requests();
    let found = requests.iter().any(|req| {
        req.method.to_string() == method
            && req.url.ends_with(&path)
            && req.body.as_ref() == Some(&expected)
    });
    assert!(found, "no {method} {path} with {body} in {requests:?}");
}

#[then(expr = "every request to {string} carried the bearer token {string}")]
fn bearer_on(world: &mut FarmWorld, path: String, token: String) {
    let requests: Vec<_> = world
        .server
        .requests()
        .into_iter()
        .filter(|req| req.url.ends_with(&path))
        .collect();
    assert!(!requests.is_empty(), "no request to {path}");
    for req in requests {
        assert_eq!(req.bearer.as_deref(), Some(token.as_str()));
    }
}

#[then(expr = "the last request was a GET to {string}")]
fn last_get(world: &mut FarmWorld, path: String) {
    let requests = world.server.requests();
    let last = requests.last().expect("no request sent");
    assert_eq!(last.method, Method::Get);
    assert!(last.url.ends_with(&path), "{}", last.url);
}
