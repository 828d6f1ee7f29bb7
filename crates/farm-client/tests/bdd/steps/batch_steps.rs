//! BDD steps for the dashboard batch list

use cucumber::{then, when};

use crate::world::{FarmWorld, Shown};

#[when("the dashboard loads")]
async fn dashboard_loads(world: &mut FarmWorld) {
    world.controller().on_page_load("/dashboard.html").await;
}

#[when(expr = "the {string} page loads")]
async fn page_loads(world: &mut FarmWorld, path: String) {
    world.controller().on_page_load(&path).await;
}

#[then(expr = "the batch list shows {int} card(s)")]
fn card_count(world: &mut FarmWorld, count: usize) {
    let cards = world.last_batches().expect("batch list never rendered");
    assert_eq!(cards.len(), count);
}

#[then(expr = "card {int} is {string} of {string} with quantity {string}")]
fn card_reads(world: &mut FarmWorld, index: usize, title: String, animal: String, quantity: String) {
    let cards = world.last_batches().expect("batch list never rendered");
    let card = &cards[index - 1];
    assert_eq!(card.title, title);
    assert_eq!(card.animal, animal);
    assert_eq!(card.quantity, quantity);
}

#[then(expr = "card {int} offers {string}, {string} and {string} for batch {int}")]
fn card_actions(
    world: &mut FarmWorld,
    index: usize,
    first: String,
    second: String,
    third: String,
    batch_id: u64,
) {
    let cards = world.last_batches().expect("batch list never rendered");
    let card = &cards[index - 1];
    assert_eq!(card.actions.map(|a| a.label), [first.as_str(), second.as_str(), third.as_str()]);
    assert!(card.actions.iter().all(|a| a.batch_id == batch_id));
}

#[then(expr = "the batch list reports {string}")]
fn batch_error(world: &mut FarmWorld, text: String) {
    let shown = world.screen.shown();
    assert_eq!(shown.last(), Some(&Shown::BatchError(text)));
}

#[then("nothing is shown")]
fn nothing_shown(world: &mut FarmWorld) {
    assert!(world.screen.shown().is_empty(), "{:?}", world.screen.shown());
}
