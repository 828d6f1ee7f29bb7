//! BDD steps for the record modals and their submissions

use cucumber::{then, when};
use farm_client::{ExpenseForm, FeedingForm, MortalityForm};

use crate::world::{record_kind_named, FarmWorld, Shown};

#[when(expr = "I open the {word} form for batch {int}")]
fn open_form(world: &mut FarmWorld, kind: String, batch_id: u64) {
    world
        .controller()
        .open_modal(record_kind_named(&kind), batch_id);
}

#[when("I close the forms")]
fn close_forms(world: &mut FarmWorld) {
    world.controller().close_modals();
}

#[when(expr = "I submit feeding with {string} bags, amount {string} and note {string}")]
async fn submit_feeding(world: &mut FarmWorld, bags: String, amount: String, note: String) {
    let form = FeedingForm { bags, amount, note };
    world.controller().submit_feeding(&form).await;
}

#[when(expr = "I submit an expense {string} costing {string}")]
async fn submit_expense(world: &mut FarmWorld, description: String, amount: String) {
    let form = ExpenseForm {
        description,
        amount,
    };
    world.controller().submit_expense(&form).await;
}

#[when(expr = "I report {string} deaths")]
async fn report_deaths(world: &mut FarmWorld, count: String) {
    let form = MortalityForm {
        count,
        reason: String::new(),
    };
    world.controller().submit_mortality(&form).await;
}

#[when(expr = "I report {string} deaths caused by {string}")]
async fn report_deaths_with_reason(world: &mut FarmWorld, count: String, reason: String) {
    let form = MortalityForm { count, reason };
    world.controller().submit_mortality(&form).await;
}

#[then(expr = "the {word} form is shown")]
fn form_shown(world: &mut FarmWorld, kind: String) {
    let kind = record_kind_named(&kind);
    assert_eq!(world.screen.shown().last(), Some(&Shown::Modal(kind)));
}

#[then(expr = "the selected batch is {int}")]
fn selected_batch(world: &mut FarmWorld, batch_id: u64) {
    assert_eq!(world.controller().session().active_batch(), Some(batch_id));
}

#[then(expr = "I see the alert {string}")]
fn alert_shown(world: &mut FarmWorld, text: String) {
    assert!(
        world.screen.shown().contains(&Shown::Alert(text)),
        "{:?}",
        world.screen.shown()
    );
}

#[then("no alert is shown")]
fn no_alert(world: &mut FarmWorld) {
    let alerted = world
        .screen
        .shown()
        .into_iter()
        .any(|item| matches!(item, Shown::Alert(_)));
    assert!(!alerted, "{:?}", world.screen.shown());
}

#[then("the forms are closed")]
fn forms_closed(world: &mut FarmWorld) {
    assert!(world.screen.shown().contains(&Shown::ModalsHidden));
}
