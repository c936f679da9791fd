#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::form::ValidationError;
use crate::models::Category;
use crate::storage::MemoryStorage;

fn new_app() -> App<MemoryStorage> {
    App::new(TransactionStore::load(MemoryStorage::new()).unwrap())
}

fn add(app: &mut App<MemoryStorage>, name: &str, amount: &str, kind: &str, category: &str, date: &str) {
    for (field, value) in [
        (Field::Name, name),
        (Field::Amount, amount),
        (Field::Type, kind),
        (Field::Category, category),
        (Field::Date, date),
    ] {
        app.dispatch(Intent::ChangeField(field, value.into())).unwrap();
    }
    app.dispatch(Intent::Submit).unwrap();
}

fn names(list: &[Transaction]) -> Vec<&str> {
    list.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_submit_adds_and_reports() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");

    assert_eq!(app.store.transactions().len(), 1);
    assert_eq!(app.status_message, "Added: Coffee");
    assert!(matches!(app.last_outcome, Some(SubmitOutcome::Created(_))));
}

#[test]
fn test_rejected_submit_reports_reason() {
    let mut app = new_app();
    add(&mut app, "Coffee", "lots", "expense", "food", "");

    assert!(app.store.transactions().is_empty());
    assert_eq!(app.status_message, "Not saved: amount 'lots' is not a number");
    assert_eq!(
        app.last_outcome,
        Some(SubmitOutcome::Rejected(ValidationError::InvalidAmount("lots".into())))
    );
}

#[test]
fn test_filter_and_sort_intents_shape_visible_list() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");
    add(&mut app, "Salary", "50000", "income", "salary", "2024-01-01");
    add(&mut app, "Bus", "40", "expense", "transport", "2024-01-03");

    assert_eq!(names(&app.visible()), vec!["Bus", "Coffee", "Salary"]);

    app.dispatch(Intent::SetFilter(Filter::Expense)).unwrap();
    app.dispatch(Intent::SetSort(Sort::Low)).unwrap();
    assert_eq!(names(&app.visible()), vec!["Coffee", "Bus"]);

    app.dispatch(Intent::SetFilter(Filter::Income)).unwrap();
    assert_eq!(names(&app.visible()), vec!["Salary"]);

    // Canonical order is untouched
    assert_eq!(names(app.store.transactions()), vec!["Coffee", "Salary", "Bus"]);
}

#[test]
fn test_edit_intent_then_submit_updates() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");
    let id = app.store.transactions()[0].id.unwrap();

    app.dispatch(Intent::Edit(id)).unwrap();
    assert_eq!(app.status_message, "Editing: Coffee");
    app.dispatch(Intent::ChangeField(Field::Amount, "200".into())).unwrap();
    app.dispatch(Intent::Submit).unwrap();

    assert_eq!(app.store.transactions().len(), 1);
    assert_eq!(app.store.transactions()[0].amount, dec!(-200));
    assert_eq!(app.totals().expense, dec!(-200));
    assert_eq!(app.form.mode(), FormMode::Create);
}

#[test]
fn test_edit_unknown_id() {
    let mut app = new_app();
    app.dispatch(Intent::Edit(77)).unwrap();
    assert_eq!(app.form.mode(), FormMode::Create);
    assert_eq!(app.status_message, "No transaction with id 77");
}

#[test]
fn test_cancel_edit() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");
    let id = app.store.transactions()[0].id.unwrap();
    app.dispatch(Intent::Edit(id)).unwrap();
    app.dispatch(Intent::CancelEdit).unwrap();
    assert_eq!(app.form.mode(), FormMode::Create);
}

#[test]
fn test_delete_intent() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");
    add(&mut app, "Tea", "60", "expense", "food", "2024-01-03");
    let id = app.store.transactions()[0].id.unwrap();

    app.dispatch(Intent::Edit(id)).unwrap();
    app.dispatch(Intent::Delete(id)).unwrap();
    assert_eq!(names(app.store.transactions()), vec!["Tea"]);
    assert_eq!(app.form.mode(), FormMode::Create);
}

#[test]
fn test_delete_unknown_is_harmless() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");
    let before = app.store.transactions().to_vec();

    app.dispatch(Intent::Delete(-1)).unwrap();
    assert_eq!(app.store.transactions(), before.as_slice());
    assert_eq!(app.status_message, "No transaction with id -1");
}

#[test]
fn test_breakdowns() {
    let mut app = new_app();
    add(&mut app, "Coffee", "150", "expense", "food", "2024-01-02");
    add(&mut app, "Dinner", "350", "expense", "food", "2024-01-02");
    add(&mut app, "Salary", "50000", "income", "salary", "2024-01-01");
    add(&mut app, "Cinema", "400", "expense", "entertainment", "2024-01-05");

    let expense = app.expense_breakdown();
    assert_eq!(expense[0].category, Category::Food);
    assert_eq!(expense[0].value, dec!(500));
    assert_eq!(expense[1].category, Category::Entertainment);

    let income = app.income_breakdown();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].value, dec!(50000));

    let overall = app.overall_breakdown();
    assert_eq!(overall[0].category, Category::Salary);
    assert_eq!(overall.len(), 3);
}
