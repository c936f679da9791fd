use anyhow::Result;

use crate::form::{Field, FormMode, SubmitOutcome, TransactionForm};
use crate::models::Transaction;
use crate::storage::Storage;
use crate::store::TransactionStore;
use crate::views::{self, CategoryTotal, Filter, Sort, Totals};

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Intent {
    ChangeField(Field, String),
    Submit,
    Edit(i64),
    CancelEdit,
    Delete(i64),
    SetFilter(Filter),
    SetSort(Sort),
}

/// Session state: the store plus everything the presentation needs to
/// render it. Business data lives only in the store.
pub(crate) struct App<S: Storage> {
    pub(crate) store: TransactionStore<S>,
    pub(crate) form: TransactionForm,
    pub(crate) filter: Filter,
    pub(crate) sort: Sort,
    pub(crate) status_message: String,
    pub(crate) last_outcome: Option<SubmitOutcome>,
}

impl<S: Storage> App<S> {
    pub(crate) fn new(store: TransactionStore<S>) -> Self {
        Self {
            store,
            form: TransactionForm::new(),
            filter: Filter::default(),
            sort: Sort::default(),
            status_message: String::new(),
            last_outcome: None,
        }
    }

    pub(crate) fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::ChangeField(field, value) => self.form.on_field_change(field, &value),
            Intent::Submit => {
                let outcome = self.form.on_submit(&mut self.store)?;
                self.set_status(describe(&outcome));
                self.last_outcome = Some(outcome);
            }
            Intent::Edit(id) => match self.store.get(id) {
                Some(txn) => {
                    self.form.begin_edit(txn);
                    let msg = format!("Editing: {}", self.form.fields().name);
                    self.set_status(msg);
                }
                None => self.set_status(format!("No transaction with id {id}")),
            },
            Intent::CancelEdit => {
                self.form.reset();
                self.set_status("Edit cancelled");
            }
            Intent::Delete(id) => {
                if self.form.mode() == FormMode::Edit(id) {
                    self.form.reset();
                }
                if self.store.remove(id)? {
                    self.set_status(format!("Deleted transaction {id}"));
                } else {
                    self.set_status(format!("No transaction with id {id}"));
                }
            }
            Intent::SetFilter(filter) => self.filter = filter,
            Intent::SetSort(sort) => self.sort = sort,
        }
        Ok(())
    }

    /// The list as currently filtered and ordered.
    pub(crate) fn visible(&self) -> Vec<Transaction> {
        views::sorted(
            &views::filtered(self.store.transactions(), self.filter),
            self.sort,
        )
    }

    pub(crate) fn totals(&self) -> Totals {
        views::totals(self.store.transactions())
    }

    pub(crate) fn expense_breakdown(&self) -> Vec<CategoryTotal> {
        views::category_totals(self.store.transactions(), Filter::Expense)
    }

    pub(crate) fn income_breakdown(&self) -> Vec<CategoryTotal> {
        views::category_totals(self.store.transactions(), Filter::Income)
    }

    pub(crate) fn overall_breakdown(&self) -> Vec<CategoryTotal> {
        views::category_totals(self.store.transactions(), Filter::All)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

fn describe(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Created(txn) => format!("Added: {}", txn.name),
        SubmitOutcome::Updated(txn) => format!("Updated: {}", txn.name),
        SubmitOutcome::Stale(id) => format!("Transaction {id} no longer exists"),
        SubmitOutcome::Rejected(e) => format!("Not saved: {e}"),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
