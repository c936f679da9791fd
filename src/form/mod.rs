use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{parse_date, Category, Transaction, TxnType};
use crate::storage::Storage;
use crate::store::TransactionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Name,
    Description,
    Amount,
    Type,
    Category,
    Date,
}

impl Field {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "description" | "desc" => Some(Self::Description),
            "amount" => Some(Self::Amount),
            "type" => Some(Self::Type),
            "category" => Some(Self::Category),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// Raw editor state. `amount` and `date` stay as typed until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormFields {
    pub(crate) id: Option<i64>,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) kind: TxnType,
    pub(crate) category: Category,
    pub(crate) date: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            amount: String::new(),
            kind: TxnType::Expense,
            category: Category::Other,
            date: String::new(),
        }
    }
}

impl FormFields {
    fn from_transaction(txn: &Transaction) -> Self {
        Self {
            id: txn.id,
            name: txn.name.clone(),
            description: txn.description.clone(),
            amount: txn.abs_amount().to_string(),
            kind: txn.kind,
            category: txn.category,
            date: txn.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Largest magnitude the form accepts: 10^15. Sums of any realistic
/// number of such entries stay well inside `Decimal` range.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("amount is required")]
    MissingAmount,
    #[error("amount '{0}' is not a number")]
    InvalidAmount(String),
    #[error("amount must not be zero")]
    ZeroAmount,
    #[error("amount '{0}' is out of range")]
    AmountOutOfRange(String),
    #[error("date '{0}' is not a valid date")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SubmitOutcome {
    Created(Transaction),
    Updated(Transaction),
    /// The record being edited no longer exists; nothing was written.
    Stale(i64),
    /// Validation failed; fields are kept so they can be corrected.
    Rejected(ValidationError),
}

/// Create/edit state machine for a single transaction.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionForm {
    fields: FormFields,
}

impl TransactionForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Load an existing record; the next submit updates it in place.
    pub(crate) fn begin_edit(&mut self, txn: &Transaction) {
        self.fields = FormFields::from_transaction(txn);
    }

    /// Back to an empty create form.
    pub(crate) fn reset(&mut self) {
        self.fields = FormFields::default();
    }

    pub(crate) fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub(crate) fn mode(&self) -> FormMode {
        match self.fields.id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// Replace a single field, leaving the rest untouched.
    pub(crate) fn on_field_change(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.fields.name = value.to_string(),
            Field::Description => self.fields.description = value.to_string(),
            Field::Amount => self.fields.amount = value.to_string(),
            Field::Type => self.fields.kind = TxnType::parse(value),
            Field::Category => self.fields.category = Category::parse(value),
            Field::Date => self.fields.date = value.to_string(),
        }
    }

    /// Turn the current fields into a record with a signed amount.
    /// `today` fills in an empty date.
    pub(crate) fn validate(&self, today: NaiveDate) -> Result<Transaction, ValidationError> {
        let f = &self.fields;

        let name = f.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let raw_amount = f.amount.trim();
        if raw_amount.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = Decimal::from_str(raw_amount)
            .map_err(|_| ValidationError::InvalidAmount(raw_amount.to_string()))?;
        if amount.is_zero() {
            return Err(ValidationError::ZeroAmount);
        }
        if amount.abs() > MAX_AMOUNT {
            return Err(ValidationError::AmountOutOfRange(raw_amount.to_string()));
        }

        let date = if f.date.trim().is_empty() {
            today
        } else {
            parse_date(&f.date).ok_or_else(|| ValidationError::InvalidDate(f.date.clone()))?
        };

        let mut txn = Transaction::new(name.to_string(), f.kind.signed(amount), f.category, date);
        txn.id = f.id;
        txn.description = f.description.trim().to_string();
        Ok(txn)
    }

    pub(crate) fn on_submit<S: Storage>(
        &mut self,
        store: &mut TransactionStore<S>,
    ) -> Result<SubmitOutcome> {
        self.submit_on(store, chrono::Local::now().date_naive())
    }

    /// Validate and hand the record to `store`. On success the form resets
    /// to create mode. Only storage failures are returned as errors.
    pub(crate) fn submit_on<S: Storage>(
        &mut self,
        store: &mut TransactionStore<S>,
        today: NaiveDate,
    ) -> Result<SubmitOutcome> {
        let txn = match self.validate(today) {
            Ok(txn) => txn,
            Err(e) => {
                tracing::debug!(error = %e, "form rejected");
                return Ok(SubmitOutcome::Rejected(e));
            }
        };

        let outcome = match self.mode() {
            FormMode::Create => SubmitOutcome::Created(store.add(txn)?),
            FormMode::Edit(id) => {
                if store.update(id, txn)? {
                    match store.get(id) {
                        Some(saved) => SubmitOutcome::Updated(saved.clone()),
                        None => SubmitOutcome::Stale(id),
                    }
                } else {
                    SubmitOutcome::Stale(id)
                }
            }
        };
        self.reset();
        Ok(outcome)
    }
}
