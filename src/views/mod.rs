//! Read-only projections over the transaction list: filtering, ordering,
//! per-category aggregates and headline totals. Nothing here mutates its
//! input.

use rust_decimal::Decimal;

use crate::models::{Category, Transaction};

/// Direction selector for the list and for category aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Filter {
    #[default]
    All,
    Income,
    Expense,
}

impl Filter {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Filter] {
        &[Self::All, Self::Income, Self::Expense]
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => txn.is_income(),
            Self::Expense => txn.is_expense(),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Sort {
    #[default]
    Newest,
    Oldest,
    High,
    Low,
}

impl Sort {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::High => "high",
            Self::Low => "low",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Sort] {
        &[Self::Newest, Self::Oldest, Self::High, Self::Low]
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One slice of a category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: Category,
    pub(crate) value: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Totals {
    pub(crate) balance: Decimal,
    pub(crate) income: Decimal,
    /// Sum of negative amounts, so never positive.
    pub(crate) expense: Decimal,
}

pub(crate) fn filtered(list: &[Transaction], filter: Filter) -> Vec<Transaction> {
    list.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Stable: records that compare equal keep their input order.
pub(crate) fn sorted(list: &[Transaction], sort: Sort) -> Vec<Transaction> {
    let mut out = list.to_vec();
    match sort {
        Sort::Newest => out.sort_by(|a, b| b.date.cmp(&a.date)),
        Sort::Oldest => out.sort_by(|a, b| a.date.cmp(&b.date)),
        Sort::High => out.sort_by(|a, b| b.amount.cmp(&a.amount)),
        Sort::Low => out.sort_by(|a, b| a.amount.cmp(&b.amount)),
    }
    out
}

/// Sum of `|amount|` per category over entries matching `filter`, largest
/// first. Equal values keep the order in which their category first appeared.
pub(crate) fn category_totals(list: &[Transaction], filter: Filter) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for txn in list.iter().filter(|t| filter.matches(t)) {
        match out.iter_mut().find(|c| c.category == txn.category) {
            Some(slot) => slot.value = slot.value.saturating_add(txn.abs_amount()),
            None => out.push(CategoryTotal {
                category: txn.category,
                value: txn.abs_amount(),
            }),
        }
    }
    out.sort_by(|a, b| b.value.cmp(&a.value));
    out
}

/// Sums saturate at the `Decimal` bounds instead of overflowing.
pub(crate) fn totals(list: &[Transaction]) -> Totals {
    list.iter().fold(Totals::default(), |mut acc, txn| {
        acc.balance = acc.balance.saturating_add(txn.amount);
        if txn.is_income() {
            acc.income = acc.income.saturating_add(txn.amount);
        } else if txn.is_expense() {
            acc.expense = acc.expense.saturating_add(txn.amount);
        }
        acc
    })
}

/// `value` as a percentage of `total`, rounded to one decimal place.
/// A zero total yields zero.
pub(crate) fn share(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (value / total * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Sum of the values in a breakdown.
pub(crate) fn breakdown_total(breakdown: &[CategoryTotal]) -> Decimal {
    breakdown
        .iter()
        .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.value))
}
