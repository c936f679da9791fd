use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    #[default]
    Expense,
    Income,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }

    /// Direction implied by the sign of `amount`; `None` for zero.
    pub fn from_amount(amount: Decimal) -> Option<Self> {
        if amount > Decimal::ZERO {
            Some(Self::Income)
        } else if amount < Decimal::ZERO {
            Some(Self::Expense)
        } else {
            None
        }
    }

    /// Apply this direction to a magnitude.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Expense => -amount.abs(),
            Self::Income => amount.abs(),
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Written as a plain JSON number carrying every stored digit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(rename = "type", default)]
    pub kind: TxnType,
    #[serde(default)]
    pub category: Category,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
}

impl Transaction {
    /// Build an unsaved record. `kind` follows the sign of `amount`.
    pub fn new(name: String, amount: Decimal, category: Category, date: NaiveDate) -> Self {
        Self {
            id: None,
            name,
            description: String::new(),
            amount,
            kind: TxnType::from_amount(amount).unwrap_or_default(),
            category,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Re-derive `kind` from the sign of `amount`. Zero amounts keep their label.
    pub fn reconcile_kind(&mut self) {
        if let Some(kind) = TxnType::from_amount(self.amount) {
            self.kind = kind;
        }
    }
}

/// Parse a stored or user-entered date.
///
/// Accepts ISO `YYYY-MM-DD`, US-style `M/D/YYYY` and RFC 3339 timestamps.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    ["%Y-%m-%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognised date: {raw}")))
    }
}
