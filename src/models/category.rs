use serde::{Deserialize, Serialize};

/// Closed set of spending/earning categories.
///
/// Unknown keys found in storage deserialize to [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Salary,
    Investment,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Bills => "bills",
            Self::Health => "health",
            Self::Salary => "salary",
            Self::Investment => "investment",
            Self::Other => "other",
        }
    }

    /// Lookup by key, case-insensitive. Anything unrecognised falls back to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "shopping" => Self::Shopping,
            "entertainment" => Self::Entertainment,
            "bills" => Self::Bills,
            "health" => Self::Health,
            "salary" => Self::Salary,
            "investment" => Self::Investment,
            _ => Self::Other,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Entertainment,
            Self::Bills,
            Self::Health,
            Self::Salary,
            Self::Investment,
            Self::Other,
        ]
    }

    /// Human-readable label used in pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Transport => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills & Utilities",
            Self::Health => "Healthcare",
            Self::Salary => "Salary",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Shopping => "🛍️",
            Self::Entertainment => "🎬",
            Self::Bills => "📄",
            Self::Health => "💊",
            Self::Salary => "💼",
            Self::Investment => "📈",
            Self::Other => "📦",
        }
    }

    /// Chart color as a `#RRGGBB` hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#FF6B6B",
            Self::Transport => "#4ECDC4",
            Self::Shopping => "#45B7D1",
            Self::Entertainment => "#FFA07A",
            Self::Bills => "#98D8C8",
            Self::Health => "#F7DC6F",
            Self::Salary => "#52B788",
            Self::Investment => "#9B59B6",
            Self::Other => "#95A5A6",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
