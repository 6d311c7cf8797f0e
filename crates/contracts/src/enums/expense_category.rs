use serde::{Deserialize, Serialize};

/// Spending categories used by the finance summary breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Ingredients,
    Equipment,
    Staff,
    Transport,
    Marketing,
    Other,
}

impl ExpenseCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ExpenseCategory::Ingredients => "ingredients",
            ExpenseCategory::Equipment => "equipment",
            ExpenseCategory::Staff => "staff",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Marketing => "marketing",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ingredients" => Some(ExpenseCategory::Ingredients),
            "equipment" => Some(ExpenseCategory::Equipment),
            "staff" => Some(ExpenseCategory::Staff),
            "transport" => Some(ExpenseCategory::Transport),
            "marketing" => Some(ExpenseCategory::Marketing),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExpenseCategory::Ingredients => "Ingredients",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Staff => "Staff",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn all() -> Vec<ExpenseCategory> {
        vec![
            ExpenseCategory::Ingredients,
            ExpenseCategory::Equipment,
            ExpenseCategory::Staff,
            ExpenseCategory::Transport,
            ExpenseCategory::Marketing,
            ExpenseCategory::Other,
        ]
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
