use serde::{Deserialize, Serialize};

/// Request for the monthly finance summary dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinanceSummaryRequest {
    pub year: i32,
    pub month: u32,
}

/// Expense total for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAmount {
    /// Category code (e.g. "ingredients")
    pub category: String,
    /// Display label
    pub label: String,
    pub amount: f64,
}

/// Monthly KPI response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceSummaryResponse {
    /// Period in format "YYYY-MM"
    pub period: String,

    /// Sum of payments received in the month
    pub revenue: f64,

    /// Sum of expenses in the month
    #[serde(rename = "expensesTotal")]
    pub expenses_total: f64,

    /// revenue minus expenses
    pub profit: f64,

    /// Non-cancelled events dated in the month
    #[serde(rename = "eventsCount")]
    pub events_count: i64,

    /// Agreed price minus received payments, over non-cancelled events up to
    /// the end of the month
    #[serde(rename = "outstandingTotal")]
    pub outstanding_total: f64,

    /// Per-category expense breakdown, categories with no spend omitted
    #[serde(rename = "expenseBreakdown")]
    pub expense_breakdown: Vec<CategoryAmount>,
}
