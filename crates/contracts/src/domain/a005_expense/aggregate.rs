use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::ExpenseCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ExpenseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ExpenseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Money spent, optionally tied to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(flatten)]
    pub base: BaseAggregate<ExpenseId>,

    /// UUID of the related event, if any (a003_event)
    #[serde(rename = "eventRef")]
    pub event_ref: Option<String>,

    pub category: ExpenseCategory,

    pub amount: f64,

    /// Expense date (YYYY-MM-DD)
    #[serde(rename = "expenseDate")]
    pub expense_date: String,

    #[serde(default)]
    pub supplier: String,
}

impl Expense {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        event_ref: Option<String>,
        category: ExpenseCategory,
        amount: f64,
        expense_date: String,
        supplier: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ExpenseId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            event_ref,
            category,
            amount,
            expense_date,
            supplier,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn expense_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.expense_date, "%Y-%m-%d").ok()
    }

    pub fn update(&mut self, dto: &ExpenseDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.event_ref = dto.event_ref.clone();
        if let Some(category) = dto.category {
            self.category = category;
        }
        self.amount = dto.amount;
        self.expense_date = dto.expense_date.clone();
        self.supplier = dto.supplier.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.amount <= 0.0 {
            return Err(format!("Amount must be positive: {}", self.amount));
        }
        if self.expense_date_parsed().is_none() {
            return Err(format!("Invalid expense date: {}", self.expense_date));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Expense {
    type Id = ExpenseId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "expense"
    }

    fn element_name() -> &'static str {
        "Expense"
    }

    fn list_name() -> &'static str {
        "Expenses"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpenseDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "eventRef")]
    pub event_ref: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub amount: f64,
    #[serde(rename = "expenseDate")]
    pub expense_date: String,
    pub supplier: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_rejected() {
        let expense = Expense::new_for_insert(
            "EXP-001".into(),
            "Glassware restock".into(),
            None,
            ExpenseCategory::Equipment,
            -10.0,
            "2030-03-14".into(),
            "BarDepot".into(),
            None,
        );
        assert!(expense.validate().is_err());
    }
}
