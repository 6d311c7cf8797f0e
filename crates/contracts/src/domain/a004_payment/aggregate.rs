use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::PaymentMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub Uuid);

impl PaymentId {
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

impl AggregateId for PaymentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Money received against an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(flatten)]
    pub base: BaseAggregate<PaymentId>,

    /// UUID of the paid event (a003_event)
    #[serde(rename = "eventRef")]
    pub event_ref: String,

    pub amount: f64,

    /// Payment date (YYYY-MM-DD)
    #[serde(rename = "paymentDate")]
    pub payment_date: String,

    pub method: PaymentMethod,
}

impl Payment {
    pub fn new_for_insert(
        code: String,
        description: String,
        event_ref: String,
        amount: f64,
        payment_date: String,
        method: PaymentMethod,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(PaymentId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            event_ref,
            amount,
            payment_date,
            method,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn payment_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.payment_date, "%Y-%m-%d").ok()
    }

    pub fn update(&mut self, dto: &PaymentDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.event_ref = dto.event_ref.clone();
        self.amount = dto.amount;
        self.payment_date = dto.payment_date.clone();
        if let Some(method) = dto.method {
            self.method = method;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.event_ref.trim().is_empty() {
            return Err("Event is required".into());
        }
        if self.amount <= 0.0 {
            return Err(format!("Amount must be positive: {}", self.amount));
        }
        if self.payment_date_parsed().is_none() {
            return Err(format!("Invalid payment date: {}", self.payment_date));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Payment {
    type Id = PaymentId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "payment"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "eventRef")]
    pub event_ref: String,
    pub amount: f64,
    #[serde(rename = "paymentDate")]
    pub payment_date: String,
    pub method: Option<PaymentMethod>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Payment {
        Payment::new_for_insert(
            "PAY-001".into(),
            "Deposit".into(),
            Uuid::new_v4().to_string(),
            1500.0,
            "2030-05-01".into(),
            PaymentMethod::BankTransfer,
            None,
        )
    }

    #[test]
    fn valid_payment_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn zero_amount_rejected() {
        let mut payment = sample();
        payment.amount = 0.0;
        assert!(payment.validate().is_err());
    }

    #[test]
    fn missing_event_rejected() {
        let mut payment = sample();
        payment.event_ref = "".into();
        assert!(payment.validate().is_err());
    }
}
