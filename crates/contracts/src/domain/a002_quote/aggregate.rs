use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::QuoteStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub Uuid);

impl QuoteId {
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

impl AggregateId for QuoteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(QuoteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A client's service request, prior to conversion into a confirmed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(flatten)]
    pub base: BaseAggregate<QuoteId>,

    /// UUID of the requesting client (a001_client)
    #[serde(rename = "clientRef")]
    pub client_ref: String,

    /// Requested event date (YYYY-MM-DD)
    #[serde(rename = "eventDate")]
    pub event_date: String,

    #[serde(default)]
    pub venue: String,

    #[serde(rename = "guestCount")]
    pub guest_count: i32,

    /// Requested service (open bar, cocktail workshop, ...)
    #[serde(rename = "serviceKind", default)]
    pub service_kind: String,

    #[serde(rename = "estimatedPrice", default)]
    pub estimated_price: f64,

    pub status: QuoteStatus,
}

impl Quote {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        client_ref: String,
        event_date: String,
        venue: String,
        guest_count: i32,
        service_kind: String,
        estimated_price: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(QuoteId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            client_ref,
            event_date,
            venue,
            guest_count,
            service_kind,
            estimated_price,
            status: QuoteStatus::New,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn event_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.event_date, "%Y-%m-%d").ok()
    }

    pub fn update(&mut self, dto: &QuoteDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.client_ref = dto.client_ref.clone();
        self.event_date = dto.event_date.clone();
        self.venue = dto.venue.clone().unwrap_or_default();
        self.guest_count = dto.guest_count;
        self.service_kind = dto.service_kind.clone().unwrap_or_default();
        self.estimated_price = dto.estimated_price.unwrap_or_default();
        if let Some(status) = dto.status {
            self.status = status;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.client_ref.trim().is_empty() {
            return Err("Client is required".into());
        }
        if self.guest_count < 1 {
            return Err("Guest count must be at least 1".into());
        }
        if self.event_date_parsed().is_none() {
            return Err(format!("Invalid event date: {}", self.event_date));
        }
        Ok(())
    }

    /// Extra check applied only on creation: a new request cannot be for a
    /// date that already passed
    pub fn validate_new(&self, today: NaiveDate) -> Result<(), String> {
        self.validate()?;
        match self.event_date_parsed() {
            Some(date) if date < today => {
                Err(format!("Event date {} is in the past", self.event_date))
            }
            _ => Ok(()),
        }
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Quote {
    type Id = QuoteId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "quote"
    }

    fn element_name() -> &'static str {
        "Quote"
    }

    fn list_name() -> &'static str {
        "Quotes"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "clientRef")]
    pub client_ref: String,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    pub venue: Option<String>,
    #[serde(rename = "guestCount")]
    pub guest_count: i32,
    #[serde(rename = "serviceKind")]
    pub service_kind: Option<String>,
    #[serde(rename = "estimatedPrice")]
    pub estimated_price: Option<f64>,
    pub status: Option<QuoteStatus>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote::new_for_insert(
            "QTE-001".into(),
            "Wedding reception".into(),
            Uuid::new_v4().to_string(),
            "2030-06-15".into(),
            "Villa Aurora".into(),
            80,
            "open bar".into(),
            4500.0,
            None,
        )
    }

    #[test]
    fn new_quote_starts_as_new() {
        assert_eq!(sample().status, QuoteStatus::New);
    }

    #[test]
    fn zero_guests_rejected() {
        let mut quote = sample();
        quote.guest_count = 0;
        assert!(quote.validate().is_err());
    }

    #[test]
    fn past_date_rejected_on_create() {
        let quote = sample();
        let today = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
        assert!(quote.validate_new(today).is_err());
    }

    #[test]
    fn future_date_accepted_on_create() {
        let quote = sample();
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(quote.validate_new(today).is_ok());
    }

    #[test]
    fn malformed_date_rejected() {
        let mut quote = sample();
        quote.event_date = "15/06/2030".into();
        assert!(quote.validate().is_err());
    }
}
