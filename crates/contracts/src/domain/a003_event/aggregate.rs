use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::EventStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
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

impl AggregateId for EventId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EventId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Line of the event's cocktail selection: which cocktail is served and
/// what share of total servings it takes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CocktailSelection {
    /// UUID of the cocktail (a007_cocktail)
    #[serde(rename = "cocktailRef")]
    pub cocktail_ref: String,

    /// Share of total servings, in percent
    #[serde(rename = "distributionPercent")]
    pub distribution_percent: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A scheduled, priced booking derived from an accepted quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub base: BaseAggregate<EventId>,

    /// UUID of the client (a001_client)
    #[serde(rename = "clientRef")]
    pub client_ref: String,

    /// UUID of the source quote, when the event came through u501
    #[serde(rename = "quoteRef")]
    pub quote_ref: Option<String>,

    /// Event date (YYYY-MM-DD)
    #[serde(rename = "eventDate")]
    pub event_date: String,

    /// Service start time (HH:MM)
    #[serde(rename = "startTime", default)]
    pub start_time: String,

    /// Service end time (HH:MM)
    #[serde(rename = "endTime", default)]
    pub end_time: String,

    #[serde(default)]
    pub venue: String,

    #[serde(rename = "guestCount")]
    pub guest_count: i32,

    /// Agreed price for the booking
    pub price: f64,

    pub status: EventStatus,

    /// JSON array of cocktail selection lines
    #[serde(rename = "linesJson")]
    pub lines_json: Option<String>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        client_ref: String,
        quote_ref: Option<String>,
        event_date: String,
        venue: String,
        guest_count: i32,
        price: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(EventId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            client_ref,
            quote_ref,
            event_date,
            start_time: String::new(),
            end_time: String::new(),
            venue,
            guest_count,
            price,
            status: EventStatus::Scheduled,
            lines_json: None,
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

    /// Deserialize the cocktail selection lines
    pub fn parse_selections(&self) -> Vec<CocktailSelection> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn set_selections(&mut self, selections: &[CocktailSelection]) {
        self.lines_json = if selections.is_empty() {
            None
        } else {
            serde_json::to_string(selections).ok()
        };
    }

    pub fn update(&mut self, dto: &EventDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.client_ref = dto.client_ref.clone();
        self.quote_ref = dto.quote_ref.clone();
        self.event_date = dto.event_date.clone();
        self.start_time = dto.start_time.clone().unwrap_or_default();
        self.end_time = dto.end_time.clone().unwrap_or_default();
        self.venue = dto.venue.clone().unwrap_or_default();
        self.guest_count = dto.guest_count;
        self.price = dto.price.unwrap_or_default();
        if let Some(status) = dto.status {
            self.status = status;
        }
        if let Some(selections) = &dto.selections {
            self.set_selections(selections);
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
        if self.price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        if self.event_date_parsed().is_none() {
            return Err(format!("Invalid event date: {}", self.event_date));
        }
        for line in self.parse_selections() {
            if line.distribution_percent <= 0.0 || line.distribution_percent > 100.0 {
                return Err(format!(
                    "Distribution percent out of range: {}",
                    line.distribution_percent
                ));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Event {
    type Id = EventId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "event"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "clientRef")]
    pub client_ref: String,
    #[serde(rename = "quoteRef")]
    pub quote_ref: Option<String>,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
    pub venue: Option<String>,
    #[serde(rename = "guestCount")]
    pub guest_count: i32,
    pub price: Option<f64>,
    pub status: Option<EventStatus>,
    pub selections: Option<Vec<CocktailSelection>>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event::new_for_insert(
            "EVT-001".into(),
            "Corporate cocktail night".into(),
            Uuid::new_v4().to_string(),
            None,
            "2030-09-20".into(),
            "Rooftop 21".into(),
            60,
            3200.0,
            None,
        )
    }

    #[test]
    fn selections_round_trip_through_lines_json() {
        let mut event = sample();
        let selections = vec![
            CocktailSelection {
                cocktail_ref: Uuid::new_v4().to_string(),
                distribution_percent: 60.0,
            },
            CocktailSelection {
                cocktail_ref: Uuid::new_v4().to_string(),
                distribution_percent: 40.0,
            },
        ];
        event.set_selections(&selections);
        assert_eq!(event.parse_selections(), selections);
    }

    #[test]
    fn empty_selections_clear_lines_json() {
        let mut event = sample();
        event.set_selections(&[]);
        assert!(event.lines_json.is_none());
        assert!(event.parse_selections().is_empty());
    }

    #[test]
    fn out_of_range_percent_rejected() {
        let mut event = sample();
        event.set_selections(&[CocktailSelection {
            cocktail_ref: Uuid::new_v4().to_string(),
            distribution_percent: 120.0,
        }]);
        assert!(event.validate().is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let mut event = sample();
        event.price = -1.0;
        assert!(event.validate().is_err());
    }
}
