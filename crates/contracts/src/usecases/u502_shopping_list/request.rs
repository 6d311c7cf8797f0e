use serde::{Deserialize, Serialize};

/// One cocktail picked for the event, with its share of total servings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionInput {
    /// ID of the cocktail (a007_cocktail)
    #[serde(rename = "cocktailId")]
    pub cocktail_id: String,

    /// Share of total servings, in percent. All shares must sum to 100.
    pub percent: f64,
}

/// Request for the shopping-list calculator.
///
/// Either references an event (guest count and selections are taken from it)
/// or carries the parameters inline for an ad-hoc calculation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShoppingListRequest {
    /// Compute for a stored event (a003_event); inline fields below override
    /// nothing when this is set
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,

    #[serde(rename = "guestCount")]
    pub guest_count: Option<i32>,

    /// Average servings per guest; defaults to 2.5
    #[serde(rename = "drinksPerGuest")]
    pub drinks_per_guest: Option<f64>,

    /// Safety margin in percent on top of the computed demand; defaults to 10
    #[serde(rename = "safetyMarginPercent")]
    pub safety_margin_percent: Option<f64>,

    pub selections: Option<Vec<SelectionInput>>,
}

impl ShoppingListRequest {
    pub const DEFAULT_DRINKS_PER_GUEST: f64 = 2.5;
    pub const DEFAULT_SAFETY_MARGIN_PERCENT: f64 = 10.0;

    pub fn drinks_per_guest_or_default(&self) -> f64 {
        self.drinks_per_guest
            .unwrap_or(Self::DEFAULT_DRINKS_PER_GUEST)
    }

    pub fn safety_margin_or_default(&self) -> f64 {
        self.safety_margin_percent
            .unwrap_or(Self::DEFAULT_SAFETY_MARGIN_PERCENT)
    }
}
