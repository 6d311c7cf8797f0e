use serde::{Deserialize, Serialize};

/// Request to convert a quote into a confirmed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertQuoteRequest {
    /// ID of the quote to convert
    #[serde(rename = "quoteId")]
    pub quote_id: String,

    /// Agreed price, when it differs from the quoted estimate
    #[serde(rename = "agreedPrice")]
    pub agreed_price: Option<f64>,

    /// Confirmed event date, when it moved during negotiation
    #[serde(rename = "eventDate")]
    pub event_date: Option<String>,

    /// Confirmed venue
    pub venue: Option<String>,

    /// Allow converting quotes that are still New/Sent
    #[serde(default)]
    pub force: bool,
}
