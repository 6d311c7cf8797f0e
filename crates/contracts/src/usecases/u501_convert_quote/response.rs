use serde::{Deserialize, Serialize};

/// Result of a quote conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertQuoteResponse {
    /// ID of the created event, when conversion succeeded
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,

    /// ID of the source quote
    #[serde(rename = "quoteId")]
    pub quote_id: String,

    pub status: ConvertStatus,

    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConvertStatus {
    Converted,
    Rejected,
}
