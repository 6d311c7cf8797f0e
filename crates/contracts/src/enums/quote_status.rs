use serde::{Deserialize, Serialize};

/// Lifecycle of a client's service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    New,
    Sent,
    Accepted,
    Rejected,
    /// Converted into a confirmed event (u501)
    Converted,
}

impl QuoteStatus {
    pub fn code(&self) -> &'static str {
        match self {
            QuoteStatus::New => "new",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Converted => "converted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(QuoteStatus::New),
            "sent" => Some(QuoteStatus::Sent),
            "accepted" => Some(QuoteStatus::Accepted),
            "rejected" => Some(QuoteStatus::Rejected),
            "converted" => Some(QuoteStatus::Converted),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::New => "New",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
            QuoteStatus::Converted => "Converted",
        }
    }

    /// Terminal statuses can never be converted into an event
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuoteStatus::Rejected | QuoteStatus::Converted)
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
