use serde::{Deserialize, Serialize};

/// Kind of commercial document issued against an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Proposal,
    Contract,
}

impl DocumentKind {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Proposal => "proposal",
            DocumentKind::Contract => "contract",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "proposal" => Some(DocumentKind::Proposal),
            "contract" => Some(DocumentKind::Contract),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Proposal => "Proposal",
            DocumentKind::Contract => "Contract",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Negotiation state of a commercial document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Draft,
    Sent,
    Signed,
    Declined,
}

impl DocumentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Sent => "sent",
            DocumentStatus::Signed => "signed",
            DocumentStatus::Declined => "declined",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(DocumentStatus::Draft),
            "sent" => Some(DocumentStatus::Sent),
            "signed" => Some(DocumentStatus::Signed),
            "declined" => Some(DocumentStatus::Declined),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Sent => "Sent",
            DocumentStatus::Signed => "Signed",
            DocumentStatus::Declined => "Declined",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
