use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::{DocumentKind, DocumentStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
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

impl AggregateId for DocumentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DocumentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Commercial document (proposal or contract) issued against an event.
/// Stores the commercial terms; rendering to PDF/Word is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub base: BaseAggregate<DocumentId>,

    pub kind: DocumentKind,

    /// UUID of the event (a003_event)
    #[serde(rename = "eventRef")]
    pub event_ref: String,

    /// UUID of the client (a001_client)
    #[serde(rename = "clientRef")]
    pub client_ref: String,

    /// Issue date (YYYY-MM-DD)
    #[serde(rename = "issueDate")]
    pub issue_date: String,

    #[serde(rename = "totalAmount")]
    pub total_amount: f64,

    /// Commercial terms text the document is generated from
    #[serde(default)]
    pub terms: String,

    pub status: DocumentStatus,
}

impl Document {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        kind: DocumentKind,
        event_ref: String,
        client_ref: String,
        issue_date: String,
        total_amount: f64,
        terms: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(DocumentId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            kind,
            event_ref,
            client_ref,
            issue_date,
            total_amount,
            terms,
            status: DocumentStatus::Draft,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn issue_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.issue_date, "%Y-%m-%d").ok()
    }

    pub fn update(&mut self, dto: &DocumentDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        if let Some(kind) = dto.kind {
            self.kind = kind;
        }
        self.event_ref = dto.event_ref.clone();
        self.client_ref = dto.client_ref.clone();
        self.issue_date = dto.issue_date.clone();
        self.total_amount = dto.total_amount.unwrap_or_default();
        self.terms = dto.terms.clone().unwrap_or_default();
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
        if self.event_ref.trim().is_empty() {
            return Err("Event is required".into());
        }
        if self.client_ref.trim().is_empty() {
            return Err("Client is required".into());
        }
        if self.total_amount < 0.0 {
            return Err("Total amount cannot be negative".into());
        }
        if self.issue_date_parsed().is_none() {
            return Err(format!("Invalid issue date: {}", self.issue_date));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Document {
    type Id = DocumentId;

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
        "a009"
    }

    fn collection_name() -> &'static str {
        "document"
    }

    fn element_name() -> &'static str {
        "Document"
    }

    fn list_name() -> &'static str {
        "Documents"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub kind: Option<DocumentKind>,
    #[serde(rename = "eventRef")]
    pub event_ref: String,
    #[serde(rename = "clientRef")]
    pub client_ref: String,
    #[serde(rename = "issueDate")]
    pub issue_date: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,
    pub terms: Option<String>,
    pub status: Option<DocumentStatus>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_starts_as_draft() {
        let doc = Document::new_for_insert(
            "DOC-001".into(),
            "Proposal for corporate night".into(),
            DocumentKind::Proposal,
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            "2030-08-01".into(),
            3200.0,
            "50% deposit on signature".into(),
            None,
        );
        assert_eq!(doc.status, DocumentStatus::Draft);
        assert!(doc.validate().is_ok());
    }
}
