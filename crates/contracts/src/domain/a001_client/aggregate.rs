use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
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

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// CRM record for a client. `base.description` holds the contact name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub address: String,

    /// Where the lead came from (referral, instagram, ...)
    #[serde(rename = "leadSource", default)]
    pub lead_source: String,
}

impl Client {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        company: String,
        phone: String,
        email: String,
        address: String,
        lead_source: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ClientId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            company,
            phone,
            email,
            address,
            lead_source,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &ClientDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.company = dto.company.clone().unwrap_or_default();
        self.phone = dto.phone.clone().unwrap_or_default();
        self.email = dto.email.clone().unwrap_or_default();
        self.address = dto.address.clone().unwrap_or_default();
        self.lead_source = dto.lead_source.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Client name cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if !self.phone.trim().is_empty() {
            let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
            if !(7..=15).contains(&digits) {
                return Err(format!("Invalid phone number: {}", self.phone));
            }
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err(format!("Invalid email: {}", self.email));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Client"
    }

    fn list_name() -> &'static str {
        "Clients"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "leadSource")]
    pub lead_source: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Client {
        Client::new_for_insert(
            "CLT-001".into(),
            "Ana Souza".into(),
            "".into(),
            "+55 11 99876-5432".into(),
            "ana@example.com".into(),
            "".into(),
            "referral".into(),
            None,
        )
    }

    #[test]
    fn valid_client_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut client = sample();
        client.base.description = "  ".into();
        assert!(client.validate().is_err());
    }

    #[test]
    fn short_phone_rejected() {
        let mut client = sample();
        client.phone = "12345".into();
        assert!(client.validate().is_err());
    }

    #[test]
    fn empty_phone_allowed() {
        let mut client = sample();
        client.phone = "".into();
        assert!(client.validate().is_ok());
    }
}
