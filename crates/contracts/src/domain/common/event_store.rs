use serde::{Deserialize, Serialize};

/// Holder for domain events raised by an aggregate (reserved for a later
/// audit-trail implementation, not serialized into the tables yet)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStore {
    _placeholder: (),
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}
