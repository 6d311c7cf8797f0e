use super::{EntityMetadata, EventStore};

/// Trait for aggregate roots
///
/// Defines the required instance accessors and the static class-level
/// metadata shared by every aggregate in the system.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance accessors
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code (e.g. "EVT-2026-001")
    fn code(&self) -> &str;

    /// Description / display name
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Domain event holder
    fn events(&self) -> &EventStore;

    /// Mutable domain event holder
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Class-level metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the DB (e.g. "client")
    fn collection_name() -> &'static str;

    /// Singular display name (e.g. "Client")
    fn element_name() -> &'static str;

    /// Plural display name (e.g. "Clients")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_client")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Table prefix for the DB (e.g. "a001_client_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
