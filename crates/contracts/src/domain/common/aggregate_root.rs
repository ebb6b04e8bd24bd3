use super::EntityMetadata;

/// Root of an aggregate
///
/// Instance accessors plus the static naming used by the tabs and lists.
pub trait AggregateRoot {
    /// Aggregate id type
    type Id;

    /// Record id
    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "2025-0912")
    fn code(&self) -> &str;

    /// Description / title of the record
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "work_order")
    fn collection_name() -> &'static str;

    /// UI name of a single element
    fn element_name() -> &'static str;

    /// UI name of the list
    fn list_name() -> &'static str;

    /// Full aggregate name (e.g. "a001_work_order"), also used as tab key
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
