//! Record contract for store-managed collections.

use std::fmt::Debug;

/// Identity assigned by the remote system. Never generated client-side.
pub type RecordId = i64;

/// Trait that any record type must implement to be managed by a
/// [`ResourceStore`](crate::framework::ResourceStore).
///
/// # Architecture Note
/// By defining one contract that all four record types (Customer, Service,
/// Product, Supplier) satisfy, we write the store logic *once* and reuse it
/// everywhere. The associated types enforce type safety: a `Customer` store
/// only accepts a `CustomerDraft`, and the compiler rejects everything else.
pub trait CollectionRecord: Clone + Debug + Send + Sync + 'static {
    /// Payload for creating a new record (the record without its id;
    /// the backend assigns one).
    type Draft: Debug + Send + Sync + 'static;

    /// Payload for field-level partial updates.
    type Patch: Debug + Send + Sync + 'static;

    /// The server-assigned identity.
    fn id(&self) -> RecordId;

    /// Soft-delete state. An absent flag on the wire means the record is active.
    fn is_active(&self) -> bool;
}
