//! The remote collection contract and its normalized failure shape.

use async_trait::async_trait;

use crate::framework::record::{CollectionRecord, RecordId};

/// Normalized failure shape for every remote operation.
///
/// HTTP failures carry the response status; transport failures (the request
/// never produced a status) carry `status_code` 0. `details` keeps the raw
/// response body for diagnostics when one was available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
    pub status_code: u16,
    pub details: Option<String>,
}

impl RemoteError {
    /// Failure derived from a non-2xx HTTP response.
    pub fn status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            details: None,
        }
    }

    /// Network-level failure before any HTTP status was received.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 0,
            details: None,
        }
    }

    /// Attaches the raw response body.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Typed CRUD + search operations against one REST resource.
///
/// This is the seam between a [`ResourceStore`](crate::framework::ResourceStore)
/// and the transport. The store never constructs requests or parses responses;
/// it only sees records and [`RemoteError`]s. Server-side matching semantics of
/// `search` (fields matched, case sensitivity) are opaque to the store.
///
/// `soft_delete` and `restore` flip the record's active flag on the backend;
/// neither destroys the row.
#[async_trait]
pub trait CollectionClient<R: CollectionRecord>: Send + Sync + 'static {
    /// Fetches the full active list.
    async fn list_all(&self) -> Result<Vec<R>, RemoteError>;

    /// Fetches the records matching `term`.
    async fn search(&self, term: &str) -> Result<Vec<R>, RemoteError>;

    /// Creates a record and returns the server-assigned result, id included.
    async fn create(&self, draft: R::Draft) -> Result<R, RemoteError>;

    /// Replaces the record at `id`.
    async fn update(&self, id: RecordId, record: R) -> Result<(), RemoteError>;

    /// Applies a field-level update to the record at `id`.
    async fn partial_update(&self, id: RecordId, patch: R::Patch) -> Result<(), RemoteError>;

    /// Deactivates the record at `id`.
    async fn soft_delete(&self, id: RecordId) -> Result<(), RemoteError>;

    /// Re-activates the record at `id`.
    async fn restore(&self, id: RecordId) -> Result<(), RemoteError>;
}
