//! # Core Resource Store
//!
//! This module defines the generic store that mirrors one remote collection.
//!
//! ## Key Types
//!
//! - [`ResourceStore`]: The store task that owns the snapshot and all state.
//! - [`StoreHandle`]: The cloneable handle used by view controllers.
//! - [`StoreError`]: Channel-level errors (e.g., StoreClosed).
//!
//! ## Consistency Contract
//!
//! Every successful mutation (create/update/patch/delete/restore) is followed
//! by exactly one re-fetch of the store's current query state — the active
//! search term is re-run, otherwise the full list is fetched — before the
//! operation resolves. Callers never have to reason about whether a
//! just-created record appears in a filtered view; the store re-derives the
//! correct view automatically.
//!
//! ## Concurrency Model
//!
//! Each store runs in its own Tokio task and processes requests *sequentially*
//! from its mailbox. State needs no locks, and overlapping operations on one
//! store cannot race: a second request waits until the first one (including its
//! re-sync fetch) has settled.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::framework::record::{CollectionRecord, RecordId};
use crate::framework::remote::{CollectionClient, RemoteError};
use crate::framework::state::{QueryState, StoreState};

// =============================================================================
// 1. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur while talking to the store task itself.
///
/// Remote failures never appear here: the store absorbs them into its `error`
/// state and resolves mutation operations to `false` instead.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the store to request operations.
///
/// The variants map directly to the operations of the resource
/// synchronization pattern: the two fetch modes, the mode switchers, and the
/// five mutations. It is generic over `R: CollectionRecord` and uses the
/// record's associated types (`Draft`, `Patch`) so a payload for one record
/// type can never reach another type's store.
#[derive(Debug)]
pub enum StoreRequest<R: CollectionRecord> {
    FetchAll {
        respond_to: Response<Vec<R>>,
    },
    Search {
        term: String,
        respond_to: Response<Vec<R>>,
    },
    ClearSearch {
        respond_to: Response<Vec<R>>,
    },
    Refresh {
        respond_to: Response<Vec<R>>,
    },
    Create {
        draft: R::Draft,
        respond_to: Response<bool>,
    },
    Update {
        id: RecordId,
        record: R,
        respond_to: Response<bool>,
    },
    Patch {
        id: RecordId,
        patch: R::Patch,
        respond_to: Response<bool>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<bool>,
    },
    Restore {
        id: RecordId,
        respond_to: Response<bool>,
    },
}

// =============================================================================
// 2. THE GENERIC STORE TASK
// =============================================================================

/// The generic store that owns the client-side copy of one remote collection.
///
/// # Architecture Note
/// This struct is the "server" half of the store. It owns the snapshot, the
/// query/loading/error state, and the receiver end of the mailbox. The remote
/// system stays the sole source of truth: the store holds no persistent state
/// beyond its in-memory snapshot.
///
/// The collection client is injected at construction, one per store instance.
/// No two stores share mutable state.
pub struct ResourceStore<R: CollectionRecord> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    client: Arc<dyn CollectionClient<R>>,
    state: StoreState<R>,
    publisher: watch::Sender<StoreState<R>>,
}

impl<R: CollectionRecord> ResourceStore<R> {
    pub fn new(
        buffer_size: usize,
        client: Arc<dyn CollectionClient<R>>,
    ) -> (Self, StoreHandle<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, state_rx) = watch::channel(StoreState::initial());
        let store = Self {
            receiver,
            client,
            state: StoreState::initial(),
            publisher,
        };
        let handle = StoreHandle {
            sender,
            state: state_rx,
        };
        (store, handle)
    }

    /// Runs the store's event loop, processing requests until the mailbox closes.
    ///
    /// The full active list is fetched immediately on startup, before any
    /// request is served.
    pub async fn run(mut self) {
        let record_type = Self::record_type();
        info!(record_type, "Store started");

        self.fetch_all().await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::FetchAll { respond_to } => {
                    self.state.query = QueryState::All;
                    let snapshot = self.fetch_all().await;
                    let _ = respond_to.send(snapshot);
                }
                StoreRequest::Search { term, respond_to } => {
                    let snapshot = self.search(&term).await;
                    let _ = respond_to.send(snapshot);
                }
                StoreRequest::ClearSearch { respond_to } => {
                    debug!(record_type, "Clear search");
                    self.state.query = QueryState::All;
                    let snapshot = self.fetch_all().await;
                    let _ = respond_to.send(snapshot);
                }
                StoreRequest::Refresh { respond_to } => {
                    debug!(record_type, "Refresh");
                    let snapshot = self.resync().await;
                    let _ = respond_to.send(snapshot);
                }
                StoreRequest::Create { draft, respond_to } => {
                    debug!(record_type, ?draft, "Create");
                    self.begin_mutation();
                    let result = self.client.create(draft).await.map(drop);
                    let ok = self.finish_mutation("create", result).await;
                    let _ = respond_to.send(ok);
                }
                StoreRequest::Update {
                    id,
                    record,
                    respond_to,
                } => {
                    debug!(record_type, id, "Update");
                    self.begin_mutation();
                    let result = self.client.update(id, record).await;
                    let ok = self.finish_mutation("update", result).await;
                    let _ = respond_to.send(ok);
                }
                StoreRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(record_type, id, ?patch, "Patch");
                    self.begin_mutation();
                    let result = self.client.partial_update(id, patch).await;
                    let ok = self.finish_mutation("patch", result).await;
                    let _ = respond_to.send(ok);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(record_type, id, "Delete");
                    self.begin_mutation();
                    let result = self.client.soft_delete(id).await;
                    let ok = self.finish_mutation("delete", result).await;
                    let _ = respond_to.send(ok);
                }
                StoreRequest::Restore { id, respond_to } => {
                    debug!(record_type, id, "Restore");
                    self.begin_mutation();
                    let result = self.client.restore(id).await;
                    let ok = self.finish_mutation("restore", result).await;
                    let _ = respond_to.send(ok);
                }
            }
        }

        info!(
            record_type,
            size = self.state.records.len(),
            "Store shutdown"
        );
    }

    // Extract just the type name (e.g., "Supplier" instead of
    // "workshop_console::model::supplier::Supplier")
    fn record_type() -> &'static str {
        std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Publishes the current state to every subscribed handle.
    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    /// Fetches the full list and replaces the snapshot on success.
    ///
    /// On failure the previous snapshot stays visible and only `error` is set.
    /// `loading` is reset in all cases. Does not touch the query state; the
    /// request arms decide which mode the fetch belongs to.
    async fn fetch_all(&mut self) -> Vec<R> {
        let record_type = Self::record_type();
        self.state.loading = true;
        self.state.error = None;
        self.publish();

        match self.client.list_all().await {
            Ok(records) => {
                info!(record_type, count = records.len(), "Fetched full list");
                self.state.records = records;
            }
            Err(e) => {
                warn!(record_type, error = %e, status = e.status_code, "Fetch failed");
                self.state.error = Some(e.message);
            }
        }

        self.state.loading = false;
        self.publish();
        self.state.records.clone()
    }

    /// Runs a search and replaces the snapshot on success.
    ///
    /// A term that is empty after trimming degrades to [`Self::fetch_all`]
    /// with no search term recorded. Otherwise the trimmed term becomes the
    /// active query before the remote call is made, so it stays recorded even
    /// when the search itself fails.
    async fn search(&mut self, term: &str) -> Vec<R> {
        let record_type = Self::record_type();
        let term = term.trim();
        if term.is_empty() {
            self.state.query = QueryState::All;
            return self.fetch_all().await;
        }

        self.state.is_searching = true;
        self.state.error = None;
        self.state.query = QueryState::Search(term.to_string());
        self.publish();

        match self.client.search(term).await {
            Ok(records) => {
                info!(record_type, term, count = records.len(), "Search done");
                self.state.records = records;
            }
            Err(e) => {
                warn!(record_type, term, error = %e, status = e.status_code, "Search failed");
                self.state.error = Some(e.message);
            }
        }

        self.state.is_searching = false;
        self.publish();
        self.state.records.clone()
    }

    /// Repeats the current query state: the active search term, or the full list.
    async fn resync(&mut self) -> Vec<R> {
        match self.state.query.clone() {
            QueryState::Search(term) => self.search(&term).await,
            QueryState::All => self.fetch_all().await,
        }
    }

    fn begin_mutation(&mut self) {
        self.state.error = None;
        self.publish();
    }

    /// Settles a mutation: re-sync the current view on success, record the
    /// failure otherwise. A re-sync that itself fails still reports the
    /// mutation as successful; the fetch failure lands in `error`.
    async fn finish_mutation(&mut self, op: &'static str, result: Result<(), RemoteError>) -> bool {
        let record_type = Self::record_type();
        match result {
            Ok(()) => {
                self.resync().await;
                info!(record_type, op, "Mutation applied");
                true
            }
            Err(e) => {
                warn!(record_type, op, error = %e, status = e.status_code, "Mutation failed");
                self.state.error = Some(e.message);
                self.publish();
                false
            }
        }
    }
}

// =============================================================================
// 3. THE GENERIC HANDLE
// =============================================================================

/// A type-safe handle for interacting with a [`ResourceStore`].
///
/// Cloneable and cheap to share: it holds a mailbox sender and a `watch`
/// receiver for the published [`StoreState`]. Fetch operations resolve to the
/// resulting snapshot (stale on failure); mutation operations resolve to a
/// success flag. Remote failures are observed only through
/// [`StoreState::error`] — no operation propagates them.
#[derive(Clone)]
pub struct StoreHandle<R: CollectionRecord> {
    sender: mpsc::Sender<StoreRequest<R>>,
    state: watch::Receiver<StoreState<R>>,
}

impl<R: CollectionRecord> StoreHandle<R> {
    /// Fetches the full active list and switches the store to full-list mode.
    pub async fn fetch_all(&self) -> Result<Vec<R>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FetchAll { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Searches for `term`. Empty or whitespace-only input degrades to
    /// [`Self::fetch_all`] semantics.
    pub async fn search(&self, term: impl Into<String>) -> Result<Vec<R>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Search {
                term: term.into(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Discards the active search term and fetches the full list.
    pub async fn clear_search(&self) -> Result<Vec<R>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::ClearSearch { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Re-runs the current query state without changing it.
    pub async fn refresh(&self) -> Result<Vec<R>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Refresh { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Creates a record from `draft`. Resolves to `true` once the snapshot has
    /// been re-synchronized, `false` if the remote call failed.
    pub async fn create(&self, draft: R::Draft) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { draft, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Replaces the record at `id`. Same contract as [`Self::create`].
    pub async fn update(&self, id: RecordId, record: R) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                record,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Applies a field-level update to the record at `id`. Same contract as
    /// [`Self::create`].
    pub async fn patch(&self, id: RecordId, patch: R::Patch) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Patch {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Soft-deletes the record at `id` (the backend flips its active flag off).
    /// Same contract as [`Self::create`].
    pub async fn delete(&self, id: RecordId) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Restores the record at `id` (flips its active flag back on). Restoring
    /// an already-active record is a backend no-op and still succeeds.
    pub async fn restore(&self, id: RecordId) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Restore { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// The latest published state.
    pub fn state(&self) -> StoreState<R> {
        self.state.borrow().clone()
    }

    /// The latest published snapshot.
    pub fn records(&self) -> Vec<R> {
        self.state.borrow().records.clone()
    }

    /// The last operation's failure, if no operation has started since.
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Subscribes to state changes. Useful for awaiting a specific state with
    /// `Receiver::wait_for`.
    pub fn subscribe(&self) -> watch::Receiver<StoreState<R>> {
        self.state.clone()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
