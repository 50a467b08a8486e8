//! Observable store state.

use crate::framework::record::CollectionRecord;

/// Which view the store is currently mirroring.
///
/// Exactly one mode is active at a time; switching modes replaces the
/// collection snapshot with the other mode's fetch result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    /// The full active list.
    #[default]
    All,
    /// Results of the recorded search term (non-empty, trimmed).
    Search(String),
}

impl QueryState {
    /// The active search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        match self {
            QueryState::All => None,
            QueryState::Search(term) => Some(term),
        }
    }
}

/// Snapshot of everything a view controller needs to render one collection.
///
/// Published through a `watch` channel: any number of consumers may read the
/// latest value or await changes, but none may mutate it directly. All
/// mutation goes through the store's operations.
#[derive(Debug, Clone)]
pub struct StoreState<R: CollectionRecord> {
    /// Records in whatever order the backend returned them. Duplicate ids from
    /// the backend are passed through as-is.
    pub records: Vec<R>,
    /// The view the snapshot belongs to.
    pub query: QueryState,
    /// A full-list fetch is in flight.
    pub loading: bool,
    /// A search fetch is in flight.
    pub is_searching: bool,
    /// The last operation's failure, cleared when the next operation starts.
    pub error: Option<String>,
}

impl<R: CollectionRecord> StoreState<R> {
    /// Initial state: a store begins life with its full-list fetch pending.
    pub(crate) fn initial() -> Self {
        Self {
            records: Vec::new(),
            query: QueryState::All,
            loading: true,
            is_searching: false,
            error: None,
        }
    }
}
