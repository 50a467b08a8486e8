//! # Mock Collection Client
//!
//! Utilities for testing stores in isolation.
//!
//! [`MockCollectionClient`] implements [`CollectionClient`] against a scripted
//! queue of expectations. Queue responses with helpers like
//! [`expect_list_all`](MockCollectionClient::expect_list_all) or
//! [`expect_create`](MockCollectionClient::expect_create), hand a clone of the
//! mock to the store, and call [`verify`](MockCollectionClient::verify) at the
//! end of the test.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::framework::record::{CollectionRecord, RecordId};
use crate::framework::remote::{CollectionClient, RemoteError};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents one expected remote call and its scripted response.
enum Expectation<R: CollectionRecord> {
    ListAll {
        response: Result<Vec<R>, RemoteError>,
    },
    Search {
        term: String,
        response: Result<Vec<R>, RemoteError>,
    },
    Create {
        response: Result<R, RemoteError>,
    },
    Void {
        kind: VoidKind,
        id: RecordId,
        response: Result<(), RemoteError>,
    },
}

/// The four void-returning mutations share one expectation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VoidKind {
    Update,
    PartialUpdate,
    SoftDelete,
    Restore,
}

impl VoidKind {
    fn op(self) -> &'static str {
        match self {
            VoidKind::Update => "update",
            VoidKind::PartialUpdate => "partial_update",
            VoidKind::SoftDelete => "soft_delete",
            VoidKind::Restore => "restore",
        }
    }
}

/// A scripted [`CollectionClient`] with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockCollectionClient::<Supplier>::new();
/// mock.expect_list_all().return_ok(vec![acme.clone()]);
/// mock.expect_soft_delete(1).return_ok();
/// mock.expect_list_all().return_ok(vec![]);
///
/// let (store, handle) = ResourceStore::new(8, Arc::new(mock.clone()));
/// // Use the store in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
///
/// Calls are matched strictly in queue order; a call with no matching
/// expectation panics, which fails the test with a precise message.
pub struct MockCollectionClient<R: CollectionRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: CollectionRecord> Clone for MockCollectionClient<R> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
        }
    }
}

impl<R: CollectionRecord> Default for MockCollectionClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CollectionRecord> MockCollectionClient<R> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects a `list_all` call.
    pub fn expect_list_all(&mut self) -> ListExpectationBuilder<R> {
        ListExpectationBuilder {
            term: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `search` call with exactly this term.
    pub fn expect_search(&mut self, term: impl Into<String>) -> ListExpectationBuilder<R> {
        ListExpectationBuilder {
            term: Some(term.into()),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` call.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<R> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` call for this id.
    pub fn expect_update(&mut self, id: RecordId) -> VoidExpectationBuilder<R> {
        self.expect_void(VoidKind::Update, id)
    }

    /// Expects a `partial_update` call for this id.
    pub fn expect_partial_update(&mut self, id: RecordId) -> VoidExpectationBuilder<R> {
        self.expect_void(VoidKind::PartialUpdate, id)
    }

    /// Expects a `soft_delete` call for this id.
    pub fn expect_soft_delete(&mut self, id: RecordId) -> VoidExpectationBuilder<R> {
        self.expect_void(VoidKind::SoftDelete, id)
    }

    /// Expects a `restore` call for this id.
    pub fn expect_restore(&mut self, id: RecordId) -> VoidExpectationBuilder<R> {
        self.expect_void(VoidKind::Restore, id)
    }

    fn expect_void(&mut self, kind: VoidKind, id: RecordId) -> VoidExpectationBuilder<R> {
        VoidExpectationBuilder {
            kind,
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, op: &str) -> Expectation<R> {
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected {op} call: no expectation queued"))
    }
}

#[async_trait]
impl<R: CollectionRecord> CollectionClient<R> for MockCollectionClient<R> {
    async fn list_all(&self) -> Result<Vec<R>, RemoteError> {
        match self.next("list_all") {
            Expectation::ListAll { response } => response,
            _ => panic!("Expectation mismatch: got list_all"),
        }
    }

    async fn search(&self, term: &str) -> Result<Vec<R>, RemoteError> {
        match self.next("search") {
            Expectation::Search {
                term: expected,
                response,
            } => {
                if expected != term {
                    panic!("Expected search for {expected:?}, got {term:?}");
                }
                response
            }
            _ => panic!("Expectation mismatch: got search({term:?})"),
        }
    }

    async fn create(&self, _draft: R::Draft) -> Result<R, RemoteError> {
        match self.next("create") {
            Expectation::Create { response } => response,
            _ => panic!("Expectation mismatch: got create"),
        }
    }

    async fn update(&self, id: RecordId, _record: R) -> Result<(), RemoteError> {
        self.void_call(VoidKind::Update, id)
    }

    async fn partial_update(&self, id: RecordId, _patch: R::Patch) -> Result<(), RemoteError> {
        self.void_call(VoidKind::PartialUpdate, id)
    }

    async fn soft_delete(&self, id: RecordId) -> Result<(), RemoteError> {
        self.void_call(VoidKind::SoftDelete, id)
    }

    async fn restore(&self, id: RecordId) -> Result<(), RemoteError> {
        self.void_call(VoidKind::Restore, id)
    }
}

impl<R: CollectionRecord> MockCollectionClient<R> {
    fn void_call(&self, kind: VoidKind, id: RecordId) -> Result<(), RemoteError> {
        match self.next(kind.op()) {
            Expectation::Void {
                kind: expected_kind,
                id: expected_id,
                response,
            } => {
                if expected_kind != kind || expected_id != id {
                    panic!(
                        "Expected {}({expected_id}), got {}({id})",
                        expected_kind.op(),
                        kind.op()
                    );
                }
                response
            }
            _ => panic!("Expectation mismatch: got {}({id})", kind.op()),
        }
    }
}

/// Builder for `list_all` and `search` expectations.
pub struct ListExpectationBuilder<R: CollectionRecord> {
    term: Option<String>,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: CollectionRecord> ListExpectationBuilder<R> {
    /// Sets the expectation to return these records.
    pub fn return_ok(self, records: Vec<R>) {
        self.push(Ok(records));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<R>, RemoteError>) {
        let expectation = match self.term {
            Some(term) => Expectation::Search { term, response },
            None => Expectation::ListAll { response },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<R: CollectionRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: CollectionRecord> CreateExpectationBuilder<R> {
    /// Sets the expectation to return the server-assigned record.
    pub fn return_ok(self, record: R) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update`/`partial_update`/`soft_delete`/`restore` expectations.
pub struct VoidExpectationBuilder<R: CollectionRecord> {
    kind: VoidKind,
    id: RecordId,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: CollectionRecord> VoidExpectationBuilder<R> {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), RemoteError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Void {
            kind: self.kind,
            id: self.id,
            response,
        });
    }
}
