//! Store-level tests for the synchronization contract, driven through a single
//! supplier store with a scripted collection client.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use workshop_console::framework::mock::MockCollectionClient;
use workshop_console::framework::{
    CollectionClient, QueryState, RecordId, RemoteError, ResourceStore, StoreHandle,
};
use workshop_console::model::{Supplier, SupplierDraft, SupplierPatch};

fn supplier(id: RecordId, business_name: &str, ruc: &str) -> Supplier {
    Supplier {
        id,
        business_name: business_name.to_string(),
        ruc: ruc.to_string(),
        phone: "987654321".to_string(),
        active: Some(true),
    }
}

fn spawn_store(mock: &MockCollectionClient<Supplier>) -> StoreHandle<Supplier> {
    let (store, handle) = ResourceStore::new(8, Arc::new(mock.clone()));
    tokio::spawn(store.run());
    handle
}

#[tokio::test]
async fn create_while_showing_all_refetches_full_list() {
    let before = vec![
        supplier(1, "Norte SAC", "10000000001"),
        supplier(2, "Sur EIRL", "10000000002"),
        supplier(3, "Centro SA", "10000000003"),
    ];
    let mut after = before.clone();
    after.push(supplier(4, "Acme", "12345678901"));

    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(before);
    mock.expect_create().return_ok(supplier(4, "Acme", "12345678901"));
    // No search term is active, so the re-sync is a full-list fetch.
    mock.expect_list_all().return_ok(after);

    let handle = spawn_store(&mock);

    let ok = handle
        .create(SupplierDraft {
            business_name: "Acme".to_string(),
            ruc: "12345678901".to_string(),
            phone: "987654321".to_string(),
        })
        .await
        .unwrap();
    assert!(ok);

    let records = handle.records();
    assert_eq!(records.len(), 4);
    assert!(records.iter().any(|s| s.ruc == "12345678901"));
    mock.verify();
}

#[tokio::test]
async fn restore_of_already_active_record_still_succeeds() {
    let active = supplier(5, "Acme", "12345678901");

    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(vec![active.clone()]);
    // The backend treats restoring an active record as a no-op and accepts it.
    mock.expect_restore(5).return_ok();
    mock.expect_list_all().return_ok(vec![active]);

    let handle = spawn_store(&mock);

    assert!(handle.restore(5).await.unwrap());
    assert_eq!(handle.error(), None);
    mock.verify();
}

#[tokio::test]
async fn failed_search_keeps_term_and_previous_snapshot() {
    let all = vec![supplier(1, "Norte SAC", "10000000001")];

    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(all.clone());
    mock.expect_search("Acme")
        .return_err(RemoteError::status("Error 503: Service Unavailable", 503));

    let handle = spawn_store(&mock);

    let snapshot = handle.search("Acme").await.unwrap();
    assert_eq!(snapshot, all);

    let state = handle.state();
    assert_eq!(state.error.as_deref(), Some("Error 503: Service Unavailable"));
    // The term stays recorded; a later mutation would re-run this search.
    assert_eq!(state.query, QueryState::Search("Acme".to_string()));
    assert!(!state.is_searching);
    mock.verify();
}

#[tokio::test]
async fn clear_search_returns_to_full_list_mode() {
    let all = vec![
        supplier(1, "Norte SAC", "10000000001"),
        supplier(4, "Acme", "12345678901"),
    ];

    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(all.clone());
    mock.expect_search("Acme").return_ok(vec![all[1].clone()]);
    mock.expect_list_all().return_ok(all.clone());

    let handle = spawn_store(&mock);

    handle.search("Acme").await.unwrap();
    assert_eq!(handle.records().len(), 1);

    let snapshot = handle.clear_search().await.unwrap();
    assert_eq!(snapshot, all);
    assert_eq!(handle.state().query, QueryState::All);
    mock.verify();
}

#[tokio::test]
async fn search_term_is_trimmed_before_use() {
    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(vec![]);
    mock.expect_search("Acme").return_ok(vec![supplier(4, "Acme", "12345678901")]);

    let handle = spawn_store(&mock);

    handle.search("  Acme  ").await.unwrap();
    assert_eq!(handle.state().query, QueryState::Search("Acme".to_string()));
    mock.verify();
}

#[tokio::test]
async fn refresh_repeats_current_query_state() {
    let acme = supplier(4, "Acme", "12345678901");
    let acme_motors = supplier(9, "Acme Motors", "20000000009");

    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(vec![]);
    mock.expect_search("Acme").return_ok(vec![acme.clone()]);
    // Refresh re-runs the active search, picking up backend-side changes.
    mock.expect_search("Acme").return_ok(vec![acme, acme_motors]);

    let handle = spawn_store(&mock);

    handle.search("Acme").await.unwrap();
    let snapshot = handle.refresh().await.unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(handle.state().query, QueryState::Search("Acme".to_string()));
    mock.verify();
}

/// Delegates to the scripted mock, but holds every fetch until the test opens
/// the gate. Lets the test observe in-flight state deterministically.
struct GatedClient {
    inner: MockCollectionClient<Supplier>,
    gate: Arc<Notify>,
}

#[async_trait]
impl CollectionClient<Supplier> for GatedClient {
    async fn list_all(&self) -> Result<Vec<Supplier>, RemoteError> {
        self.gate.notified().await;
        self.inner.list_all().await
    }

    async fn search(&self, term: &str) -> Result<Vec<Supplier>, RemoteError> {
        self.gate.notified().await;
        self.inner.search(term).await
    }

    async fn create(&self, draft: SupplierDraft) -> Result<Supplier, RemoteError> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: RecordId, record: Supplier) -> Result<(), RemoteError> {
        self.inner.update(id, record).await
    }

    async fn partial_update(&self, id: RecordId, patch: SupplierPatch) -> Result<(), RemoteError> {
        self.inner.partial_update(id, patch).await
    }

    async fn soft_delete(&self, id: RecordId) -> Result<(), RemoteError> {
        self.inner.soft_delete(id).await
    }

    async fn restore(&self, id: RecordId) -> Result<(), RemoteError> {
        self.inner.restore(id).await
    }
}

#[tokio::test]
async fn at_most_one_fetch_flag_is_set_at_a_time() {
    let mut mock = MockCollectionClient::<Supplier>::new();
    mock.expect_list_all().return_ok(vec![]);
    mock.expect_search("Acme").return_ok(vec![supplier(4, "Acme", "12345678901")]);

    let gate = Arc::new(Notify::new());
    let client = GatedClient {
        inner: mock.clone(),
        gate: gate.clone(),
    };
    let (store, handle) = ResourceStore::new(8, Arc::new(client));
    tokio::spawn(store.run());

    let mut rx = handle.subscribe();

    // Startup fetch is pending: loading, not searching.
    {
        let state = rx.borrow();
        assert!(state.loading);
        assert!(!state.is_searching);
    }
    gate.notify_one();
    rx.wait_for(|state| !state.loading).await.unwrap();

    // While a search is in flight, only is_searching is set.
    let searcher = handle.clone();
    let task = tokio::spawn(async move { searcher.search("Acme").await });
    {
        let state = rx.wait_for(|state| state.is_searching).await.unwrap();
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }
    gate.notify_one();

    let snapshot = task.await.unwrap().unwrap();
    assert_eq!(snapshot.len(), 1);
    mock.verify();
}
