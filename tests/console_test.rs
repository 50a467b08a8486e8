//! End-to-end tests for the wired console: four stores, four scripted clients.

use std::sync::Arc;

use workshop_console::framework::mock::MockCollectionClient;
use workshop_console::framework::QueryState;
use workshop_console::lifecycle::Console;
use workshop_console::model::{
    Customer, Product, ProductPatch, Service, ServiceDraft, Supplier,
};

struct Mocks {
    customers: MockCollectionClient<Customer>,
    services: MockCollectionClient<Service>,
    products: MockCollectionClient<Product>,
    suppliers: MockCollectionClient<Supplier>,
}

impl Mocks {
    /// Every store fetches its full list on startup.
    fn new() -> Self {
        let mut mocks = Self {
            customers: MockCollectionClient::new(),
            services: MockCollectionClient::new(),
            products: MockCollectionClient::new(),
            suppliers: MockCollectionClient::new(),
        };
        mocks.customers.expect_list_all().return_ok(vec![]);
        mocks.services.expect_list_all().return_ok(vec![]);
        mocks.products.expect_list_all().return_ok(vec![]);
        mocks.suppliers.expect_list_all().return_ok(vec![]);
        mocks
    }

    fn console(&self) -> Console {
        Console::with_clients(
            Arc::new(self.customers.clone()),
            Arc::new(self.services.clone()),
            Arc::new(self.products.clone()),
            Arc::new(self.suppliers.clone()),
        )
    }

    fn verify(&self) {
        self.customers.verify();
        self.services.verify();
        self.products.verify();
        self.suppliers.verify();
    }
}

fn juan() -> Customer {
    Customer {
        id: 1,
        name: "Juan".to_string(),
        dni: "12345678".to_string(),
        phone: "999".to_string(),
        active: Some(true),
    }
}

fn acme() -> Supplier {
    Supplier {
        id: 4,
        business_name: "Acme".to_string(),
        ruc: "12345678901".to_string(),
        phone: "987654321".to_string(),
        active: Some(true),
    }
}

#[tokio::test]
async fn update_resyncs_the_customer_snapshot() {
    let mut mocks = Mocks::new();

    let mut renamed = juan();
    renamed.name = "Juan Pérez".to_string();

    mocks.customers.expect_list_all().return_ok(vec![juan()]);
    mocks.customers.expect_update(1).return_ok();
    mocks.customers.expect_list_all().return_ok(vec![renamed.clone()]);

    let console = mocks.console();

    let snapshot = console.customers.fetch_all().await.unwrap();
    assert_eq!(snapshot, vec![juan()]);

    assert!(console.customers.update(1, renamed.clone()).await.unwrap());

    let state = console.customers.state();
    assert_eq!(state.records, vec![renamed]);
    assert!(!state.loading);
    assert_eq!(state.error, None);

    console.shutdown().await.expect("Failed to shut down console");
    mocks.verify();
}

#[tokio::test]
async fn delete_inside_supplier_search_stays_search_scoped() {
    let mut mocks = Mocks::new();

    mocks.suppliers.expect_search("Acme").return_ok(vec![acme()]);
    mocks.suppliers.expect_soft_delete(4).return_ok();
    // The re-sync repeats the active search rather than fetching the full list.
    mocks.suppliers.expect_search("Acme").return_ok(vec![]);

    let console = mocks.console();

    let found = console.suppliers.search("Acme").await.unwrap();
    assert_eq!(found, vec![acme()]);

    assert!(console.suppliers.delete(4).await.unwrap());

    let state = console.suppliers.state();
    assert!(state.records.is_empty());
    assert_eq!(state.query, QueryState::Search("Acme".to_string()));

    console.shutdown().await.expect("Failed to shut down console");
    mocks.verify();
}

#[tokio::test]
async fn stores_are_isolated_from_each_other() {
    let mut mocks = Mocks::new();

    mocks.services.expect_create().return_ok(Service {
        id: 9,
        description: "Cambio de aceite".to_string(),
        price: 80.0,
        active: Some(true),
    });
    mocks.services.expect_list_all().return_ok(vec![Service {
        id: 9,
        description: "Cambio de aceite".to_string(),
        price: 80.0,
        active: Some(true),
    }]);

    let console = mocks.console();

    let ok = console
        .services
        .create(ServiceDraft {
            description: "Cambio de aceite".to_string(),
            price: 80.0,
        })
        .await
        .unwrap();
    assert!(ok);
    assert_eq!(console.services.records().len(), 1);

    // The other stores saw nothing beyond their startup fetch.
    assert!(console.customers.records().is_empty());
    assert!(console.products.records().is_empty());
    assert!(console.suppliers.records().is_empty());

    console.shutdown().await.expect("Failed to shut down console");
    mocks.verify();
}

#[tokio::test]
async fn patch_uses_partial_update_and_resyncs() {
    let mut mocks = Mocks::new();

    let filter = Product {
        id: 10,
        name: "Filtro de aceite".to_string(),
        price: 35.5,
        stock: 12,
        supplier_id: 4,
        active: Some(true),
        supplier: None,
    };

    mocks.products.expect_partial_update(10).return_ok();
    let mut restocked = filter.clone();
    restocked.stock = 40;
    mocks.products.expect_list_all().return_ok(vec![restocked.clone()]);

    let console = mocks.console();

    let ok = console
        .products
        .patch(
            10,
            ProductPatch {
                stock: Some(40),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(ok);
    assert_eq!(console.products.records(), vec![restocked]);

    console.shutdown().await.expect("Failed to shut down console");
    mocks.verify();
}
