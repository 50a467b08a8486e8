use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::framework::{CollectionClient, ResourceStore, StoreHandle};
use crate::model::{Customer, Product, Service, Supplier};
use crate::rest::RestCollectionClient;

/// Mailbox depth for each store.
const STORE_BUFFER: usize = 32;

// Resource paths as exposed by the workshop backend. Products is the odd one
// out with a plural route.
const CUSTOMER_RESOURCE: &str = "/cliente";
const SERVICE_RESOURCE: &str = "/servicio";
const PRODUCT_RESOURCE: &str = "/productos";
const SUPPLIER_RESOURCE: &str = "/proveedor";

/// Environment variable holding the backend base URL.
const API_URL_VAR: &str = "WORKSHOP_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// The runtime orchestrator for the workshop admin console's data layer.
///
/// `Console` is responsible for:
/// - **Lifecycle management**: starting and stopping the four store tasks
/// - **Dependency injection**: each store receives its collection client
///   explicitly at construction; nothing is a process-wide singleton
///
/// Each store owns its snapshot exclusively and fetches its full active list
/// as soon as its task starts.
///
/// # Example
///
/// ```ignore
/// let console = Console::new("http://localhost:8080/api");
///
/// let suppliers = console.suppliers.fetch_all().await?;
/// console.suppliers.search("Acme").await?;
/// console.suppliers.delete(supplier_id).await?;
///
/// console.shutdown().await?;
/// ```
pub struct Console {
    /// Handle for the customer collection.
    pub customers: StoreHandle<Customer>,

    /// Handle for the service collection.
    pub services: StoreHandle<Service>,

    /// Handle for the product collection.
    pub products: StoreHandle<Product>,

    /// Handle for the supplier collection.
    pub suppliers: StoreHandle<Supplier>,

    /// Task handles for all running stores (used for graceful shutdown).
    handles: Vec<JoinHandle<()>>,
}

impl Console {
    /// Connects every store to the REST backend rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        // One connection pool shared by all four clients.
        let http = reqwest::Client::new();
        Self::with_clients(
            Arc::new(RestCollectionClient::with_http(
                http.clone(),
                base_url,
                CUSTOMER_RESOURCE,
            )),
            Arc::new(RestCollectionClient::with_http(
                http.clone(),
                base_url,
                SERVICE_RESOURCE,
            )),
            Arc::new(RestCollectionClient::with_http(
                http.clone(),
                base_url,
                PRODUCT_RESOURCE,
            )),
            Arc::new(RestCollectionClient::with_http(
                http,
                base_url,
                SUPPLIER_RESOURCE,
            )),
        )
    }

    /// Reads the backend base URL from `WORKSHOP_API_URL`, defaulting to the
    /// local development server.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    /// Wires the four stores with explicitly injected collection clients.
    ///
    /// Tests use this with mock clients; [`Self::new`] uses it with REST
    /// clients.
    pub fn with_clients(
        customers: Arc<dyn CollectionClient<Customer>>,
        services: Arc<dyn CollectionClient<Service>>,
        products: Arc<dyn CollectionClient<Product>>,
        suppliers: Arc<dyn CollectionClient<Supplier>>,
    ) -> Self {
        let (customer_store, customers) = ResourceStore::new(STORE_BUFFER, customers);
        let (service_store, services) = ResourceStore::new(STORE_BUFFER, services);
        let (product_store, products) = ResourceStore::new(STORE_BUFFER, products);
        let (supplier_store, suppliers) = ResourceStore::new(STORE_BUFFER, suppliers);

        let handles = vec![
            tokio::spawn(customer_store.run()),
            tokio::spawn(service_store.run()),
            tokio::spawn(product_store.run()),
            tokio::spawn(supplier_store.run()),
        ];

        Self {
            customers,
            services,
            products,
            suppliers,
            handles,
        }
    }

    /// Gracefully shuts down all stores.
    ///
    /// Dropping the handles closes each store's mailbox; every store finishes
    /// its current request and exits its event loop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down console...");

        drop(self.customers);
        drop(self.services);
        drop(self.products);
        drop(self.suppliers);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Console shutdown complete.");
        Ok(())
    }
}
