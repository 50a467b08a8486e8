//! # Workshop Console
//!
//! > **The data layer of a vehicle-workshop admin console.**
//!
//! This crate mirrors four remote REST collections — customers, services,
//! products, suppliers — on the client side, keeping each mirror consistent
//! across search, mutation, and soft-delete/restore operations. The pattern is
//! written **once** as a generic store and instantiated four times.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One store, four record types
//!
//! Every collection follows the same lifecycle: fetch the full active list,
//! search it, create/edit records, soft-delete and restore them, and after
//! every mutation re-fetch whatever view is currently showing. Instead of
//! duplicating that logic per record type, [`framework::ResourceStore`] is
//! generic over [`framework::CollectionRecord`], and the transport sits behind
//! the [`framework::CollectionClient`] trait.
//!
//! ### The consistency contract
//!
//! A successful mutation is always followed by exactly one re-fetch of the
//! store's *current* query state — the active search term is re-run, otherwise
//! the full list is fetched — before the operation resolves. Callers never
//! reason about whether a just-created record belongs in a filtered view.
//!
//! ### Concurrency model
//!
//! Each store runs in its own Tokio task and processes requests sequentially
//! from its mailbox, so store state needs no locks and overlapping operations
//! on one store cannot race. State flows out to consumers as an observable
//! snapshot through a `watch` channel.
//!
//! ### Failure semantics
//!
//! Remote failures never propagate to callers as errors. The store absorbs
//! them: the failure message lands in [`framework::StoreState::error`],
//! mutation operations resolve to `false`, and the previous snapshot stays
//! visible. Nothing is retried automatically.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store: [`ResourceStore`](framework::ResourceStore) (the task
//! owning snapshot and state), [`StoreHandle`](framework::StoreHandle) (the
//! cloneable consumer-facing handle), and the
//! [`CollectionClient`](framework::CollectionClient) remote contract.
//!
//! ### 2. The Transport ([`rest`])
//! [`RestCollectionClient`](rest::RestCollectionClient) implements the remote
//! contract over HTTP and normalizes every failure into
//! [`RemoteError`](framework::RemoteError).
//!
//! ### 3. The Records ([`model`])
//! [`Customer`](model::Customer), [`Service`](model::Service),
//! [`Product`](model::Product), and [`Supplier`](model::Supplier), each with
//! its `Draft` and `Patch` payload types and the backend's wire names.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Console`](lifecycle::Console) wires the four stores to their clients,
//! spawns them, and shuts them down.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use workshop_console::lifecycle::{setup_tracing, Console};
//!
//! setup_tracing();
//! let console = Console::from_env();
//!
//! console.suppliers.search("Acme").await?;
//! if console.suppliers.create(draft).await? {
//!     // snapshot already re-synchronized
//! }
//! console.shutdown().await?;
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod rest;
