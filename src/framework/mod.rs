//! Generic resource-store framework.
//!
//! This module provides the core building blocks for mirroring remote REST
//! collections on the client side, with consistent loading/error state and
//! automatic re-synchronization after every mutation.
//!
//! # Main Components
//!
//! - [`CollectionRecord`] - Trait that record types implement to be managed by a store
//! - [`CollectionClient`] - Contract for the remote CRUD + search operations
//! - [`ResourceStore`] - Generic store task that owns one collection snapshot
//! - [`StoreHandle`] - Type-safe handle used by view controllers
//!
//! # Testing
//!
//! See the [`mock`] module for a scripted [`MockCollectionClient`](mock::MockCollectionClient)
//! that lets you exercise stores without a backend.

pub mod core;
pub mod mock;
pub mod record;
pub mod remote;
pub mod state;

// Re-export core types for convenience
pub use self::core::{ResourceStore, StoreError, StoreHandle, StoreRequest};
pub use self::record::{CollectionRecord, RecordId};
pub use self::remote::{CollectionClient, RemoteError};
pub use self::state::{QueryState, StoreState};
