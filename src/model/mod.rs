//! Data structures for the four workshop record types.
//!
//! Field names on the wire are the backend's Spanish identifiers (`nombre`,
//! `razonSocial`, `activo`, ...); the serde renames document the mapping. Each
//! record comes with a `Draft` (create payload, no id) and a `Patch`
//! (field-level update payload) implementing the
//! [`CollectionRecord`](crate::framework::CollectionRecord) contract.

pub mod customer;
pub mod product;
pub mod service;
pub mod supplier;

pub use customer::*;
pub use product::*;
pub use service::*;
pub use supplier::*;
