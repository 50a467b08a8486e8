//! HTTP-backed [`CollectionClient`](crate::framework::CollectionClient)
//! implementation.
//!
//! One [`RestCollectionClient`] per REST resource; the generic parameter picks
//! the record type and the serde-derived wire format. HTTP failures are
//! normalized into [`RemoteError`](crate::framework::RemoteError) here so the
//! stores never see transport details.

pub mod client;

pub use client::RestCollectionClient;
