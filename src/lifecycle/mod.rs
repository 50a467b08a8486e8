//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for wiring the application together:
//!
//! - **Store lifecycle**: Starting the four store tasks and shutting them down
//! - **Dependency injection**: Constructing each store with an explicit
//!   collection client instead of process-wide singletons
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Console`] - The orchestrator that owns all four stores
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod console;
pub mod tracing;

pub use self::console::*;
pub use self::tracing::*;
