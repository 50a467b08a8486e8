//! # Observability & Tracing
//!
//! Structured logging setup for the console's data layer.
//!
//! Every store logs its lifecycle and operations with a `record_type` field
//! (e.g., `Supplier`), so one filter covers all four collections. Remote
//! failures are logged at `warn` with the normalized message and status code
//! before being absorbed into store state.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full mutation payloads
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use record_type instead
        .compact()
        .init();
}
