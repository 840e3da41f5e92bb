//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by `RUST_LOG`.
//!
//! ```bash
//! # Progress messages only
//! RUST_LOG=info cargo run
//!
//! # One line per stored entity and per generated day
//! RUST_LOG=debug cargo run
//!
//! # Every request sent to a store
//! RUST_LOG=trace cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a fresh run looks like:
//!
//! ```text
//! INFO load_data{seed=1}: Generating demo data today=2024-06-15
//! INFO load_data{seed=1}: ... generating users
//! INFO load_data{seed=1}: ... generating products
//! INFO load_data{seed=1}: ... generating pickup locations
//! INFO load_data{seed=1}: ... generating orders
//! INFO load_data{seed=1}: ... generated orders orders=N
//! INFO load_data{seed=1}: Generated demo data
//! ```
//!
//! and a second run against the same stores:
//!
//! ```text
//! INFO load_data{seed=1}: Using existing database
//! ```

/// Installs the global subscriber. Call once, before anything logs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; spans carry the context
        .compact()
        .init();
}
