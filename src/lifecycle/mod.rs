//! Store lifecycle and observability setup.
//!
//! - [`StoreSystem`] starts the four stores, wires the order store to the others and
//!   shuts everything down again
//! - [`setup_tracing`] installs the log subscriber

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use tracing::*;
