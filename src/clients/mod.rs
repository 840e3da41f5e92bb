//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! These are the storage sinks the demo-data generator writes through.

pub mod actor_client;
pub mod order_client;
pub mod pickup_location_client;
pub mod product_client;
pub mod user_client;

pub use actor_client::*;
pub use order_client::*;
pub use pickup_location_client::*;
pub use product_client::*;
pub use user_client::*;
