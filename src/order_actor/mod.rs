//! Order-specific store logic and entity implementation.
//!
//! The order store is the only one with dependencies: before an order is accepted,
//! its creator, pickup location and products are looked up in their own stores.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// The actor must be started with an [`OrderContext`].
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}
