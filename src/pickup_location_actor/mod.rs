//! Pickup-location store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PickupLocationClient;
use crate::framework::ResourceActor;
use crate::model::PickupLocation;

/// Creates a new PickupLocation actor and its client.
pub fn new() -> (ResourceActor<PickupLocation>, PickupLocationClient) {
    let (actor, generic_client) = ResourceActor::new(8);
    (actor, PickupLocationClient::new(generic_client))
}
