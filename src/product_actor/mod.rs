//! Product-specific store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}
