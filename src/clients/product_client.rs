//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` and maps store failures into [`ProductError`].
use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Product;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => {
                downcast_entity_error(inner, ProductError::ActorCommunicationError)
            }
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
