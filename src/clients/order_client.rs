use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Order;
use crate::order_actor::OrderError;
use async_trait::async_trait;

/// Client for interacting with the Order actor.
///
/// Reference checks (creator, products, pickup location) happen in the Order
/// actor's `on_create` hook, not here.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => {
                downcast_entity_error(inner, OrderError::ActorCommunicationError)
            }
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
