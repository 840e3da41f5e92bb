use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::PickupLocation;
use crate::pickup_location_actor::PickupLocationError;
use async_trait::async_trait;

/// Client for interacting with the PickupLocation actor.
#[derive(Clone)]
pub struct PickupLocationClient {
    inner: ResourceClient<PickupLocation>,
}

impl PickupLocationClient {
    pub fn new(inner: ResourceClient<PickupLocation>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<PickupLocation> for PickupLocationClient {
    type Error = PickupLocationError;

    fn inner(&self) -> &ResourceClient<PickupLocation> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Conflict(name) => PickupLocationError::AlreadyExists(name),
            FrameworkError::EntityError(inner) => {
                downcast_entity_error(inner, PickupLocationError::ActorCommunicationError)
            }
            other => PickupLocationError::ActorCommunicationError(other.to_string()),
        }
    }
}
