//! [`ActorEntity`] implementation for the PickupLocation domain type.

use crate::framework::ActorEntity;
use crate::model::{PickupLocation, PickupLocationCreate, PickupLocationId};
use crate::pickup_location_actor::PickupLocationError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for PickupLocation {
    type Id = PickupLocationId;
    type Create = PickupLocationCreate;
    type Context = ();
    type Error = PickupLocationError;

    fn from_create_params(id: PickupLocationId, params: PickupLocationCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name))
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
