use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for PickupLocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PickupLocationId(pub u32);

impl From<u32> for PickupLocationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PickupLocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pickup_location_{}", self.0)
    }
}

/// A place where customers collect their orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupLocation {
    pub id: PickupLocationId,
    pub name: String,
}

impl PickupLocation {
    pub fn new(id: PickupLocationId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Payload for creating a new pickup location.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupLocationCreate {
    pub name: String,
}
