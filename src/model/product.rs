/// Represents a product offered by the bakery.
///
/// # Store
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for the
/// creation parameters ([`ProductCreate`](crate::model::ProductCreate)).
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in cents.
    pub price: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the store)
    /// * `name` - Product name
    /// * `price` - Price in cents
    pub fn new(id: ProductId, name: impl Into<String>, price: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Draft for Product creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: u32,
}
