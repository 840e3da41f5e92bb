//! [`ActorEntity`] implementation for the Product domain type.

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("product name is empty".to_string()));
        }
        Ok(Self::new(id, params.name, params.price))
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.price == 0 {
            return Err(ProductError::ValidationError(format!("'{}' has no price", self.name)));
        }
        Ok(())
    }
}
