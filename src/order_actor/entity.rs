//! [`ActorEntity`] implementation for the Order domain type.
//!
//! An order is accepted only when
//! - it has 1 to 4 items, each for a different product, with a quantity of 1 to 10,
//! - its history starts with a `New` event, never goes back in time and ends in
//!   the order's current state,
//! - its creator, pickup location and products exist in their stores.

use crate::clients::{ActorClient, PickupLocationClient, ProductClient, UserClient};
use crate::framework::ActorEntity;
use crate::model::{HistoryItem, Order, OrderCreate, OrderId, OrderItem, OrderState};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Stores an order depends on, injected through `ResourceActor::run`.
pub type OrderContext = (UserClient, ProductClient, PickupLocationClient);

pub const MAX_ITEMS: usize = 4;
pub const MAX_QUANTITY: u32 = 10;

/// Checks the item and history invariants shared by drafts and stored orders.
pub fn validate_order(
    state: OrderState,
    items: &[OrderItem],
    history: &[HistoryItem],
) -> Result<(), OrderError> {
    if items.is_empty() || items.len() > MAX_ITEMS {
        return Err(OrderError::ValidationError(format!(
            "expected 1 to {} items, got {}",
            MAX_ITEMS,
            items.len()
        )));
    }
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.product) {
            return Err(OrderError::ValidationError(format!("{} ordered twice", item.product)));
        }
        if item.quantity == 0 || item.quantity > MAX_QUANTITY {
            return Err(OrderError::ValidationError(format!(
                "quantity {} of {} out of range",
                item.quantity, item.product
            )));
        }
    }

    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return Err(OrderError::ValidationError("history is empty".to_string()));
    };
    if first.new_state != OrderState::New {
        return Err(OrderError::ValidationError(format!(
            "history starts with {} instead of new",
            first.new_state
        )));
    }
    if last.new_state != state {
        return Err(OrderError::ValidationError(format!(
            "state is {} but history ends with {}",
            state, last.new_state
        )));
    }
    if let Some(pair) = history.windows(2).find(|pair| pair[1].timestamp < pair[0].timestamp) {
        return Err(OrderError::ValidationError(format!(
            "'{}' at {} precedes '{}' at {}",
            pair[1].message, pair[1].timestamp, pair[0].message, pair[0].timestamp
        )));
    }
    Ok(())
}

impl OrderCreate {
    pub fn validate(&self) -> Result<(), OrderError> {
        validate_order(self.state, &self.items, &self.history)
    }
}

impl Order {
    pub fn validate(&self) -> Result<(), OrderError> {
        validate_order(self.state, &self.items, &self.history)
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order::from_draft(id, params))
    }

    /// Validates the order and checks its references against the other stores.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        self.validate()?;

        let (users, products, pickup_locations) = ctx;
        let to_comm = |e: &dyn std::error::Error| OrderError::ActorCommunicationError(e.to_string());

        debug!(user_id = %self.created_by, "Verifying creator");
        if users.get(self.created_by).await.map_err(|e| to_comm(&e))?.is_none() {
            return Err(OrderError::InvalidUser(self.created_by.to_string()));
        }

        if pickup_locations
            .get(self.pickup_location)
            .await
            .map_err(|e| to_comm(&e))?
            .is_none()
        {
            return Err(OrderError::InvalidPickupLocation(self.pickup_location.to_string()));
        }

        for item in &self.items {
            if products.get(item.product).await.map_err(|e| to_comm(&e))?.is_none() {
                return Err(OrderError::InvalidProduct(item.product.to_string()));
            }
        }
        Ok(())
    }
}
