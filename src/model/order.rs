/// Represents a customer order together with its fulfillment history.
///
/// # Store
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the checks
/// applied before an [`OrderCreate`] draft is accepted.
use crate::model::{PickupLocationId, ProductId, UserId};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfillment stage of an order.
///
/// Canonical lifecycle: `New -> Confirmed -> Ready -> Delivered`, with `Problem`
/// branching off `Confirmed` and `Cancelled` branching off `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderState {
    New,
    Confirmed,
    Ready,
    Problem,
    Delivered,
    Cancelled,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::New => "new",
            OrderState::Confirmed => "confirmed",
            OrderState::Ready => "ready",
            OrderState::Problem => "problem",
            OrderState::Delivered => "delivered",
            OrderState::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The person an order is made for. Embedded in the order, never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub full_name: String,
    pub phone_number: String,
    pub details: Option<String>,
}

/// Dietary remark attached to an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemComment {
    LactoseFree,
    GlutenFree,
}

impl ItemComment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemComment::LactoseFree => "Lactose free",
            ItemComment::GlutenFree => "Gluten free",
        }
    }
}

impl Display for ItemComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: ProductId,
    pub quantity: u32,
    pub comment: Option<ItemComment>,
}

/// A timestamped state transition and the user who made it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub created_by: UserId,
    pub message: String,
    pub new_state: OrderState,
    pub timestamp: NaiveDateTime,
}

impl HistoryItem {
    pub fn new(
        created_by: UserId,
        message: impl Into<String>,
        new_state: OrderState,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            created_by,
            message: message.into(),
            new_state,
            timestamp,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub created_by: UserId,
    pub customer: Customer,
    pub pickup_location: PickupLocationId,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub state: OrderState,
    pub items: Vec<OrderItem>,
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub created_by: UserId,
    pub customer: Customer,
    pub pickup_location: PickupLocationId,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub state: OrderState,
    pub items: Vec<OrderItem>,
    pub history: Vec<HistoryItem>,
}

impl Order {
    /// Builds the stored order from its assigned ID and draft.
    pub fn from_draft(id: OrderId, draft: OrderCreate) -> Self {
        Self {
            id,
            created_by: draft.created_by,
            customer: draft.customer,
            pickup_location: draft.pickup_location,
            due_date: draft.due_date,
            due_time: draft.due_time,
            state: draft.state,
            items: draft.items,
            history: draft.history,
        }
    }

    /// The moment the order is due to be picked up.
    pub fn due_at(&self) -> NaiveDateTime {
        self.due_date.and_time(self.due_time)
    }
}

impl OrderCreate {
    pub fn due_at(&self) -> NaiveDateTime {
        self.due_date.and_time(self.due_time)
    }
}
