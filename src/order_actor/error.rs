//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The user that created the order does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// A product referenced by an order item does not exist.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// The pickup location does not exist.
    #[error("Invalid pickup location: {0}")]
    InvalidPickupLocation(String),

    /// The order items or history break an order invariant.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
