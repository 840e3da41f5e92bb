//! Error types for the PickupLocation actor.

use thiserror::Error;

/// Errors that can occur during pickup-location operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PickupLocationError {
    /// A location with the same name already exists.
    #[error("Pickup location already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PickupLocationError {
    fn from(msg: String) -> Self {
        PickupLocationError::ActorCommunicationError(msg)
    }
}
