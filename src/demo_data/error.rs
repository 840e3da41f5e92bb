//! Errors that abort a demo-data run.

use crate::order_actor::OrderError;
use crate::pickup_location_actor::PickupLocationError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use thiserror::Error;

/// A store rejected a write, or the run could not be set up.
///
/// Nothing is retried or rolled back; entities saved before the failure stay stored.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeneratorError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    PickupLocation(#[from] PickupLocationError),

    #[error(transparent)]
    Order(#[from] OrderError),

    /// Orders need at least one product and one pickup location.
    #[error("No {0} to choose from")]
    EmptyCatalog(&'static str),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}
