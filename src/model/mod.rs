//! Pure data structures persisted through [`ActorEntity`](crate::framework::ActorEntity) stores.
//!
//! Each kind comes as a pair: the unsaved draft (`*Create`) and the stored value,
//! which additionally carries the identity assigned by its store.

pub mod order;
pub mod pickup_location;
pub mod product;
pub mod user;

pub use order::*;
pub use pickup_location::*;
pub use product::*;
pub use user::*;
