//! # User Client
//!
//! Wraps a `ResourceClient<User>` and maps store failures into [`UserError`].
use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::User;
use crate::user_actor::UserError;
use async_trait::async_trait;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Conflict(email) => UserError::AlreadyExists(email),
            FrameworkError::EntityError(inner) => {
                downcast_entity_error(inner, UserError::ActorCommunicationError)
            }
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
