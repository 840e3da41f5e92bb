//! [`ActorEntity`] implementation for the User domain type.
//!
//! Users are keyed by email, compared case-insensitively.

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(User::from_draft(id, params))
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.to_lowercase())
    }

    /// Rejects users without a usable login or without a hashed password.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if !self.email.contains('@') {
            return Err(UserError::ValidationError(format!("invalid email '{}'", self.email)));
        }
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return Err(UserError::ValidationError(format!("missing name for {}", self.email)));
        }
        if self.password_hash.is_empty() {
            return Err(UserError::ValidationError(format!("missing password hash for {}", self.email)));
        }
        Ok(())
    }
}
