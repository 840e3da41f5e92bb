use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// What a user is allowed to do in the order-management application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Baker,
    Barista,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Baker => "baker",
            Role::Barista => "barista",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a registered user in the system.
///
/// # Store
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
/// The email is the natural key and must be unique within the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: Role,
    /// A locked account cannot be edited or removed from the admin views.
    pub locked: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCreate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: Role,
    pub locked: bool,
}

impl UserCreate {
    /// Creates a new user draft.
    ///
    /// `password_hash` must already be encoded; plaintext never reaches the store.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
        locked: bool,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password_hash: password_hash.into(),
            role,
            locked,
        }
    }
}

impl User {
    /// Builds the stored user from its assigned ID and draft.
    pub fn from_draft(id: UserId, draft: UserCreate) -> Self {
        Self {
            id,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            password_hash: draft.password_hash,
            role: draft.role,
            locked: draft.locked,
        }
    }
}
